use cfg_if::cfg_if;
use leptos::prelude::*;

fn copy_to_clipboard(text: String, set_copied: WriteSignal<bool>) {
    cfg_if! {
        if #[cfg(feature = "hydrate")] {
            use leptos::task::spawn_local;
            use std::time::Duration;
            use wasm_bindgen_futures::JsFuture;
            use web_sys::window;

            if let Some(window) = window() {
                let promise = window.navigator().clipboard().write_text(&text);
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_ok() {
                        set_copied.set(true);
                        set_timeout(
                            move || set_copied.set(false),
                            Duration::from_millis(1500),
                        );
                    }
                });
            }
        } else {
            let _ = (text, set_copied);
        }
    }
}

#[component]
pub fn ShareButton(url: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    view! {
        <button
            class="px-3 py-1 text-sm rounded-md border border-teal-600 dark:border-seafoam-600
            text-gray-700 dark:text-gray-200 bg-white dark:bg-teal-800
            hover:border-seafoam-500 dark:hover:border-aqua-500 transition-colors"
            on:click=move |_| copy_to_clipboard(url.clone(), set_copied)
        >
            {move || if copied.get() { "Copied!" } else { "Share" }}
        </button>
    }
}
