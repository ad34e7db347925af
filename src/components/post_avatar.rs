use leptos::prelude::*;

#[component]
pub fn PostAvatar(
    /// Author display name, first character becomes the fallback glyph
    name: String,
    /// Blog the avatar links back to
    url: String,
) -> impl IntoView {
    let initial = name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    view! {
        <a href=url title=name>
            <div class="w-12 h-12 bg-seafoam-500 rounded-full flex items-center justify-center text-white text-base font-medium">
                {initial}
            </div>
        </a>
    }
}
