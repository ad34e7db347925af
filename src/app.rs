use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::post::PostView;
use crate::error_template::{AppError, ErrorTemplate};
use crate::server_fn::posts::get_post_list;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/spyglass.css"/>

        // sets the document title
        <Title text="spyglass"/>

        <Router>
            <main>
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! { <ErrorTemplate outside_errors/> }.into_view()
                }>
                    <Route path=StaticSegment("") view=ReaderPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ReaderPage() -> impl IntoView {
    let post_refs = Resource::new(|| (), |_| get_post_list());
    let (current, set_current) = signal(0usize);

    view! {
        <div class="w-full mx-auto px-2">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl text-left pl-4 p-4 font-bold text-gray-800 dark:text-gray-200">
                    "spyglass"
                </h1>
            </div>

            <Suspense fallback=|| {
                view! {
                    <p class="text-center text-teal-600 dark:text-aqua-400">"Loading posts..."</p>
                }
            }>
                {move || {
                    post_refs.get().map(|result| match result {
                        Ok(refs) if !refs.is_empty() => {
                            let total = refs.len();
                            let index = current.get().min(total - 1);
                            let post_url = refs[index].url.clone();

                            view! {
                                <div class="flex justify-end gap-2 pr-4 pb-2">
                                    <button
                                        class="px-3 py-1 text-sm rounded-md border border-teal-600 dark:border-seafoam-600 text-gray-700 dark:text-gray-200 disabled:opacity-50"
                                        prop:disabled={index == 0}
                                        on:click=move |_| set_current.update(|i| *i = i.saturating_sub(1))
                                    >
                                        "Newer"
                                    </button>
                                    <button
                                        class="px-3 py-1 text-sm rounded-md border border-teal-600 dark:border-seafoam-600 text-gray-700 dark:text-gray-200 disabled:opacity-50"
                                        prop:disabled={index + 1 >= total}
                                        on:click=move |_| set_current.update(|i| *i = (*i + 1).min(total - 1))
                                    >
                                        "Older"
                                    </button>
                                </div>
                                <PostView
                                    post_url
                                    current_post=Some(index + 1)
                                    total_posts=Some(total)
                                />
                            }
                                .into_any()
                        }
                        Ok(_) => {
                            view! {
                                <div class="text-center text-gray-500 dark:text-gray-400">
                                    "No posts found"
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! {
                                <div class="text-center text-red-600 dark:text-red-400">
                                    "Failed to load post list"
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
