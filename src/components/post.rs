use leptos::prelude::*;

use crate::content::host::classify_host;
use crate::content::links::{extract_links, GITHUB_URL_PREFIX};
use crate::models::Post;
use crate::server_fn::posts::get_post;

use super::post_info::{GitHubInfo, PostInfo};

/// Where a post fetch currently stands. `Errored` and `Loaded` are
/// terminal for a given URL; mounting the view with a new URL re-keys
/// the resource and starts over at `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Errored,
    Loaded,
}

pub fn fetch_state<T, E>(slot: Option<&Result<T, E>>) -> FetchState {
    match slot {
        None => FetchState::Loading,
        Some(Err(_)) => FetchState::Errored,
        Some(Ok(_)) => FetchState::Loaded,
    }
}

#[component]
pub fn PostView(
    post_url: String,
    #[prop(optional_no_strip)] current_post: Option<usize>,
    #[prop(optional_no_strip)] total_posts: Option<usize>,
) -> impl IntoView {
    let fetch_url = post_url.clone();
    let post_resource = Resource::new(move || fetch_url.clone(), get_post);

    view! {
        <div class="flow-root w-full pb-8 mb-12 border-b border-gray-300 dark:border-teal-700">
            <Suspense fallback=|| view! { <LoadingPost/> }>
                {move || {
                    let slot = post_resource.get();
                    match (fetch_state(slot.as_ref()), slot) {
                        (FetchState::Errored, Some(Err(e))) => {
                            log::error!("error loading post at {}: {}", post_url, e);
                            view! { <PostError/> }.into_any()
                        }
                        (FetchState::Loaded, Some(Ok(post))) => {
                            view! {
                                <LoadedPost post current_post total_posts/>
                            }
                                .into_any()
                        }
                        _ => view! { <LoadingPost/> }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn LoadedPost(
    post: Post,
    #[prop(optional_no_strip)] current_post: Option<usize>,
    #[prop(optional_no_strip)] total_posts: Option<usize>,
) -> impl IntoView {
    let (expand_title, set_expand_title) = signal(false);

    // the body never changes for a mounted post, so re-renders reuse the
    // extraction instead of reparsing the fragment
    let html = post.html.clone();
    let github_urls = Memo::new(move |_| extract_links(&html, GITHUB_URL_PREFIX));

    let host_class = classify_host(&post.url).as_class();

    view! {
        {current_post.zip(total_posts).map(|(current, total)| view! {
            <div class="flex justify-end mr-4">
                <span class="px-2 py-0.5 text-xs rounded-full border border-teal-500 dark:border-seafoam-500 text-gray-800 dark:text-gray-200">
                    {format!("{} of {}", current, total)}
                </span>
            </div>
        })}

        <header class="w-full py-6">
            <h1
                title=post.title.clone()
                id=post.id.clone()
                class=move || {
                    if expand_title.get() {
                        "text-3xl md:text-4xl font-bold text-center cursor-pointer text-gray-800 dark:text-gray-200"
                    } else {
                        "text-3xl md:text-4xl font-bold text-center cursor-pointer text-gray-800 dark:text-gray-200 line-clamp-2"
                    }
                }
                on:click=move |_| set_expand_title.update(|v| *v = !*v)
            >
                {post.title.clone()}
            </h1>
        </header>

        <div class="flex flex-col md:flex-row gap-4">
            <aside class="md:w-52 shrink-0">
                <PostInfo
                    post_url=post.url.clone()
                    author=post.feed.author.clone()
                    blog_url=post.feed.link.clone()
                    updated=post.updated.clone()
                />
                {move || {
                    let urls = github_urls.get();
                    (!urls.is_empty()).then(|| view! { <GitHubInfo urls/> })
                }}
            </aside>

            <div class="overflow-auto p-4 grow text-gray-800 dark:text-gray-200">
                <section
                    class=format!("post-content {}", host_class)
                    inner_html=post.html.clone()
                ></section>
            </div>
        </div>
    }
}

#[component]
fn LoadingPost() -> impl IntoView {
    view! {
        <div class="w-full py-6">
            <h1 class="text-3xl font-bold text-center text-gray-800 dark:text-gray-200">
                "Loading Blog..."
            </h1>
            <div class="flex justify-center p-5">
                <div class="w-8 h-8 border-4 border-seafoam-500 border-t-transparent rounded-full animate-spin"></div>
            </div>
        </div>
    }
}

#[component]
fn PostError() -> impl IntoView {
    view! {
        <div class="w-full py-6">
            <h1 class="text-3xl font-bold text-center text-red-600 dark:text-red-400">
                "Post Failed to Load"
            </h1>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_no_error_is_loading() {
        let slot: Option<&Result<i32, String>> = None;
        assert_eq!(fetch_state(slot), FetchState::Loading);
    }

    #[test]
    fn test_error_is_errored() {
        let slot: Result<i32, String> = Err("boom".to_string());
        assert_eq!(fetch_state(Some(&slot)), FetchState::Errored);
    }

    #[test]
    fn test_data_is_loaded() {
        let slot: Result<i32, String> = Ok(7);
        assert_eq!(fetch_state(Some(&slot)), FetchState::Loaded);
    }
}
