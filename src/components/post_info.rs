use leptos::prelude::*;

use crate::content::date::format_published_date;
use crate::content::links::github_repo_name;

use super::post_avatar::PostAvatar;
use super::share_button::ShareButton;

#[component]
pub fn PostInfo(
    post_url: String,
    author: String,
    blog_url: String,
    updated: String,
) -> impl IntoView {
    let published = format_published_date(&updated);

    view! {
        <div class="flex flex-col items-start gap-2 p-2">
            <PostAvatar name=author.clone() url=blog_url.clone()/>
            <h2 class="text-lg font-semibold">
                <a
                    href=blog_url
                    class="text-gray-800 dark:text-gray-200 hover:underline"
                >
                    {author}
                </a>
            </h2>
            <a
                href=post_url.clone()
                rel="bookmark"
                class="text-sm text-gray-500 dark:text-gray-400 hover:underline"
            >
                <time datetime=updated>{published}</time>
            </a>
            <ShareButton url=post_url/>
        </div>
    }
}

#[component]
pub fn GitHubInfo(urls: Vec<String>) -> impl IntoView {
    view! {
        <div class="p-2 mt-2 border-t border-gray-300 dark:border-teal-700">
            <h3 class="text-sm font-semibold text-gray-500 dark:text-gray-400 uppercase">
                "GitHub Repos"
            </h3>
            <ul class="mt-1 space-y-1">
                {urls
                    .into_iter()
                    .map(|url| {
                        let label = github_repo_name(&url).unwrap_or_else(|| url.clone());
                        view! {
                            <li>
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm text-seafoam-600 dark:text-aqua-400 hover:underline break-all"
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
