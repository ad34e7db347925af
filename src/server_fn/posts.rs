use crate::models::{Post, PostRef};
use leptos::prelude::*;

pub const POSTS_PER_PAGE: u32 = 30;

#[server(GetPost, "/api")]
pub async fn get_post(post_url: String) -> Result<Post, ServerFnError> {
    use crate::posts_api;
    use crate::server_fn::cache::{CACHE_DURATION, POST_CACHE};
    use log::{error, info};
    use std::time::Instant;
    use thiserror::Error;

    #[derive(Debug, Error)]
    enum PostFetchError {
        #[error("posts api request error: {0}")]
        Request(String),
        #[error("posts api returned {0} for {1}")]
        Status(u16, String),
        #[error("JSON parse error: {0}")]
        Parse(#[from] serde_json::Error),
    }

    fn to_server_error(e: PostFetchError) -> ServerFnError {
        ServerFnError::ServerError(e.to_string())
    }

    if let Some(entry) = POST_CACHE.get(&post_url) {
        let (post, fetched_at) = entry.value();
        if fetched_at.elapsed() < CACHE_DURATION {
            info!("returning cached post for {}", post_url);
            return Ok(post.clone());
        }
    }

    info!("fetching post {} from posts api...", post_url);

    let endpoint = format!(
        "{}/posts/{}",
        posts_api::base_url(),
        urlencoding::encode(&post_url)
    );

    let response = posts_api::client()
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| {
            error!("posts api request error: {}", e);
            PostFetchError::Request(e.to_string())
        })
        .map_err(to_server_error)?;

    let status = response.status();
    if !status.is_success() {
        error!("posts api returned {} for {}", status, post_url);
        return Err(to_server_error(PostFetchError::Status(
            status.as_u16(),
            post_url,
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| {
            error!("error reading posts api response body: {}", e);
            PostFetchError::Request(e.to_string())
        })
        .map_err(to_server_error)?;

    let post: Post = serde_json::from_str(&body)
        .map_err(|e| {
            error!("JSON parse error: {}. Body length: {}", e, body.len());
            PostFetchError::Parse(e)
        })
        .map_err(to_server_error)?;

    info!("successfully parsed post {}", post.id);

    POST_CACHE.insert(post_url, (post.clone(), Instant::now()));

    Ok(post)
}

#[server(GetPostList, "/api")]
pub async fn get_post_list() -> Result<Vec<PostRef>, ServerFnError> {
    use crate::posts_api;
    use log::{error, info};

    info!("fetching post list from posts api...");

    let endpoint = format!(
        "{}/posts?per_page={}",
        posts_api::base_url(),
        POSTS_PER_PAGE
    );

    let response = posts_api::client()
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| {
            error!("posts api request error: {}", e);
            ServerFnError::new(format!("posts api request error: {}", e))
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("posts api returned {} for post list", status);
        return Err(ServerFnError::new(format!(
            "posts api returned {} for post list",
            status
        )));
    }

    let refs: Vec<PostRef> = response.json().await.map_err(|e| {
        error!("error decoding post list: {}", e);
        ServerFnError::new(format!("error decoding post list: {}", e))
    })?;

    info!("received {} post refs", refs.len());

    Ok(refs)
}
