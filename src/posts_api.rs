use once_cell::sync::Lazy;
use std::env;

static BASE_URL: Lazy<String> = Lazy::new(|| {
    let url = env::var("POSTS_API_URL").expect("POSTS_API_URL must be set");
    url.trim_end_matches('/').to_string()
});

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub fn base_url() -> &'static str {
    &BASE_URL
}

pub fn client() -> &'static reqwest::Client {
    &CLIENT
}
