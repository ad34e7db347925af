#[cfg(feature = "ssr")]
pub mod cache;
pub mod posts;
