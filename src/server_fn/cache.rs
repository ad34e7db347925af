use crate::models::Post;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

pub static POST_CACHE: Lazy<DashMap<String, (Post, Instant)>> = Lazy::new(DashMap::new);
pub const CACHE_DURATION: Duration = Duration::from_secs(300);
