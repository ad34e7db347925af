pub mod posts;

pub use posts::{Feed, Post, PostRef};
