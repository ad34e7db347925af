use serde::{Deserialize, Serialize};

/// A single aggregated blog entry, as delivered by the posts API.
/// Immutable once fetched; `html` is the untrusted rendered body and is
/// passed through to the view verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub url: String,
    pub html: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub feed: Feed,
}

/// Attribution metadata for the blog a post came from.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Feed {
    pub author: String,
    pub link: String,
}

/// List entry used to page through posts; the full record is fetched
/// separately per URL.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostRef {
    pub id: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_record() {
        let json = r#"{
            "id": "abc123",
            "title": "Shipping a Thing",
            "url": "https://someone.dev.to/shipping-a-thing",
            "html": "<p>hello</p>",
            "updated": "2024-01-05T00:00:00Z",
            "feed": { "author": "Someone", "link": "https://someone.dev.to" }
        }"#;

        let post: Post = serde_json::from_str(json).expect("full record should parse");
        assert_eq!(post.id, "abc123");
        assert_eq!(post.feed.author, "Someone");
        assert_eq!(post.updated, "2024-01-05T00:00:00Z");
    }

    #[test]
    fn test_missing_updated_and_feed_default() {
        let json = r#"{
            "id": "abc123",
            "title": "Untitled",
            "url": "https://example.org/p",
            "html": ""
        }"#;

        let post: Post = serde_json::from_str(json).expect("sparse record should parse");
        assert!(post.updated.is_empty());
        assert!(post.feed.author.is_empty());
        assert!(post.feed.link.is_empty());
    }

    #[test]
    fn test_post_ref_list() {
        let json = r#"[{"id": "1", "url": "https://a.example/1"},
                       {"id": "2", "url": "https://a.example/2"}]"#;

        let refs: Vec<PostRef> = serde_json::from_str(json).expect("list should parse");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].url, "https://a.example/2");
    }
}
