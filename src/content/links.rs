use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Prefix matched against anchor hrefs when pulling repository links out
/// of a post body.
pub const GITHUB_URL_PREFIX: &str = "https://github.com";

/// Collects the distinct anchor hrefs in `html` that start with
/// `target_prefix`, in document order.
///
/// The body is untrusted feed content, so it goes through a structural
/// fragment parse only: no scripts run and nothing is fetched. Malformed
/// markup degrades to whatever anchors the parser can still recover, and
/// a repeated link keeps its first position.
pub fn extract_links(html: &str, target_prefix: &str) -> Vec<String> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let fragment = Html::parse_fragment(html);
    let anchors = Selector::parse("a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in fragment.select(&anchors) {
        if let Some(href) = element.value().attr("href") {
            if href.starts_with(target_prefix) && seen.insert(href.to_string()) {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Derives the "owner/repo" label for a GitHub link, for display next to
/// the extracted URLs. Links without two path segments (the bare site,
/// profile pages) get `None`.
pub fn github_repo_name(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let mut segments = parsed.path_segments()?.filter(|segment| !segment.is_empty());

    let owner = segments.next()?;
    let repo = segments.next()?;

    Some(format!("{}/{}", owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod extraction {
        use super::*;

        #[test]
        fn test_dedups_preserving_first_seen_order() {
            let html = concat!(
                r#"<a href="https://github.com/a">x</a>"#,
                r#"<a href="https://github.com/a">y</a>"#,
                r#"<a href="https://x.com">z</a>"#,
            );

            assert_eq!(
                extract_links(html, GITHUB_URL_PREFIX),
                vec!["https://github.com/a".to_string()]
            );
        }

        #[test]
        fn test_keeps_document_order() {
            let html = concat!(
                r#"<p>intro <a href="https://github.com/b/two">two</a></p>"#,
                r#"<ul><li><a href="https://github.com/a/one">one</a></li></ul>"#,
                r#"<a href="https://github.com/b/two">again</a>"#,
            );

            assert_eq!(
                extract_links(html, GITHUB_URL_PREFIX),
                vec![
                    "https://github.com/b/two".to_string(),
                    "https://github.com/a/one".to_string(),
                ]
            );
        }

        #[test]
        fn test_excludes_non_matching_hosts() {
            let html = concat!(
                r#"<a href="https://gitlab.com/a/b">a</a>"#,
                r#"<a href="http://github.com/a/b">insecure</a>"#,
                r#"<a href="/relative">rel</a>"#,
            );

            assert!(extract_links(html, GITHUB_URL_PREFIX).is_empty());
        }

        #[test]
        fn test_empty_input() {
            assert!(extract_links("", GITHUB_URL_PREFIX).is_empty());
            assert!(extract_links("   \n", GITHUB_URL_PREFIX).is_empty());
        }

        #[test]
        fn test_anchor_free_input() {
            assert!(extract_links("<p>no links here</p>", GITHUB_URL_PREFIX).is_empty());
        }

        #[test]
        fn test_malformed_markup_does_not_panic() {
            assert!(extract_links("<not-valid-html", GITHUB_URL_PREFIX).is_empty());

            // recoverable anchors before the breakage still come through
            let partial = r#"<a href="https://github.com/a/b">ok</a><div <<"#;
            assert_eq!(
                extract_links(partial, GITHUB_URL_PREFIX),
                vec!["https://github.com/a/b".to_string()]
            );
        }

        #[test]
        fn test_rerun_is_idempotent() {
            let html = r#"<a href="https://github.com/a/b">x</a>"#;
            assert_eq!(
                extract_links(html, GITHUB_URL_PREFIX),
                extract_links(html, GITHUB_URL_PREFIX)
            );
        }
    }

    mod repo_names {
        use super::*;

        #[test]
        fn test_owner_and_repo() {
            assert_eq!(
                github_repo_name("https://github.com/rust-lang/rust"),
                Some("rust-lang/rust".to_string())
            );
        }

        #[test]
        fn test_deep_paths_truncate_to_repo() {
            assert_eq!(
                github_repo_name("https://github.com/a/b/issues/1"),
                Some("a/b".to_string())
            );
        }

        #[test]
        fn test_bare_site_and_profiles() {
            assert_eq!(github_repo_name("https://github.com"), None);
            assert_eq!(github_repo_name("https://github.com/just-a-user"), None);
        }

        #[test]
        fn test_not_a_url() {
            assert_eq!(github_repo_name("nope"), None);
        }
    }
}
