use url::Url;

/// Coarse label for the platform a post was published on, used as a CSS
/// hook on the rendered post body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostTag {
    Medium,
    DevTo,
    Blogspot,
    Generic,
}

impl HostTag {
    pub fn as_class(&self) -> &'static str {
        match self {
            HostTag::Medium => "is-medium",
            HostTag::DevTo => "is-devto",
            HostTag::Blogspot => "is-blogspot",
            HostTag::Generic => "is-generic",
        }
    }
}

/// Classifies a post's canonical URL by hostname suffix. First matching
/// suffix wins; anything unparseable or unrecognized is `Generic` so a
/// bad URL never blocks a render.
pub fn classify_host(url: &str) -> HostTag {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return HostTag::Generic,
    };

    let host = match parsed.host_str() {
        Some(host) => host,
        None => return HostTag::Generic,
    };

    if host.ends_with("medium.com") {
        HostTag::Medium
    } else if host.ends_with("dev.to") {
        HostTag::DevTo
    } else if host.ends_with("blogspot.com") {
        HostTag::Blogspot
    } else {
        HostTag::Generic
    }
}
