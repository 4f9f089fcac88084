//! Artifact identity resolution
//!
//! Maps an artifact URL to the short identifier used as the record `name`.

/// Resolves a human-readable identifier for an artifact URL
pub trait IdentityResolver {
    /// `None` when the URL yields no identifier
    fn resolve(&self, url: &str) -> Option<String>;
}

/// Resolves Hugging Face model URLs to `owner/name` ids
#[derive(Debug, Clone, Copy, Default)]
pub struct HubIdResolver;

impl IdentityResolver for HubIdResolver {
    fn resolve(&self, url: &str) -> Option<String> {
        hub_model_id(url)
    }
}

/// Extract a Hub model id from a URL.
///
/// Bare ids (no scheme) are returned unchanged. Query strings, fragments
/// and trailing slashes are dropped.
pub fn hub_model_id(url: &str) -> Option<String> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return non_empty(url);
    }

    let (_, rest) = url.split_once("huggingface.co/")?;
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    non_empty(rest.trim_end_matches('/'))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
