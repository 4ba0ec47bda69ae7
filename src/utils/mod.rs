//! Utility functions and helpers.

pub mod http;
pub mod log;
pub mod url;

use ::url::Url;

/// Resolve a potentially relative URL against a base URL.
///
/// The fragment is dropped so that `#apply` anchors do not create distinct
/// job URLs.
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let mut resolved = base.join(href.trim()).ok()?;
    resolved.set_fragment(None);
    Some(resolved.to_string())
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
