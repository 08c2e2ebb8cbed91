//! Runtime configuration published by the host page.
//!
//! The host renders `<meta name="portal-api-base" content="...">` into the
//! document head. The browser reads it once per call; without the tag the
//! default backend address is used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use records::endpoints::DEFAULT_API_BASE;

/// `name` attribute of the meta tag carrying the API base URL.
pub const API_BASE_META: &str = "portal-api-base";

/// Trim whitespace and trailing slashes; empty input means "use the default".
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Backend base URL for REST calls.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        normalize_base(content.as_deref().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_API_BASE.to_owned()
    }
}

/// API base URL provided as context by the SSR host so the shell can
/// publish it in the page head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(pub String);

/// Value for the meta tag: the provided base, else the default.
pub fn published_base(provided: Option<ApiBase>) -> String {
    provided.map_or_else(|| DEFAULT_API_BASE.to_owned(), |ApiBase(raw)| normalize_base(&raw))
}
