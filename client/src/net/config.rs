//! API endpoint configuration injected into the client at startup.
//!
//! The host renders the base URL into the SSR shell; the hydrated client reads
//! it back with [`ApiConfig::from_document`]. Components get it from context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// `name` of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "forum-api-base-url";

/// Base URL of the forum REST API, stored without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint for topics. Keeps the trailing slash the API
    /// routes are registered with.
    pub fn topics_url(&self) -> String {
        format!("{}/topics/", self.base_url)
    }

    /// Read the base URL from the shell's `<meta>` tag, falling back to the
    /// default when absent or outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(base) = content.filter(|s| !s.trim().is_empty()) {
                return Self::new(&base);
            }
        }
        Self::default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
