//! REST API helpers for reading from the forum API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the topics request is
//! only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`TopicFetchError`]; callers decide whether to log
//! or surface it. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{Topic, TopicFetchError};

/// Map an HTTP status to success or a [`TopicFetchError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), TopicFetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TopicFetchError::Status { status })
    }
}

/// Parse a topics response body.
///
/// # Errors
///
/// Returns [`TopicFetchError::Malformed`] when the body is not a JSON array.
/// Individual elements are never rejected; see [`Topic::from_value`].
pub fn parse_topics(body: &str) -> Result<Vec<Topic>, TopicFetchError> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| TopicFetchError::Malformed(e.to_string()))?;
    Ok(elements.into_iter().map(Topic::from_value).collect())
}

/// Fetch the topic collection from `GET {base}/topics/`.
///
/// # Errors
///
/// Returns a [`TopicFetchError`] when the request fails, the status is not
/// 2xx, or the body does not parse. Outside the browser this is always
/// [`TopicFetchError::Unavailable`].
pub async fn fetch_topics(config: &ApiConfig) -> Result<Vec<Topic>, TopicFetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.topics_url())
            .send()
            .await
            .map_err(|e| TopicFetchError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp
            .text()
            .await
            .map_err(|e| TopicFetchError::Network(e.to_string()))?;
        parse_topics(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(TopicFetchError::Unavailable)
    }
}
