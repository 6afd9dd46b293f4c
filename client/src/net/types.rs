//! Wire types for the forum REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Reasons a topics fetch can fail. None of these reach the rendered page;
/// they end in a diagnostic log entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopicFetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body was not a JSON array.
    #[error("malformed topics body: {0}")]
    Malformed(String),

    /// HTTP is only wired up in the browser build.
    #[error("topics fetch unavailable outside the browser")]
    Unavailable,
}

// =============================================================================
// TOPIC
// =============================================================================

/// A topic as returned by `GET /topics/`. Fields beyond `id` and `title`
/// are ignored.
///
/// Neither field is validated: strings and numbers are kept as text,
/// anything else (null, bool, array, object) renders blank. The forum API
/// issues UUID string ids; integer ids are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, deserialize_with = "scalar_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
}

impl Topic {
    /// Lenient conversion of one element of the topics array. A non-object
    /// element becomes a blank topic so it still occupies a row.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Id as text; empty when the API omitted it or sent a non-scalar.
    pub fn id_text(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
