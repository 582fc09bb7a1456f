//! GraphQL request/response envelope.
//!
//! Responses are decoded in two steps: first the envelope (so `errors` are
//! surfaced even when `data` is partial), then `data` into the per-operation
//! struct. A missing or mistyped field is a [`GithubError::Parse`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GithubError;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GraphQlError {
    pub message: String,
    /// GitHub's error classification, e.g. `NOT_FOUND` or `FORBIDDEN`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

impl GraphQlError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.error_type.as_deref() == Some("NOT_FOUND")
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Decode a GraphQL response body into the operation's `data` type.
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, GithubError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| GithubError::Parse(format!("invalid GraphQL envelope: {e}")))?;

    if !envelope.errors.is_empty() {
        return Err(GithubError::GraphQl(envelope.errors));
    }

    let data = envelope
        .data
        .filter(|data| !data.is_null())
        .ok_or_else(|| GithubError::Parse("response carries neither data nor errors".into()))?;

    serde_json::from_value(data).map_err(|e| GithubError::Parse(e.to_string()))
}
