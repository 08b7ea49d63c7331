//! Decoded response bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GithubError, Result};

/// What a successful request produced.
///
/// The dispatcher picks the variant from the status code and the declared
/// content type; callers turn it into typed data with the helpers below.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/json` body.
    Json(Value),
    /// `text/html` body, returned verbatim.
    Text(String),
    /// 201 Created or 204 No Content.
    Acknowledged,
    /// Success with a body of any other content type (or none at all).
    Empty,
}

impl Payload {
    /// The JSON value, if this payload carried one.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The raw text, if this payload carried one.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for a 201/204 acknowledgement.
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }

    /// Returns true if there is no body to look at.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Acknowledged | Self::Empty)
    }

    /// Deserialize a JSON body into `T`; `None` when there is no JSON body.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>> {
        match self {
            Self::Json(Value::Null) => Ok(None),
            Self::Json(value) => Ok(Some(serde_json::from_value(value)?)),
            _ => Ok(None),
        }
    }

    /// Deserialize a JSON array into a `Vec<T>`; empty when there is no JSON
    /// body.
    pub fn decode_list<T: DeserializeOwned>(self, path: &str) -> Result<Vec<T>> {
        match self {
            Self::Json(Value::Array(items)) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(GithubError::from))
                .collect(),
            Self::Json(Value::Null) | Self::Acknowledged | Self::Empty => Ok(Vec::new()),
            _ => Err(GithubError::UnexpectedPayload {
                path: path.to_string(),
                expected: "JSON array",
            }),
        }
    }
}
