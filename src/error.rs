//! Error types for GitHub API operations.

use thiserror::Error;

/// Where a rejected token can be replaced.
pub const TOKEN_HINT: &str =
    "generate a new personal access token at https://github.com/settings/tokens";

/// Errors that can occur during GitHub API operations.
#[derive(Debug, Error)]
pub enum GithubError {
    /// No token was supplied, or it was empty.
    #[error("GitHub auth token required")]
    MissingCredential,

    /// Configuration is missing or incomplete.
    #[error("GitHub configuration required: {0}")]
    ConfigMissing(String),

    /// A required input was missing before any request was made.
    #[error("Invalid input '{field}': {message}")]
    Validation { field: String, message: String },

    /// The requested resource does not exist (404).
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// The token was rejected (401).
    #[error("Unauthorized request to {path}: {hint}")]
    Unauthorized { path: String, hint: &'static str },

    /// The payload failed server-side validation (422).
    #[error("Unprocessable entity at {path}: {message}")]
    UnprocessableEntity { path: String, message: String },

    /// Any other non-success status.
    #[error("GitHub API error at {path} (status {status_code}): {message}")]
    Status {
        path: String,
        status_code: u16,
        message: String,
    },

    /// The server kept answering 202 after every allowed re-issue.
    #[error("{path} still being computed after {attempts} attempts")]
    Pending { path: String, attempts: u32 },

    /// The response decoded, but not into the expected shape.
    #[error("Unexpected payload from {path}: expected {expected}")]
    UnexpectedPayload {
        path: String,
        expected: &'static str,
    },

    /// Content could not be decoded (base64 or UTF-8).
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl GithubError {
    /// Build a validation error for a missing or empty field.
    pub(crate) fn missing(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// The HTTP status behind this error, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Unauthorized { .. } => Some(401),
            Self::UnprocessableEntity { .. } => Some(422),
            Self::Status { status_code, .. } => Some(*status_code),
            Self::Pending { .. } => Some(202),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for GitHub operations.
pub type Result<T> = core::result::Result<T, GithubError>;
