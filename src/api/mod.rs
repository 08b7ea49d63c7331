//! API operations, one method per endpoint on [`GithubClient`].
//!
//! Every operation validates its inputs, builds the request path from
//! percent-encoded segments, dispatches through [`GithubClient::request`]
//! and maps the payload onto the return type. Expected absence is reported
//! as `None` or an empty list; protocol faults are errors.

mod misc;
mod orgs;
mod repos;
mod teams;
mod users;

use serde_json::{Map, Value};

use crate::client::GithubClient;
use crate::error::{GithubError, Result};
use crate::models::RepoHandle;

/// Free-form JSON object used as a write payload.
pub type Fields = Map<String, Value>;

/// Percent-encode one path segment.
///
/// Empty input and the dot segments `.` and `..` are rejected; URL joining
/// would otherwise drop or climb out of the segment.
pub(crate) fn encode_segment(value: &str, field: &str) -> Result<String> {
    if value.is_empty() {
        return Err(GithubError::missing(field, "must not be empty"));
    }
    if is_dot_segment(value) {
        return Err(GithubError::missing(field, "must not be '.' or '..'"));
    }
    Ok(urlencoding::encode(value).into_owned())
}

pub(crate) fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

/// `repos/{owner}/{name}` followed by an optional suffix.
pub(crate) fn repo_path(repo: &impl RepoHandle, suffix: &str) -> Result<String> {
    let owner = encode_segment(repo.owner_login(), "owner")?;
    let name = encode_segment(repo.repo_name(), "repo")?;

    if suffix.is_empty() {
        Ok(format!("repos/{owner}/{name}"))
    } else {
        Ok(format!("repos/{owner}/{name}/{suffix}"))
    }
}

/// Fail unless `data[field]` is a non-blank string.
pub(crate) fn require_field(data: &Fields, field: &str, message: &str) -> Result<()> {
    match data.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(()),
        _ => Err(GithubError::missing(field, message)),
    }
}

impl GithubClient {
    /// GET a JSON array; empty when there is no body.
    pub(crate) async fn fetch_list(&self, path: &str) -> Result<Vec<Value>> {
        self.get(path).await?.decode_list(path)
    }

    /// GET a JSON value; `None` when there is no JSON body.
    pub(crate) async fn fetch_optional(&self, path: &str) -> Result<Option<Value>> {
        Ok(self.get(path).await?.into_json())
    }

    /// GET a JSON value that must be present.
    pub(crate) async fn fetch_required(&self, path: &str, expected: &'static str) -> Result<Value> {
        self.fetch_optional(path)
            .await?
            .ok_or_else(|| GithubError::UnexpectedPayload {
                path: path.to_string(),
                expected,
            })
    }
}
