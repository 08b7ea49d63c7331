//! Rate limit, markdown rendering and other service-level endpoints.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::encode_segment;
use crate::client::GithubClient;
use crate::error::{GithubError, Result};
use crate::models::{GitignoreTemplate, RateLimitStatus};

impl GithubClient {
    /// Current rate limit, or `None` if the server sent nothing usable.
    pub async fn get_rate_limit(&self) -> Result<Option<RateLimitStatus>> {
        self.get("rate_limit").await?.decode()
    }

    /// Render markdown to HTML.
    pub async fn parse_readme(&self, markdown: &str) -> Result<String> {
        let payload = self.post("markdown", &json!({ "text": markdown })).await?;

        if payload.is_empty() {
            return Ok(String::new());
        }
        payload
            .into_text()
            .ok_or_else(|| GithubError::UnexpectedPayload {
                path: "markdown".to_string(),
                expected: "HTML text",
            })
    }

    /// Names of the available `.gitignore` templates.
    pub async fn get_gitignore_templates(&self) -> Result<Vec<String>> {
        let path = "gitignore/templates";
        self.get(path).await?.decode_list(path)
    }

    pub async fn get_gitignore_template(&self, name: &str) -> Result<Option<GitignoreTemplate>> {
        let path = format!("gitignore/templates/{}", encode_segment(name, "template")?);
        self.get(&path).await?.decode()
    }

    /// Service metadata (IP ranges, SSH key fingerprints, ...).
    pub async fn get_meta(&self) -> Result<Option<Value>> {
        self.fetch_optional("meta").await
    }

    /// Emoji names mapped to image URLs.
    pub async fn get_emojis(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.get("emojis").await?.decode()?.unwrap_or_default())
    }
}
