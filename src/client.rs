//! GitHub API client.
//!
//! Owns the credential and endpoint configuration and implements the request
//! dispatcher every operation goes through. The operations themselves live in
//! [`crate::api`], grouped by capability.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::{GithubError, Result, TOKEN_HINT};
use crate::payload::Payload;

/// Default GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// Below this many remaining calls, [`GithubClient::connect`] logs a warning.
pub const RATE_LIMIT_LOW_WATER: u64 = 50;

const USER_AGENT: &str = concat!("ghapi/", env!("CARGO_PKG_VERSION"));

/// Transport settings for a [`GithubClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value. GitHub rejects requests without one.
    pub user_agent: String,
    /// How many times a 202 Accepted response is re-issued before giving up.
    pub accepted_retries: u32,
    /// Pause between re-issues of a 202 Accepted request.
    pub accepted_retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
            accepted_retries: 3,
            accepted_retry_delay: Duration::from_secs(1),
        }
    }
}

/// GitHub API client.
///
/// Handles authentication and dispatch. Each API operation is a method on
/// this type; entity fetches are also reachable through the `Get` and `List`
/// traits on the model types.
///
/// Clones share the underlying connection pool. The setters take `&mut self`,
/// so a client shared between tasks has to be wrapped (for example in a
/// `RwLock`) before its token or endpoint can be changed.
///
/// # Example
///
/// ```no_run
/// use ghapi::GithubClient;
///
/// # async fn example() -> ghapi::Result<()> {
/// // Create from environment variables
/// let client = GithubClient::from_env()?;
///
/// // Or configure manually
/// let mut client = GithubClient::new("ghp_your_token")?;
/// client.set_url("https://github.example.com/api/v3")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    accepted_retries: u32,
    accepted_retry_delay: Duration,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.base_url.as_str())
            .field("accepted_retries", &self.accepted_retries)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GITHUB_TOKEN` for authentication and optionally `GITHUB_API_URL`
    /// for the base URL (defaults to `https://api.github.com/`).
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_TOKEN").map_err(|_| {
            GithubError::ConfigMissing("GITHUB_TOKEN environment variable not set".to_string())
        })?;

        let mut config = ClientConfig::default();
        if let Ok(base_url) = env::var("GITHUB_API_URL") {
            config.base_url = base_url;
        }

        Self::with_config(&token, config)
    }

    /// Create a client for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::MissingCredential`] if the token is empty.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with explicit transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the base URL is invalid.
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        if token.is_empty() {
            return Err(GithubError::MissingCredential);
        }

        let base_url = normalize_base_url(&config.base_url)?;

        let http = Client::builder()
            .user_agent(config.user_agent)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(GithubError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
            accepted_retries: config.accepted_retries,
            accepted_retry_delay: config.accepted_retry_delay,
        })
    }

    /// Create a client and check the remaining rate limit.
    ///
    /// Logs a warning when fewer than [`RATE_LIMIT_LOW_WATER`] calls remain.
    /// The probe never fails construction.
    pub async fn connect(token: &str) -> Result<Self> {
        Self::connect_with_config(token, ClientConfig::default()).await
    }

    /// [`GithubClient::connect`] with explicit transport settings.
    pub async fn connect_with_config(token: &str, config: ClientConfig) -> Result<Self> {
        let client = Self::with_config(token, config)?;
        client.warn_on_low_rate_limit().await;
        Ok(client)
    }

    async fn warn_on_low_rate_limit(&self) {
        match self.get_rate_limit().await {
            Ok(Some(status)) if status.rate.remaining < RATE_LIMIT_LOW_WATER => {
                tracing::warn!(
                    remaining = status.rate.remaining,
                    reset = %status.rate.reset,
                    "GitHub rate limit is running low"
                );
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "rate limit probe failed"),
        }
    }

    /// Replace the auth token used by subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::MissingCredential`] if the token is empty.
    pub fn set_auth(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(GithubError::MissingCredential);
        }
        self.token = token.to_string();
        Ok(())
    }

    /// Point every subsequent request at a different base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn set_url(&mut self, url: &str) -> Result<()> {
        self.base_url = Arc::new(normalize_base_url(url)?);
        Ok(())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> Result<Payload> {
        self.request(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Payload> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Make a PATCH request with a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Payload> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Make a bodyless PUT request.
    pub async fn put(&self, path: &str) -> Result<Payload> {
        self.request(Method::PUT, path, None).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send one request and classify the response.
    ///
    /// A 202 Accepted is re-issued with identical arguments up to the
    /// configured number of times before failing with
    /// [`GithubError::Pending`].
    #[tracing::instrument(skip(self, body))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Payload> {
        let url = self.base_url.join(path)?;
        let mut attempts = 0;

        loop {
            attempts += 1;

            let response = match self.send(&method, url.clone(), body).await {
                Ok(response) => response,
                Err(e) => return Err(classify_transport_error(e, path)),
            };

            if response.status() != StatusCode::ACCEPTED {
                return Self::classify(response, path).await;
            }

            if attempts > self.accepted_retries {
                return Err(GithubError::Pending {
                    path: path.to_string(),
                    attempts,
                });
            }

            tracing::debug!(attempts, "202 Accepted, re-issuing request");
            if !self.accepted_retry_delay.is_zero() {
                tokio::time::sleep(self.accepted_retry_delay).await;
            }
        }
    }

    async fn send(
        &self,
        method: &Method,
        url: Url,
        body: Option<&Value>,
    ) -> reqwest::Result<Response> {
        let request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("token {}", self.token));

        let request = match (method, body) {
            (&Method::POST, Some(body)) | (&Method::PATCH, Some(body)) => request.json(body),
            // E-mail deletion is the one DELETE that carries a payload.
            (&Method::DELETE, Some(body)) => request.json(body),
            (&Method::PUT, _) => request.header(CONTENT_LENGTH, 0),
            _ => request,
        };

        request.send().await
    }

    /// Check response status and decode the body.
    async fn classify(response: Response, path: &str) -> Result<Payload> {
        let status = response.status();

        match status {
            StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(Payload::Acknowledged),
            s if s.is_success() => Self::decode_body(response).await,
            _ => {
                let message = extract_error_message(response, status).await;
                tracing::debug!(status = status.as_u16(), %message, "request failed");
                Err(status_error(status, path, message))
            }
        }
    }

    /// Branch on the declared content type.
    async fn decode_body(response: Response) -> Result<Payload> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(media_type)
            .unwrap_or_default();

        match content_type.as_str() {
            "application/json" => {
                let text = response.text().await?;
                if text.trim().is_empty() {
                    return Ok(Payload::Empty);
                }
                Ok(Payload::Json(serde_json::from_str(&text)?))
            }
            "text/html" => Ok(Payload::Text(response.text().await?)),
            _ => Ok(Payload::Empty),
        }
    }
}

/// Ensure the base URL ends with `/` so relative paths join beneath it.
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let base_url = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Ok(Url::parse(&base_url)?)
}

/// First `;`-delimited segment of a `Content-Type` value, lowercased.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Map a non-success status onto the error taxonomy.
fn status_error(status: StatusCode, path: &str, message: String) -> GithubError {
    match status {
        StatusCode::NOT_FOUND => GithubError::NotFound {
            path: path.to_string(),
        },
        StatusCode::UNAUTHORIZED => GithubError::Unauthorized {
            path: path.to_string(),
            hint: TOKEN_HINT,
        },
        StatusCode::UNPROCESSABLE_ENTITY => GithubError::UnprocessableEntity {
            path: path.to_string(),
            message,
        },
        _ => GithubError::Status {
            path: path.to_string(),
            status_code: status.as_u16(),
            message,
        },
    }
}

/// A transport error that still carries a status is classified like a
/// response; anything else is a plain transport failure.
fn classify_transport_error(error: reqwest::Error, path: &str) -> GithubError {
    match error.status() {
        Some(status) => status_error(status, path, error.to_string()),
        None => GithubError::HttpError(error),
    }
}

/// Extract error message from a failed response.
async fn extract_error_message(response: Response, status: StatusCode) -> String {
    let body = match response.text().await {
        Ok(b) => b,
        Err(_) => return format!("HTTP {status}"),
    };

    if let Ok(json) = serde_json::from_str::<Value>(&body) {
        if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body
    }
}
