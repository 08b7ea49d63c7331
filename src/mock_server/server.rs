//! Mock GitHub API server.
//!
//! Provides an axum-based HTTP server that simulates the GitHub REST API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;

/// A mock GitHub API server for testing.
///
/// The server runs in the background and can be used to test the GitHub
/// client against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_scenario()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Pass it to `GithubClient::set_url` (or `ClientConfig::base_url`).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router with all routes.
    pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // User routes
            .route("/user", get(handlers::get_authenticated_user))
            .route("/users/:login", get(handlers::get_user))
            // Repository routes
            .route(
                "/user/repos",
                get(handlers::list_own_repos).post(handlers::create_repo),
            )
            .route("/repos/:owner/:repo", get(handlers::get_repo))
            .route("/repos/:owner/:repo/commits", get(handlers::list_commits))
            .route("/repos/:owner/:repo/languages", get(handlers::list_languages))
            .route(
                "/repos/:owner/:repo/contributors",
                get(handlers::list_contributors),
            )
            .route(
                "/repos/:owner/:repo/stats/code_frequency",
                get(handlers::code_frequency),
            )
            .route("/repos/:owner/:repo/readme", get(handlers::get_readme))
            // Misc routes
            .route("/rate_limit", get(handlers::get_rate_limit))
            .route("/markdown", post(handlers::render_markdown))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
