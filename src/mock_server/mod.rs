//! Mock GitHub API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the GitHub
//! REST API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests (created repositories persist, stats endpoints answer 202 a
//! configurable number of times), enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use ghapi::mock_server::MockServer;
//! use ghapi::GithubClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let mut client = GithubClient::new("test-token").unwrap();
//!     client.set_url(server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let repo = client.get_repo("octocat", "Hello-World").await.unwrap();
//!     assert_eq!(repo.stargazers_count, 80);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
