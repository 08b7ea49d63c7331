//! GitHub REST API client library.
//!
//! A thin, typed binding over the GitHub REST API: authenticate, build the
//! request path, dispatch, classify the response, and map the JSON onto
//! value objects.
//!
//! # Quick Start
//!
//! ```no_run
//! use ghapi::GithubClient;
//!
//! #[tokio::main]
//! async fn main() -> ghapi::Result<()> {
//!     // Create client from environment variables
//!     let client = GithubClient::from_env()?;
//!
//!     // Get a repository by owner and name
//!     let repo = client.get_repo("rust-lang", "rust").await?;
//!     println!("{} ({} stars)", repo.full_name, repo.stargazers_count);
//!
//!     // Walk its latest commits
//!     for commit in client.get_commits(&repo).await? {
//!         println!("{} {}", commit.short_sha(), commit.summary());
//!     }
//!
//!     // Net lines added over the repository's history
//!     let delta = client.get_repo_code_count(&repo).await?;
//!     println!("Net line delta: {delta}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`GithubClient`] holds the token and endpoint and owns the dispatcher
//!   ([`GithubClient::request`]). Every API operation is a method on it,
//!   grouped by capability (repositories, users, organizations, teams,
//!   misc).
//! - [`Repository`] and [`Commit`] are read-only projections of a response.
//!   They implement the [`Get`] and [`List`] traits where their endpoints
//!   allow it.
//! - Expected absence (no README, no contributors, an empty listing) is
//!   returned as `None` or an empty `Vec`; protocol faults are
//!   [`GithubError`]s.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `GITHUB_TOKEN` (required) - A personal access token
//! - `GITHUB_API_URL` (optional) - Base URL (defaults to `https://api.github.com/`)

mod api;
pub mod cli;
mod client;
mod error;
mod models;
pub mod output;
mod payload;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use api::Fields;
pub use client::{ClientConfig, GithubClient, DEFAULT_API_URL, RATE_LIMIT_LOW_WATER};
pub use error::{GithubError, Result, TOKEN_HINT};
pub use output::PrettyPrint;
pub use payload::Payload;

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    // Repository types
    index_repos,
    RepoHandle,
    RepoIndex,
    RepoOwner,
    RepoRef,
    RepoScope,
    Repository,
    // Commit types
    Commit,
    CommitDetail,
    GitSignature,
    TreeRef,
    // Statistics
    language_shares,
    net_line_delta,
    CodeFrequencyWeek,
    Contributor,
    GitignoreTemplate,
    LanguageShare,
    // Rate limits
    RateLimit,
    RateLimitStatus,
};
