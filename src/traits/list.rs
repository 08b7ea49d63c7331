//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::GithubClient;
use crate::error::Result;

/// List the entities within a scope.
///
/// The API's first page is returned as is; following `Link` headers is left
/// to the caller.
///
/// # Example
///
/// ```ignore
/// use ghapi::{GithubClient, Commit, RepoRef, List};
///
/// let client = GithubClient::from_env()?;
/// let commits = Commit::list(&client, &RepoRef::new("rust-lang", "rust")).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// What the listing is scoped to (a repository, a team, ...).
    type Scope: Send + Sync;

    /// List entities in the scope.
    ///
    /// An empty response (204, or no JSON body) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &GithubClient, scope: &Self::Scope) -> Result<Vec<Self>>;
}
