//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::GithubClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use ghapi::{GithubClient, Repository, RepoRef, Get};
///
/// let client = GithubClient::from_env()?;
/// let repo = Repository::get(&client, RepoRef::new("rust-lang", "rust")).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity (e.g. an owner/name pair).
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The GitHub API client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &GithubClient, id: Self::Id) -> Result<Self>;
}
