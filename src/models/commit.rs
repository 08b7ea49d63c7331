//! Commit model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::repo_path;
use crate::client::GithubClient;
use crate::error::Result;
use crate::models::repository::{RepoHandle, RepoRef};
use crate::traits::List;

/// A commit listed for a repository.
///
/// Besides the SHA and the nested git metadata, a commit remembers the
/// owner and name of the repository it was listed from, so it can be used to
/// address follow-up requests without the repository at hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,

    /// Git-level metadata (message, author, committer, tree).
    pub commit: CommitDetail,

    /// Owner of the repository this commit was listed from.
    pub repo_owner: String,

    /// Name of the repository this commit was listed from.
    pub repo_name: String,
}

/// Nested git metadata of a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<GitSignature>,
    #[serde(default)]
    pub committer: Option<GitSignature>,
    #[serde(default)]
    pub tree: Option<TreeRef>,
    #[serde(default)]
    pub comment_count: u32,
}

/// Name, e-mail and date of a commit author or committer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeRef {
    pub sha: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A commit as the list endpoint returns it.
#[derive(Debug, Deserialize)]
struct CommitListItem {
    sha: String,
    #[serde(default)]
    commit: CommitDetail,
}

impl Commit {
    /// Build a commit from its SHA and metadata, capturing the repository's
    /// owner and name by value.
    pub fn new(sha: &str, commit: CommitDetail, repo: &impl RepoHandle) -> Self {
        Self {
            sha: sha.to_string(),
            commit,
            repo_owner: repo.owner_login().to_string(),
            repo_name: repo.repo_name().to_string(),
        }
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }

    /// SHA shortened to seven characters.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }

    /// The repository this commit was listed from.
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(&self.repo_owner, &self.repo_name)
    }
}

impl RepoHandle for Commit {
    fn owner_login(&self) -> &str {
        &self.repo_owner
    }

    fn repo_name(&self) -> &str {
        &self.repo_name
    }
}

#[async_trait]
impl List for Commit {
    type Scope = RepoRef;

    #[tracing::instrument(skip(client))]
    async fn list(client: &GithubClient, repo: &RepoRef) -> Result<Vec<Self>> {
        let path = repo_path(repo, "commits")?;
        let items: Vec<CommitListItem> = client.get(&path).await?.decode_list(&path)?;

        Ok(items
            .into_iter()
            .map(|item| Commit::new(&item.sha, item.commit, repo))
            .collect())
    }
}
