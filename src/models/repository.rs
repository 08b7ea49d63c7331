//! Repository model and trait implementations.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{is_dot_segment, repo_path};
use crate::client::GithubClient;
use crate::error::{GithubError, Result};
use crate::traits::{Get, List};

/// A GitHub repository.
///
/// Read-only snapshot of a repository as returned by the API. It holds no
/// reference to the client that fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository ID.
    pub id: u64,

    /// The account owning the repository.
    pub owner: RepoOwner,

    /// Repository name (without the owner).
    pub name: String,

    /// `owner/name`.
    pub full_name: String,

    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Browser URL.
    #[serde(default)]
    pub html_url: Option<String>,

    /// API URL.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(alias = "watchers", default)]
    pub watchers_count: u64,

    #[serde(alias = "forks", default)]
    pub forks_count: u64,

    #[serde(alias = "open_issues", default)]
    pub open_issues_count: u64,

    /// Primary language, as detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,
}

/// Owner of a repository (user or organization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Anything that names a repository by owner and name.
///
/// Repository-scoped operations accept any implementor, so a fetched
/// [`Repository`], a bare [`RepoRef`] or a [`crate::Commit`] (which
/// remembers its repository) can all be passed.
pub trait RepoHandle {
    /// Login of the owning account.
    fn owner_login(&self) -> &str;
    /// Repository name.
    fn repo_name(&self) -> &str;
}

impl Repository {
    /// Check if the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Login of the owning account.
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }

    /// Owner/name pair for this repository.
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(&self.owner.login, &self.name)
    }
}

impl RepoHandle for Repository {
    fn owner_login(&self) -> &str {
        &self.owner.login
    }

    fn repo_name(&self) -> &str {
        &self.name
    }
}

/// Owner/name pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Parse `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the input has exactly two non-empty
    /// parts.
    pub fn parse(full_name: &str) -> Result<Self> {
        match full_name.split_once('/') {
            Some((owner, name))
                if !owner.is_empty()
                    && !name.is_empty()
                    && !name.contains('/')
                    && !is_dot_segment(owner)
                    && !is_dot_segment(name) =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(GithubError::missing(
                "repository",
                "expected the form 'owner/name'",
            )),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl RepoHandle for RepoRef {
    fn owner_login(&self) -> &str {
        &self.owner
    }

    fn repo_name(&self) -> &str {
        &self.name
    }
}

/// Repositories keyed by owner and name.
pub type RepoIndex = BTreeMap<RepoRef, Repository>;

/// Index a list of repositories by owner and name.
pub fn index_repos(repos: Vec<Repository>) -> RepoIndex {
    repos.into_iter().map(|r| (r.repo_ref(), r)).collect()
}

/// Which repository listing to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RepoScope {
    /// Repositories of the authenticated user.
    #[default]
    Mine,
    /// Repositories a team has access to.
    Team(u64),
}

#[async_trait]
impl Get for Repository {
    type Id = RepoRef;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GithubClient, id: RepoRef) -> Result<Self> {
        let path = repo_path(&id, "")?;
        client
            .get(&path)
            .await?
            .decode()?
            .ok_or(GithubError::UnexpectedPayload {
                path,
                expected: "repository object",
            })
    }
}

#[async_trait]
impl List for Repository {
    type Scope = RepoScope;

    #[tracing::instrument(skip(client))]
    async fn list(client: &GithubClient, scope: &RepoScope) -> Result<Vec<Self>> {
        let path = match scope {
            RepoScope::Mine => "user/repos".to_string(),
            RepoScope::Team(team) => format!("teams/{team}/repos"),
        };
        client.get(&path).await?.decode_list(&path)
    }
}
