//! Mock server state management.
//!
//! Provides the in-memory data store for the mock GitHub API server.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::{CodeFrequencyWeek, Contributor, RepoRef, Repository};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Login of the user the token belongs to.
    pub authenticated_user: String,

    /// Users indexed by login, as raw JSON.
    pub users: HashMap<String, Value>,

    /// Repositories indexed by owner/name.
    pub repos: HashMap<RepoRef, Repository>,

    /// Commit list items (raw JSON) per repository, newest first.
    pub commits: HashMap<RepoRef, Vec<Value>>,

    /// `{language: bytes}` objects per repository, in display order.
    pub languages: HashMap<RepoRef, Map<String, Value>>,

    /// Contributors per repository.
    pub contributors: HashMap<RepoRef, Vec<Contributor>>,

    /// Weekly code frequency series per repository.
    pub code_frequency: HashMap<RepoRef, Vec<CodeFrequencyWeek>>,

    /// How many more times the stats endpoints answer 202 before the data
    /// is "computed".
    pub pending_stats: HashMap<RepoRef, u32>,

    /// README text per repository (served base64-encoded).
    pub readmes: HashMap<RepoRef, String>,

    /// Remaining calls reported by `GET /rate_limit`.
    pub rate_remaining: u64,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            authenticated_user: "octocat".to_string(),
            users: HashMap::new(),
            repos: HashMap::new(),
            commits: HashMap::new(),
            languages: HashMap::new(),
            contributors: HashMap::new(),
            code_frequency: HashMap::new(),
            pending_stats: HashMap::new(),
            readmes: HashMap::new(),
            rate_remaining: 5000,
            required_token: None,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a user (raw JSON with at least a `login`).
    pub fn with_user(mut self, user: Value) -> Self {
        if let Some(login) = user.get("login").and_then(Value::as_str) {
            self.users.insert(login.to_string(), user);
        }
        self
    }

    /// Add a repository to the state.
    pub fn with_repo(mut self, repo: Repository) -> Self {
        self.repos.insert(repo.repo_ref(), repo);
        self
    }

    /// Set the commits of a repository.
    pub fn with_commits(mut self, repo: &RepoRef, commits: Vec<Value>) -> Self {
        self.commits.insert(repo.clone(), commits);
        self
    }

    /// Set the language breakdown of a repository.
    pub fn with_languages(mut self, repo: &RepoRef, languages: Map<String, Value>) -> Self {
        self.languages.insert(repo.clone(), languages);
        self
    }

    /// Set the contributors of a repository.
    pub fn with_contributors(mut self, repo: &RepoRef, contributors: Vec<Contributor>) -> Self {
        self.contributors.insert(repo.clone(), contributors);
        self
    }

    /// Set the code frequency series of a repository.
    pub fn with_code_frequency(mut self, repo: &RepoRef, weeks: Vec<CodeFrequencyWeek>) -> Self {
        self.code_frequency.insert(repo.clone(), weeks);
        self
    }

    /// Make the stats endpoints of a repository answer 202 `times` times.
    pub fn with_pending_stats(mut self, repo: &RepoRef, times: u32) -> Self {
        self.pending_stats.insert(repo.clone(), times);
        self
    }

    /// Set the README of a repository.
    pub fn with_readme(mut self, repo: &RepoRef, text: &str) -> Self {
        self.readmes.insert(repo.clone(), text.to_string());
        self
    }

    /// Set the remaining rate limit.
    pub fn with_rate_remaining(mut self, remaining: u64) -> Self {
        self.rate_remaining = remaining;
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Check an `Authorization` header value against the required token.
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        match &self.required_token {
            None => true,
            Some(token) => header == Some(format!("token {token}").as_str()),
        }
    }

    /// Get a repository by owner and name.
    pub fn get_repo(&self, repo: &RepoRef) -> Option<&Repository> {
        self.repos.get(repo)
    }

    /// Repositories owned by the authenticated user, sorted by name.
    pub fn list_own_repos(&self) -> Vec<&Repository> {
        let mut repos: Vec<&Repository> = self
            .repos
            .values()
            .filter(|r| r.owner_login() == self.authenticated_user)
            .collect();
        repos.sort_by(|a, b| a.name.cmp(&b.name));
        repos
    }

    /// Id for a newly created repository, above every id in use.
    pub fn next_repo_id(&self) -> u64 {
        self.repos.values().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Consume one pending 202 for a repository's stats.
    ///
    /// Returns true while the stats are still "being computed".
    pub fn take_pending(&mut self, repo: &RepoRef) -> bool {
        match self.pending_stats.get_mut(repo) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}
