//! Repository operations.

use serde::Deserialize;
use serde_json::Value;
use serde_with::base64::Base64;
use serde_with::DeserializeAs;

use super::{encode_segment, repo_path, require_field, Fields};
use crate::client::GithubClient;
use crate::error::{GithubError, Result};
use crate::models::{
    index_repos, language_shares, net_line_delta, CodeFrequencyWeek, Commit, Contributor,
    LanguageShare, RepoHandle, RepoIndex, RepoRef, RepoScope, Repository,
};
use crate::traits::{Get, List};

#[derive(Debug, Deserialize)]
struct ReadmeFile {
    #[serde(default)]
    content: Option<String>,
}

impl GithubClient {
    /// Create a repository for the authenticated user.
    ///
    /// `data` is sent as is and must contain a non-empty `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Validation`] without making a request when
    /// `name` is missing.
    pub async fn create_repository(&self, data: &Fields) -> Result<bool> {
        require_field(data, "name", "please provide a repository name")?;

        self.post("user/repos", &Value::Object(data.clone())).await?;
        Ok(true)
    }

    /// Get a repository by owner and name.
    pub async fn get_repo(&self, owner: &str, name: &str) -> Result<Repository> {
        Repository::get(self, RepoRef::new(owner, name)).await
    }

    /// Repositories of the authenticated user, keyed by owner and name.
    pub async fn get_repos(&self) -> Result<RepoIndex> {
        let repos = Repository::list(self, &RepoScope::Mine).await?;
        Ok(index_repos(repos))
    }

    /// Latest commits of a repository, newest first.
    pub async fn get_commits(&self, repo: &impl RepoHandle) -> Result<Vec<Commit>> {
        let repo = RepoRef::new(repo.owner_login(), repo.repo_name());
        Commit::list(self, &repo).await
    }

    /// Full git commit object for a listed commit.
    pub async fn get_commit(&self, commit: &Commit) -> Result<Value> {
        let sha = encode_segment(&commit.sha, "sha")?;
        let path = repo_path(commit, &format!("git/commits/{sha}"))?;
        self.fetch_required(&path, "commit object").await
    }

    /// README of a repository, decoded to text.
    ///
    /// Returns `None` when the repository has no README.
    pub async fn get_readme(&self, repo: &impl RepoHandle) -> Result<Option<String>> {
        let path = repo_path(repo, "readme")?;

        let payload = match self.get(&path).await {
            Ok(payload) => payload,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        match payload.decode::<ReadmeFile>()?.and_then(|f| f.content) {
            Some(content) => decode_base64_text(&content).map(Some),
            None => Ok(None),
        }
    }

    /// Net line delta of a repository: Σ(additions − deletions) over the
    /// weekly code frequency series.
    ///
    /// GitHub computes the series lazily and answers 202 until it is ready;
    /// the dispatcher re-issues the request in that case.
    pub async fn get_repo_code_count(&self, repo: &impl RepoHandle) -> Result<i64> {
        let path = repo_path(repo, "stats/code_frequency")?;
        let weeks: Vec<CodeFrequencyWeek> = self.get(&path).await?.decode_list(&path)?;
        Ok(net_line_delta(&weeks))
    }

    /// Languages of a repository with their byte counts, in response order.
    ///
    /// Returns `None` unless the response is a JSON object.
    pub async fn get_repo_languages(
        &self,
        repo: &impl RepoHandle,
    ) -> Result<Option<Vec<LanguageShare>>> {
        let path = repo_path(repo, "languages")?;

        match self.get(&path).await?.into_json() {
            Some(Value::Object(map)) => Ok(Some(language_shares(map))),
            _ => Ok(None),
        }
    }

    /// Contributors of a repository.
    ///
    /// Returns `None` when there are none (GitHub answers 204 for an empty
    /// repository).
    pub async fn get_repo_contributors(
        &self,
        repo: &impl RepoHandle,
    ) -> Result<Option<Vec<Contributor>>> {
        let path = repo_path(repo, "contributors")?;
        let contributors: Vec<Contributor> = self.get(&path).await?.decode_list(&path)?;

        if contributors.is_empty() {
            Ok(None)
        } else {
            Ok(Some(contributors))
        }
    }

    /// Teams with access to a repository.
    pub async fn get_repo_teams(&self, repo: &impl RepoHandle) -> Result<Vec<Value>> {
        let path = repo_path(repo, "teams")?;
        self.fetch_list(&path).await
    }
}

/// Decode base64 file content as served by the contents API (wrapped at 60
/// columns) into UTF-8 text.
fn decode_base64_text(content: &str) -> Result<String> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes: Vec<u8> =
        <Base64 as DeserializeAs<'_, Vec<u8>>>::deserialize_as(Value::String(compact))
            .map_err(|e| GithubError::Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| GithubError::Decode(e.to_string()))
}
