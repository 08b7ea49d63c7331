//! Team operations.

use serde_json::Value;

use super::{encode_segment, repo_path, require_field, Fields};
use crate::client::GithubClient;
use crate::error::Result;
use crate::models::{index_repos, RepoHandle, RepoIndex, RepoScope, Repository};
use crate::traits::List;

impl GithubClient {
    pub async fn get_team(&self, team: u64) -> Result<Option<Value>> {
        self.fetch_optional(&format!("teams/{team}")).await
    }

    /// Create a team in an organization. `data` must contain `name`.
    pub async fn create_team(&self, org: &str, data: &Fields) -> Result<bool> {
        require_field(data, "name", "please provide a team name")?;
        let path = format!("orgs/{}/teams", encode_segment(org, "org")?);

        self.post(&path, &Value::Object(data.clone())).await?;
        Ok(true)
    }

    /// Update a team. `data` must contain `name`.
    pub async fn edit_team(&self, team: u64, data: &Fields) -> Result<Option<Value>> {
        require_field(data, "name", "please provide a team name")?;

        let payload = self
            .patch(&format!("teams/{team}"), &Value::Object(data.clone()))
            .await?;
        Ok(payload.into_json())
    }

    pub async fn delete_team(&self, team: u64) -> Result<bool> {
        self.delete(&format!("teams/{team}")).await?;
        Ok(true)
    }

    pub async fn get_team_members(&self, team: u64) -> Result<Vec<Value>> {
        self.fetch_list(&format!("teams/{team}/members")).await
    }

    /// Repositories a team has access to, keyed by owner and name.
    pub async fn get_team_repos(&self, team: u64) -> Result<RepoIndex> {
        let repos = Repository::list(self, &RepoScope::Team(team)).await?;
        Ok(index_repos(repos))
    }

    /// Grant a team access to a repository.
    pub async fn add_team_repo(&self, team: u64, repo: &impl RepoHandle) -> Result<bool> {
        self.put(&team_repo_path(team, repo)?).await?;
        Ok(true)
    }

    /// Revoke a team's access to a repository.
    pub async fn delete_team_repo(&self, team: u64, repo: &impl RepoHandle) -> Result<bool> {
        self.delete(&team_repo_path(team, repo)?).await?;
        Ok(true)
    }
}

fn team_repo_path(team: u64, repo: &impl RepoHandle) -> Result<String> {
    Ok(format!("teams/{team}/{}", repo_path(repo, "")?))
}
