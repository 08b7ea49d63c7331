//! Organization operations.

use serde_json::Value;

use super::{encode_segment, Fields};
use crate::client::GithubClient;
use crate::error::Result;

impl GithubClient {
    /// Organizations the authenticated user belongs to.
    pub async fn get_my_organizations(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/orgs").await
    }

    /// Public organization memberships of a user.
    pub async fn get_user_organizations(&self, user: &str) -> Result<Vec<Value>> {
        let path = format!("users/{}/orgs", encode_segment(user, "user")?);
        self.fetch_list(&path).await
    }

    pub async fn get_organization(&self, org: &str) -> Result<Option<Value>> {
        let path = format!("orgs/{}", encode_segment(org, "org")?);
        self.fetch_optional(&path).await
    }

    /// Update an organization's profile; returns the updated organization.
    pub async fn edit_organization(&self, org: &str, data: &Fields) -> Result<Option<Value>> {
        let path = format!("orgs/{}", encode_segment(org, "org")?);
        let payload = self.patch(&path, &Value::Object(data.clone())).await?;
        Ok(payload.into_json())
    }

    pub async fn get_organization_members(&self, org: &str) -> Result<Vec<Value>> {
        let path = format!("orgs/{}/members", encode_segment(org, "org")?);
        self.fetch_list(&path).await
    }

    /// Remove a user from an organization.
    pub async fn delete_member(&self, org: &str, user: &str) -> Result<bool> {
        let path = format!(
            "orgs/{}/members/{}",
            encode_segment(org, "org")?,
            encode_segment(user, "user")?
        );
        self.delete(&path).await?;
        Ok(true)
    }

    pub async fn get_organization_teams(&self, org: &str) -> Result<Vec<Value>> {
        let path = format!("orgs/{}/teams", encode_segment(org, "org")?);
        self.fetch_list(&path).await
    }
}
