//! User, e-mail, follower and key operations.

use serde_json::{json, Value};

use super::{encode_segment, require_field, Fields};
use crate::client::GithubClient;
use crate::error::{GithubError, Result};

impl GithubClient {
    /// Get the authenticated user, or the named one.
    pub async fn get_user(&self, login: Option<&str>) -> Result<Value> {
        let path = match login {
            None => "user".to_string(),
            Some(login) => format!("users/{}", encode_segment(login, "user")?),
        };
        self.fetch_required(&path, "user object").await
    }

    /// Update the authenticated user's profile. `data` must contain `name`.
    pub async fn update_me(&self, data: &Fields) -> Result<Option<Value>> {
        require_field(data, "name", "please provide a username")?;

        let payload = self.patch("user", &Value::Object(data.clone())).await?;
        Ok(payload.into_json())
    }

    pub async fn list_my_emails(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/emails").await
    }

    /// Add e-mail addresses to the authenticated user.
    pub async fn add_email_address(&self, emails: &[&str]) -> Result<bool> {
        let body = email_body(emails)?;
        self.post("user/emails", &body).await?;
        Ok(true)
    }

    /// Remove e-mail addresses from the authenticated user.
    pub async fn delete_email_address(&self, emails: &[&str]) -> Result<bool> {
        let body = email_body(emails)?;
        self.request(reqwest::Method::DELETE, "user/emails", Some(&body))
            .await?;
        Ok(true)
    }

    pub async fn list_my_followers(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/followers").await
    }

    /// Users the authenticated user follows.
    pub async fn list_my_following(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/following").await
    }

    pub async fn list_user_followers(&self, user: &str) -> Result<Vec<Value>> {
        let path = format!("users/{}/followers", encode_segment(user, "user")?);
        self.fetch_list(&path).await
    }

    pub async fn list_user_following(&self, user: &str) -> Result<Vec<Value>> {
        let path = format!("users/{}/following", encode_segment(user, "user")?);
        self.fetch_list(&path).await
    }

    /// Follow a user.
    pub async fn follow_user(&self, user: &str) -> Result<bool> {
        let path = format!("user/following/{}", encode_segment(user, "user")?);
        self.put(&path).await?;
        Ok(true)
    }

    /// Stop following a user.
    pub async fn unfollow_user(&self, user: &str) -> Result<bool> {
        let path = format!("user/following/{}", encode_segment(user, "user")?);
        self.delete(&path).await?;
        Ok(true)
    }

    pub async fn list_my_public_ssh_keys(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/keys").await
    }

    pub async fn list_user_public_ssh_keys(&self, user: &str) -> Result<Vec<Value>> {
        let path = format!("users/{}/keys", encode_segment(user, "user")?);
        self.fetch_list(&path).await
    }

    pub async fn get_public_ssh_key(&self, id: u64) -> Result<Option<Value>> {
        self.fetch_optional(&format!("user/keys/{id}")).await
    }

    /// Register a public SSH key for the authenticated user.
    pub async fn create_ssh_key(&self, title: &str, key: &str) -> Result<bool> {
        if key.trim().is_empty() {
            return Err(GithubError::missing("key", "please provide a public key"));
        }

        self.post("user/keys", &json!({ "title": title, "key": key }))
            .await?;
        Ok(true)
    }

    pub async fn delete_ssh_key(&self, id: u64) -> Result<bool> {
        self.delete(&format!("user/keys/{id}")).await?;
        Ok(true)
    }

    pub async fn list_my_gpg_keys(&self) -> Result<Vec<Value>> {
        self.fetch_list("user/gpg_keys").await
    }

    pub async fn get_gpg_key(&self, id: u64) -> Result<Option<Value>> {
        self.fetch_optional(&format!("user/gpg_keys/{id}")).await
    }

    /// Register an ASCII-armored GPG public key.
    pub async fn create_gpg_key(&self, armored_public_key: &str) -> Result<bool> {
        if armored_public_key.trim().is_empty() {
            return Err(GithubError::missing(
                "armored_public_key",
                "please provide a GPG public key",
            ));
        }

        self.post(
            "user/gpg_keys",
            &json!({ "armored_public_key": armored_public_key }),
        )
        .await?;
        Ok(true)
    }

    pub async fn delete_gpg_key(&self, id: u64) -> Result<bool> {
        self.delete(&format!("user/gpg_keys/{id}")).await?;
        Ok(true)
    }
}

fn email_body(emails: &[&str]) -> Result<Value> {
    if emails.is_empty() || emails.iter().any(|e| e.trim().is_empty()) {
        return Err(GithubError::missing(
            "emails",
            "please provide at least one e-mail address",
        ));
    }
    Ok(json!({ "emails": emails }))
}
