//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Commit, RateLimitStatus, Repository};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Repository {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.full_name.len().max(30));

        let mut lines = vec![
            format!("Repository: {}", self.full_name),
            divider,
            format!(
                "Visibility:     {}",
                if self.is_private() { "private" } else { "public" }
            ),
        ];

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        if let Some(ref language) = self.language {
            lines.push(format!("Language:       {}", language));
        }

        lines.push(format!(
            "Stats:          {} stars, {} watchers, {} forks, {} open issues",
            self.stargazers_count, self.watchers_count, self.forks_count, self.open_issues_count
        ));

        if let Some(ref created) = self.created_at {
            lines.push(format!("Created:        {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        if let Some(ref updated) = self.updated_at {
            lines.push(format!("Updated:        {}", updated.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        if let Some(ref url) = self.html_url {
            lines.push(format!("URL:            {}", url));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Commit {
    fn pretty_print(&self) -> String {
        let header = format!("Commit {}", self.sha);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Repository:     {}/{}", self.repo_owner, self.repo_name),
            format!("Summary:        {}", self.summary()),
        ];

        if let Some(ref author) = self.commit.author {
            let name = author.name.as_deref().unwrap_or("unknown");
            match author.email {
                Some(ref email) => lines.push(format!("Author:         {} <{}>", name, email)),
                None => lines.push(format!("Author:         {}", name)),
            }
            if let Some(ref date) = author.date {
                lines.push(format!("Date:           {}", date.format("%Y-%m-%d %H:%M:%S UTC")));
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for RateLimitStatus {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            "Rate Limit".to_string(),
            "─".repeat(30),
            format!(
                "Core:           {}/{} remaining (resets {})",
                self.rate.remaining,
                self.rate.limit,
                self.rate.reset.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        ];

        for (name, limit) in self.resources.iter().filter(|(name, _)| *name != "core") {
            lines.push(format!(
                "{:<16}{}/{} remaining",
                format!("{}:", name),
                limit.remaining,
                limit.limit
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_pretty_print_format() {
        let repo: Repository = serde_json::from_value(serde_json::json!({
            "id": 1,
            "owner": { "login": "octocat" },
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "private": true,
            "language": "Rust"
        }))
        .unwrap();

        let output = repo.pretty_print();
        assert!(output.starts_with("Repository: octocat/Hello-World"));
        assert!(output.contains("private"));
        assert!(output.contains("Language:       Rust"));
    }

    #[test]
    fn test_rate_limit_pretty_print_skips_core_resource() {
        let status: RateLimitStatus = serde_json::from_value(serde_json::json!({
            "resources": {
                "core": { "limit": 5000, "remaining": 12, "reset": 1372700873 },
                "search": { "limit": 30, "remaining": 30, "reset": 1372700873 }
            },
            "rate": { "limit": 5000, "remaining": 12, "reset": 1372700873 }
        }))
        .unwrap();

        let output = status.pretty_print();
        assert!(output.contains("12/5000"));
        assert!(output.contains("search:"));
        assert!(!output.contains("core:"));
    }
}
