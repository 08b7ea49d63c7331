//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{TimeZone, Utc};
use serde_json::{json, Map, Value};

use crate::{CodeFrequencyWeek, Contributor, RepoOwner, RepoRef, Repository};

use super::state::MockState;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // User Fixtures
    // =========================================================================

    /// Create a user as the users endpoint returns it.
    pub fn user(login: &str, id: u64) -> Value {
        json!({
            "login": login,
            "id": id,
            "type": "User",
            "html_url": format!("https://github.com/{login}"),
            "name": login,
            "public_repos": 2
        })
    }

    // =========================================================================
    // Repository Fixtures
    // =========================================================================

    /// Create a minimal public repository.
    pub fn minimal_repo(owner: &str, name: &str) -> Repository {
        Repository {
            id: 1,
            owner: RepoOwner {
                login: owner.to_string(),
                id: None,
                html_url: None,
            },
            name: name.to_string(),
            full_name: format!("{owner}/{name}"),
            private: false,
            description: None,
            html_url: Some(format!("https://github.com/{owner}/{name}")),
            url: None,
            created_at: Some(Utc.with_ymd_and_hms(2011, 1, 26, 19, 1, 12).unwrap()),
            updated_at: None,
            stargazers_count: 0,
            watchers_count: 0,
            forks_count: 0,
            open_issues_count: 0,
            language: None,
        }
    }

    /// Create a repository with popularity counters and a language.
    pub fn popular_repo(owner: &str, name: &str, stars: u64, language: &str) -> Repository {
        let mut repo = Self::minimal_repo(owner, name);
        repo.description = Some(format!("{name} for testing"));
        repo.stargazers_count = stars;
        repo.watchers_count = stars;
        repo.forks_count = stars / 10;
        repo.language = Some(language.to_string());
        repo
    }

    /// Create a private repository.
    pub fn private_repo(owner: &str, name: &str) -> Repository {
        let mut repo = Self::minimal_repo(owner, name);
        repo.private = true;
        repo
    }

    // =========================================================================
    // Commit Fixtures
    // =========================================================================

    /// Create a commit list item.
    pub fn commit(sha: &str, message: &str) -> Value {
        json!({
            "sha": sha,
            "commit": {
                "message": message,
                "author": {
                    "name": "Monalisa Octocat",
                    "email": "support@github.com",
                    "date": "2011-04-14T16:00:49Z"
                },
                "committer": {
                    "name": "Monalisa Octocat",
                    "email": "support@github.com",
                    "date": "2011-04-14T16:00:49Z"
                },
                "tree": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
                "comment_count": 0
            }
        })
    }

    // =========================================================================
    // Statistics Fixtures
    // =========================================================================

    /// Language breakdown in the given order.
    pub fn languages(entries: &[(&str, u64)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(lang, bytes)| (lang.to_string(), json!(bytes)))
            .collect()
    }

    pub fn contributor(login: &str, contributions: u64) -> Contributor {
        Contributor {
            login: login.to_string(),
            profile_url: Some(format!("https://github.com/{login}")),
            contributions,
        }
    }

    /// Weekly code frequency from `(additions, deletions)` pairs.
    pub fn code_frequency(weeks: &[(i64, i64)]) -> Vec<CodeFrequencyWeek> {
        weeks
            .iter()
            .enumerate()
            .map(|(i, (additions, deletions))| CodeFrequencyWeek {
                week: 1_302_998_400 + (i as i64) * 604_800,
                additions: *additions,
                deletions: *deletions,
            })
            .collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create a default test scenario with common data.
    pub fn default_scenario() -> MockState {
        let hello = RepoRef::new("octocat", "Hello-World");
        let spoon = RepoRef::new("octocat", "Spoon-Knife");

        MockState::new()
            .with_user(Self::user("octocat", 1))
            .with_user(Self::user("hubot", 2))
            .with_repo(Self::popular_repo("octocat", "Hello-World", 80, "Rust"))
            .with_repo(Self::private_repo("octocat", "Spoon-Knife"))
            .with_repo(Self::minimal_repo("hubot", "scripts"))
            .with_commits(
                &hello,
                vec![
                    Self::commit("7fd1a60b01f91b314f59955a4e4d4e80d8edf11d", "Merge pull request #6"),
                    Self::commit("553c2077f0edc3d5dc5d17262f6aa498e69d6f8e", "Create README"),
                ],
            )
            .with_languages(&hello, Self::languages(&[("Rust", 120), ("Shell", 80)]))
            .with_contributors(
                &hello,
                vec![Self::contributor("octocat", 32), Self::contributor("hubot", 4)],
            )
            .with_code_frequency(&hello, Self::code_frequency(&[(10, 3), (5, 1)]))
            .with_readme(&hello, "# Hello World\n\nMy first repository on GitHub!\n")
            .with_commits(&spoon, vec![])
    }
}
