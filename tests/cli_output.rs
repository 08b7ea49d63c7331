//! CLI output formatting tests.
//!
//! JSON output with `--json`, pretty-print output as the default.

use ghapi::{Commit, CommitDetail, GitSignature, PrettyPrint, RateLimitStatus, RepoRef, Repository};

fn make_test_repository() -> Repository {
    serde_json::from_value(serde_json::json!({
        "id": 1296269,
        "owner": { "login": "octocat", "id": 1 },
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "private": false,
        "description": "This your first repo!",
        "html_url": "https://github.com/octocat/Hello-World",
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "stargazers_count": 80,
        "watchers": 9,
        "forks": 9,
        "open_issues": 0,
        "language": "Rust"
    }))
    .unwrap()
}

fn make_test_commit() -> Commit {
    let detail = CommitDetail {
        message: "Fix all the bugs\n\nDetails follow".to_string(),
        author: Some(GitSignature {
            name: Some("Monalisa Octocat".to_string()),
            email: Some("support@github.com".to_string()),
            date: None,
        }),
        ..Default::default()
    };
    Commit::new(
        "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        detail,
        &RepoRef::new("octocat", "Hello-World"),
    )
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_preserves_fields() {
    let repo = make_test_repository();
    let json_output = serde_json::to_string_pretty(&repo).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();

    assert_eq!(parsed["full_name"], "octocat/Hello-World");
    assert_eq!(parsed["owner"]["login"], "octocat");
    // Legacy counter names are accepted on input and written canonically
    assert_eq!(parsed["watchers_count"], 9);
    assert_eq!(parsed["forks_count"], 9);
}

#[test]
fn test_json_output_of_commit_includes_repository() {
    let commit = make_test_commit();
    let parsed = serde_json::to_value(&commit).unwrap();

    assert_eq!(parsed["repo_owner"], "octocat");
    assert_eq!(parsed["repo_name"], "Hello-World");
    assert_eq!(parsed["commit"]["message"], "Fix all the bugs\n\nDetails follow");
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_repository_pretty_print() {
    let output = make_test_repository().pretty_print();

    assert!(output.starts_with("Repository: octocat/Hello-World"));
    assert!(output.contains("public"));
    assert!(output.contains("Description:    This your first repo!"));
    assert!(output.contains("80 stars, 9 watchers, 9 forks, 0 open issues"));
    assert!(output.contains("Created:        2011-01-26 19:01:12 UTC"));
    assert!(output.contains("URL:            https://github.com/octocat/Hello-World"));
}

#[test]
fn test_repository_pretty_print_omits_missing_fields() {
    let mut repo = make_test_repository();
    repo.description = None;
    repo.language = None;

    let output = repo.pretty_print();

    assert!(!output.contains("Description:"));
    assert!(!output.contains("Language:"));
}

#[test]
fn test_commit_pretty_print() {
    let output = make_test_commit().pretty_print();

    assert!(output.starts_with("Commit 6dcb09b5b57875f334f61aebed695e2e4193db5e"));
    assert!(output.contains("Repository:     octocat/Hello-World"));
    assert!(output.contains("Summary:        Fix all the bugs"));
    assert!(!output.contains("Details follow"));
    assert!(output.contains("Author:         Monalisa Octocat <support@github.com>"));
}

#[test]
fn test_rate_limit_pretty_print() {
    let status: RateLimitStatus = serde_json::from_value(serde_json::json!({
        "resources": {
            "core": { "limit": 5000, "remaining": 4999, "reset": 1372700873 },
            "search": { "limit": 30, "remaining": 18, "reset": 1372700873 }
        },
        "rate": { "limit": 5000, "remaining": 4999, "reset": 1372700873 }
    }))
    .unwrap();

    let output = status.pretty_print();

    assert!(output.contains("Core:           4999/5000 remaining"));
    assert!(output.contains("search:         18/30 remaining"));
    assert_eq!(output.matches("5000").count(), 1);
}
