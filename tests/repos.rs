//! Repository operation tests.
//!
//! Uses wiremock to mock the GitHub API and test the full request path.

use std::time::Duration;

use ghapi::{ClientConfig, Commit, CommitDetail, Fields, GithubClient, GithubError, RepoRef};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GithubClient {
    let config = ClientConfig {
        base_url: server.uri(),
        accepted_retry_delay: Duration::ZERO,
        ..Default::default()
    };
    GithubClient::with_config("test-token", config).unwrap()
}

fn repo_json(owner: &str, name: &str) -> Value {
    json!({
        "id": 1296269,
        "owner": { "login": owner, "id": 1, "html_url": format!("https://github.com/{owner}") },
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "private": false,
        "description": "This your first repo!",
        "html_url": format!("https://github.com/{owner}/{name}"),
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "stargazers_count": 80,
        "watchers_count": 9,
        "forks_count": 9,
        "open_issues_count": 0,
        "language": "Rust"
    })
}

fn hello_world() -> RepoRef {
    RepoRef::new("octocat", "Hello-World")
}

// ============================================================================
// Repositories
// ============================================================================

#[tokio::test]
async fn test_get_repo_maps_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_json("octocat", "Hello-World")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repo = assert_ok!(client.get_repo("octocat", "Hello-World").await);

    assert_eq!(repo.id, 1296269);
    assert_eq!(repo.owner_login(), "octocat");
    assert_eq!(repo.full_name, "octocat/Hello-World");
    assert_eq!(repo.stargazers_count, 80);
    assert_eq!(repo.language.as_deref(), Some("Rust"));
    assert!(!repo.is_private());
    assert!(repo.created_at.is_some());
}

#[tokio::test]
async fn test_get_repo_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = assert_err!(client.get_repo("octocat", "missing").await);

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_repo_rejects_empty_segments_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = assert_err!(client.get_repo("", "Hello-World").await);
    assert!(matches!(err, GithubError::Validation { ref field, .. } if field == "owner"));

    let err = assert_err!(client.get_repo("octocat", "").await);
    assert!(matches!(err, GithubError::Validation { ref field, .. } if field == "repo"));
}

#[tokio::test]
async fn test_path_segments_are_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello%20world/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Rust": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let languages = client
        .get_repo_languages(&RepoRef::new("octocat", "hello world"))
        .await
        .unwrap();

    assert!(languages.is_some());
}

#[tokio::test]
async fn test_get_repos_indexes_by_owner_and_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("octocat", "Spoon-Knife"),
            repo_json("octocat", "Hello-World"),
            repo_json("github", "linguist")
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repos = client.get_repos().await.unwrap();

    let keys: Vec<String> = repos.keys().map(ToString::to_string).collect();
    assert_eq!(
        keys,
        vec!["github/linguist", "octocat/Hello-World", "octocat/Spoon-Knife"]
    );
    assert_eq!(repos[&hello_world()].name, "Hello-World");
}

#[tokio::test]
async fn test_get_repos_empty_when_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repos = client.get_repos().await.unwrap();

    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_create_repository_posts_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({"name": "demo", "private": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(repo_json("octocat", "demo")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let mut data = Fields::new();
    data.insert("name".into(), json!("demo"));
    data.insert("private".into(), json!(true));

    assert!(client.create_repository(&data).await.unwrap());
}

#[tokio::test]
async fn test_create_repository_requires_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = assert_err!(client.create_repository(&Fields::new()).await);
    assert!(matches!(err, GithubError::Validation { ref field, .. } if field == "name"));

    let mut blank = Fields::new();
    blank.insert("name".into(), json!("   "));
    assert_err!(client.create_repository(&blank).await);
}

// ============================================================================
// Commits
// ============================================================================

#[tokio::test]
async fn test_get_commits_capture_repository() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
                "commit": {
                    "message": "Fix all the bugs",
                    "author": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z" },
                    "tree": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
                    "comment_count": 0
                }
            },
            { "sha": "7638417db6d59f3c431d3e1f261cc637155684cd", "commit": { "message": "Initial commit" } }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let commits = client.get_commits(&hello_world()).await.unwrap();

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].summary(), "Fix all the bugs");
    assert_eq!(commits[0].repo_ref(), hello_world());
    assert_eq!(commits[1].short_sha(), "7638417");
    assert_eq!(commits[1].repo_owner, "octocat");
    assert_eq!(commits[1].repo_name, "Hello-World");
}

#[tokio::test]
async fn test_get_commit_uses_captured_repository() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/repos/octocat/Hello-World/git/commits/7638417db6d59f3c431d3e1f261cc637155684cd",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "7638417db6d59f3c431d3e1f261cc637155684cd",
            "message": "Initial commit",
            "parents": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let commit = Commit::new(
        "7638417db6d59f3c431d3e1f261cc637155684cd",
        CommitDetail::default(),
        &hello_world(),
    );

    let object = client.get_commit(&commit).await.unwrap();
    assert_eq!(object["message"], "Initial commit");
}

// ============================================================================
// README
// ============================================================================

#[tokio::test]
async fn test_get_readme_decodes_wrapped_base64() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "file",
            "encoding": "base64",
            "content": "IyBIZWxs\nbwoKV29y\nbGQK\n"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let readme = client.get_readme(&hello_world()).await.unwrap();

    assert_eq!(readme.as_deref(), Some("# Hello\n\nWorld\n"));
}

#[tokio::test]
async fn test_get_readme_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/readme"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_readme(&hello_world()).await.unwrap(), None);
}

#[tokio::test]
async fn test_get_readme_rejects_invalid_base64() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "!!not base64!!"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_readme(&hello_world()).await.unwrap_err();

    assert!(matches!(err, GithubError::Decode(_)));
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_code_count_sums_net_delta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/stats/code_frequency"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([[1302998400, 10, 3], [1303603200, 5, 1]])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_repo_code_count(&hello_world()).await.unwrap(), 11);
}

#[tokio::test]
async fn test_code_count_zero_for_empty_series() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/stats/code_frequency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/empty/stats/code_frequency"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_repo_code_count(&hello_world()).await.unwrap(), 0);
    assert_eq!(
        client
            .get_repo_code_count(&RepoRef::new("octocat", "empty"))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_code_count_after_pending_computation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/stats/code_frequency"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/stats/code_frequency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[1302998400, 4, 9]])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_repo_code_count(&hello_world()).await.unwrap(), -5);
}

#[tokio::test]
async fn test_languages_keep_response_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/languages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{"Shell": 80, "C": 10, "Rust": 5}"#,
                "application/json; charset=utf-8",
            ),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let languages = client
        .get_repo_languages(&hello_world())
        .await
        .unwrap()
        .expect("languages object");

    let names: Vec<&str> = languages.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(names, vec!["Shell", "C", "Rust"]);
    assert_eq!(languages[0].bytes, 80);

    let serialized = serde_json::to_value(&languages[2]).unwrap();
    assert_eq!(serialized, json!({"lang": "Rust", "bytes": 5}));
}

#[tokio::test]
async fn test_languages_absent_unless_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_repo_languages(&hello_world()).await.unwrap(), None);
}

#[tokio::test]
async fn test_contributors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "octocat", "html_url": "https://github.com/octocat", "contributions": 32 },
            { "login": "hubot", "contributions": 4 }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let contributors = client
        .get_repo_contributors(&hello_world())
        .await
        .unwrap()
        .expect("contributors");

    assert_eq!(contributors.len(), 2);
    assert_eq!(contributors[0].login, "octocat");
    assert_eq!(contributors[0].contributions, 32);
    assert_eq!(
        contributors[0].profile_url.as_deref(),
        Some("https://github.com/octocat")
    );
    assert_eq!(contributors[1].profile_url, None);
}

#[tokio::test]
async fn test_contributors_absent_for_empty_repository() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/contributors"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_repo_contributors(&hello_world()).await.unwrap(), None);
}

#[tokio::test]
async fn test_repo_teams() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Justice League"}])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let teams = client.get_repo_teams(&hello_world()).await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Justice League");
}
