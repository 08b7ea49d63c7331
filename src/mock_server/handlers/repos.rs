//! Repository endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use serde_with::base64::Base64;
use serde_with::SerializeAs;
use tokio::sync::RwLock;

use super::{not_found, reject_unauthorized};
use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::MockState;
use crate::{RepoRef, Repository};

/// GitHub wraps base64 file content at this width.
const BASE64_LINE_WIDTH: usize = 60;

/// GET /user/repos
pub async fn list_own_repos(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repos: Vec<Repository> = state.list_own_repos().into_iter().cloned().collect();
    (StatusCode::OK, Json(repos)).into_response()
}

/// POST /user/repos
pub async fn create_repo(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return validation_failed("name is missing");
    };

    let repo_ref = RepoRef::new(&state.authenticated_user, name);
    if state.get_repo(&repo_ref).is_some() {
        return validation_failed("name already exists on this account");
    }

    let mut repo = Fixtures::minimal_repo(&repo_ref.owner, &repo_ref.name);
    repo.id = state.next_repo_id();
    repo.private = body.get("private").and_then(Value::as_bool).unwrap_or(false);
    repo.description = body
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    state.repos.insert(repo_ref, repo.clone());
    (StatusCode::CREATED, Json(repo)).into_response()
}

/// GET /repos/{owner}/{repo}
pub async fn get_repo(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    match state.get_repo(&RepoRef::new(&owner, &name)) {
        Some(repo) => (StatusCode::OK, Json(repo.clone())).into_response(),
        None => not_found(),
    }
}

/// GET /repos/{owner}/{repo}/commits
pub async fn list_commits(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repo = RepoRef::new(&owner, &name);
    if state.get_repo(&repo).is_none() {
        return not_found();
    }

    let commits = state.commits.get(&repo).cloned().unwrap_or_default();
    (StatusCode::OK, Json(commits)).into_response()
}

/// GET /repos/{owner}/{repo}/languages
pub async fn list_languages(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repo = RepoRef::new(&owner, &name);
    if state.get_repo(&repo).is_none() {
        return not_found();
    }

    let languages = state.languages.get(&repo).cloned().unwrap_or_default();
    (StatusCode::OK, Json(Value::Object(languages))).into_response()
}

/// GET /repos/{owner}/{repo}/contributors
///
/// Answers 204 when the repository has no contributors, like GitHub does
/// for empty repositories.
pub async fn list_contributors(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repo = RepoRef::new(&owner, &name);
    if state.get_repo(&repo).is_none() {
        return not_found();
    }

    match state.contributors.get(&repo) {
        Some(contributors) if !contributors.is_empty() => {
            (StatusCode::OK, Json(contributors.clone())).into_response()
        }
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /repos/{owner}/{repo}/stats/code_frequency
///
/// Answers 202 while pending computations remain for the repository.
pub async fn code_frequency(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repo = RepoRef::new(&owner, &name);
    if state.get_repo(&repo).is_none() {
        return not_found();
    }

    if state.take_pending(&repo) {
        return (StatusCode::ACCEPTED, Json(json!({}))).into_response();
    }

    match state.code_frequency.get(&repo) {
        Some(weeks) => (StatusCode::OK, Json(weeks.clone())).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /repos/{owner}/{repo}/readme
pub async fn get_readme(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((owner, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let repo = RepoRef::new(&owner, &name);
    let Some(text) = state.readmes.get(&repo) else {
        return not_found();
    };

    (
        StatusCode::OK,
        Json(json!({
            "type": "file",
            "encoding": "base64",
            "name": "README.md",
            "path": "README.md",
            "content": encode_wrapped(text.as_bytes()),
        })),
    )
        .into_response()
}

fn validation_failed(message: &str) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": "Repository creation failed.", "errors": [message] })),
    )
        .into_response()
}

/// Base64-encode and wrap the way the contents API does.
fn encode_wrapped(bytes: &[u8]) -> String {
    let encoded = <Base64 as SerializeAs<&[u8]>>::serialize_as(&bytes, serde_json::value::Serializer)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_WIDTH + 1);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % BASE64_LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped.push('\n');
    wrapped
}
