//! User endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use super::{not_found, reject_unauthorized};
use crate::mock_server::state::MockState;

/// GET /user
pub async fn get_authenticated_user(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    match state.users.get(&state.authenticated_user) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => not_found(),
    }
}

/// GET /users/{login}
pub async fn get_user(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(login): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    match state.users.get(&login) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => not_found(),
    }
}
