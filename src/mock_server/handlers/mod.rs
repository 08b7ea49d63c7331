//! HTTP request handlers for the mock server.

pub mod misc;
pub mod repos;
pub mod users;

pub use misc::*;
pub use repos::*;
pub use users::*;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;

/// 401 with GitHub's error body, if the request is not authorized.
pub(crate) fn reject_unauthorized(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if state.is_authorized(header) {
        return None;
    }
    Some(
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/rest"
            })),
        )
            .into_response(),
    )
}

/// 404 with GitHub's error body.
pub(crate) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })),
    )
        .into_response()
}
