//! Rate limit and markdown handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

use super::reject_unauthorized;
use crate::mock_server::state::MockState;

/// Body of POST /markdown.
#[derive(Debug, Deserialize)]
pub struct MarkdownRequest {
    pub text: String,
}

/// GET /rate_limit
pub async fn get_rate_limit(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    let reset = chrono::Utc::now().timestamp() + 3600;
    let core = json!({
        "limit": 5000,
        "remaining": state.rate_remaining,
        "reset": reset,
        "used": 5000u64.saturating_sub(state.rate_remaining)
    });

    (
        StatusCode::OK,
        Json(json!({
            "resources": {
                "core": core,
                "search": { "limit": 30, "remaining": 30, "reset": reset, "used": 0 }
            },
            "rate": core
        })),
    )
        .into_response()
}

/// POST /markdown
///
/// Renders headings and paragraphs only.
pub async fn render_markdown(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<MarkdownRequest>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(rejection) = reject_unauthorized(&state, &headers) {
        return rejection;
    }

    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/html;charset=utf-8")],
        render(&body.text),
    )
        .into_response()
}

fn render(markdown: &str) -> String {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            let level = block.chars().take_while(|c| *c == '#').count();
            if (1..=6).contains(&level) && block[level..].starts_with(' ') {
                format!("<h{level}>{}</h{level}>\n", block[level..].trim())
            } else {
                format!("<p>{block}</p>\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_paragraphs() {
        assert_eq!(
            render("# Hello World\n\nMy first repository!\n"),
            "<h1>Hello World</h1>\n<p>My first repository!</p>\n"
        );
        assert_eq!(render("#hashtag"), "<p>#hashtag</p>\n");
        assert_eq!(render(""), "");
    }
}
