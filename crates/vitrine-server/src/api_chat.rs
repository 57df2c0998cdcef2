//! Chat proxy API handler.
//!
//! `POST /api/chat` forwards a visitor message plus trimmed history to the
//! upstream completion API. The endpoint never surfaces upstream failures:
//! any error is logged and answered with a canned fallback, so the widget
//! always gets a reply.

use crate::AppState;
use axum::{extract::Extension, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use vitrine_assist::{fallback_response, parse_history, trim_history, MAX_MESSAGE_LEN};

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The visitor's new message.
    pub message: String,
    /// Prior turns in wire format (`"User: …"` / `"Assistant: …"`).
    #[serde(default)]
    pub history: Vec<String>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Handler for `POST /api/chat`.
pub async fn chat_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<Value>)> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "message is required" })),
        ));
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("message must be at most {MAX_MESSAGE_LEN} characters")
            })),
        ));
    }
    if payload.history.iter().any(|e| e.len() > MAX_MESSAGE_LEN) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("history entries must be at most {MAX_MESSAGE_LEN} characters")
            })),
        ));
    }

    let turns = parse_history(&payload.history);
    let trimmed = trim_history(&turns);

    let response = match state.assist.complete(message, trimmed).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "completion failed, serving fallback response");
            fallback_response()
        }
    };

    Ok(Json(ChatResponse { response }))
}
