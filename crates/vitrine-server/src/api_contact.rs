//! Contact form API handlers.
//!
//! Provides:
//! - `POST /api/contact` — validate and store a submission, then notify
//! - `GET /api/contact` — admin listing of stored submissions

use crate::AppState;
use axum::{extract::Extension, http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use vitrine_leads::{create_submission, list_submissions, validate_submission};
use vitrine_notify::{format_notification, NotifyError};
use vitrine_types::{ContactSubmission, NewContactSubmission};

/// Acknowledgement shown to the visitor after a successful submission.
const SUBMIT_ACK: &str = "Your message has been received! I'll get back to you within 24 hours.";

/// Response body for a stored submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: i64,
    pub message: String,
}

fn internal_error(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

/// Handler for `POST /api/contact`.
///
/// Validates the form, stores the submission, and fires the email
/// notification on a background task. Validation failures return 400 with
/// per-field details; notification failures are logged and never surface to
/// the visitor.
pub async fn submit_contact_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<NewContactSubmission>,
) -> Result<Json<SubmitResponse>, (StatusCode, Json<Value>)> {
    let normalized = validate_submission(&payload).map_err(|details| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid form data", "details": details })),
        )
    })?;

    let pool = state.pool.clone();
    let submission = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(|e| e.to_string())?;
        create_submission(&conn, &normalized).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|stored| stored)
    .map_err(|e| {
        tracing::error!(error = %e, "failed to store contact submission");
        internal_error("Failed to submit contact form")
    })?;

    tracing::info!(
        id = submission.id,
        name = %submission.name,
        email = %submission.email,
        service = submission.service.as_deref().unwrap_or("not specified"),
        "new contact form submission"
    );

    // Best-effort notification; the visitor already has their acknowledgement.
    let background_state = state.clone();
    let stored = submission.clone();
    tokio::spawn(async move {
        match background_state.notifier.notify(&stored).await {
            Ok(()) => {
                tracing::info!(id = stored.id, "contact notification email sent");
            }
            Err(NotifyError::Disabled) => {
                // No mail provider configured: log the full body so the site
                // owner can forward it manually.
                tracing::info!(
                    id = stored.id,
                    notification = %format_notification(&stored),
                    "mail delivery not configured, logging notification for manual forwarding"
                );
            }
            Err(e) => {
                tracing::warn!(id = stored.id, error = %e, "failed to send contact notification");
            }
        }
    });

    Ok(Json(SubmitResponse {
        success: true,
        id: submission.id,
        message: SUBMIT_ACK.to_string(),
    }))
}

/// Handler for `GET /api/contact`.
///
/// Returns every stored submission in chronological order for manual
/// follow-up. Unauthenticated; deployments that need it gated should do so
/// at the proxy in front of the server.
pub async fn list_contacts_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<ContactSubmission>>, (StatusCode, Json<Value>)> {
    let pool = state.pool.clone();
    let submissions = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(|e| e.to_string())?;
        list_submissions(&conn).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|listed| listed)
    .map_err(|e| {
        tracing::error!(error = %e, "failed to list contact submissions");
        internal_error("Failed to get submissions")
    })?;

    Ok(Json(submissions))
}
