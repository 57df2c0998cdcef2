//! Vitrine server library logic.

pub mod api_chat;
pub mod api_contact;
pub mod config;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use middleware::RateLimiter;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use vitrine_db::DbPool;

/// Application state shared across all request handlers.
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Upstream chat-completion client.
    pub assist: vitrine_assist::AssistService,
    /// Contact-notification mailer.
    pub notifier: vitrine_notify::Notifier,
    /// Rate limiter state.
    pub rate_limiter: RateLimiter,
    /// Per-route rate limits.
    pub limits: config::LimitsConfig,
}

/// Maximum request body size (64 KiB). The API only accepts small JSON
/// payloads; this protects against oversized uploads.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route(
            "/api/contact",
            post(api_contact::submit_contact_handler).get(api_contact::list_contacts_handler),
        )
        .route("/api/chat", post(api_chat::chat_handler));

    // Serve the prebuilt client bundle if the directory exists.
    // Configured via VITRINE_CLIENT_DIR env var; defaults to "client/dist".
    let client_dir =
        std::env::var("VITRINE_CLIENT_DIR").unwrap_or_else(|_| "client/dist".to_string());
    let router = if std::path::Path::new(&client_dir).join("index.html").exists() {
        tracing::info!(path = %client_dir, "serving client static files");
        let index = format!("{}/index.html", client_dir);
        router.fallback_service(ServeDir::new(&client_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::info!(path = %client_dir, "client directory not found, skipping static file serving");
        router
    };

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(axum::middleware::from_fn(middleware::rate_limit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
