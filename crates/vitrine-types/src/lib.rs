//! Shared domain types for the vitrine backend.
//!
//! The contact-submission types mirror the single persisted table; the chat
//! types model the visitor-assistant conversation that the chat proxy
//! forwards upstream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission.
///
/// Submissions are insert-only: they are created by the contact-form handler
/// and read back by the admin listing, never updated or deleted. JSON field
/// names are camelCase to match the public API shape consumed by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Auto-incremented row ID.
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Service the visitor is interested in, if they picked one.
    pub service: Option<String>,
    /// Free-form budget range.
    pub budget: Option<String>,
    /// Free-form project timeline.
    pub timeline: Option<String>,
    pub message: String,
    /// UTC time the submission was stored.
    pub created_at: DateTime<Utc>,
}

/// The insertable subset of a contact submission.
///
/// Everything the form collects; `id` and `created_at` are assigned by the
/// database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    pub message: String,
}

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// The role string used on the upstream completion API wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One prior turn of a visitor conversation, as forwarded to the upstream
/// completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
