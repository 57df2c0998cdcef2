//! Chat proxy for the portfolio site's visitor assistant.
//!
//! Forwards a visitor's message plus a trimmed slice of conversation history
//! to an OpenAI-compatible chat-completion API with a fixed system prompt,
//! and returns the completion text. When the upstream call fails for any
//! reason — unconfigured key, network error, non-2xx status, malformed body —
//! the caller falls back to a canned response picked at random.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vitrine_assist::{fallback_response, parse_history, trim_history, AssistService};
//!
//! let turns = parse_history(&request.history);
//! let reply = match assist.complete(&request.message, trim_history(&turns)).await {
//!     Ok(text) => text,
//!     Err(e) => {
//!         tracing::warn!(error = %e, "completion failed, serving fallback");
//!         fallback_response()
//!     }
//! };
//! ```

mod client;
mod error;
mod fallback;
mod history;

pub use client::{AssistConfig, AssistService};
pub use error::AssistError;
pub use fallback::fallback_response;
pub use history::{parse_history, trim_history, MAX_HISTORY_TURNS, MAX_MESSAGE_LEN};
