//! Conversation-history handling for the chat proxy.
//!
//! The client sends history as plain strings prefixed with `"User: "` or
//! `"Assistant: "`. Parsing strips the prefix into a typed turn; anything
//! unprefixed is treated as a user turn so a confused client cannot speak
//! as the assistant.

use vitrine_types::ChatTurn;

/// Number of prior turns forwarded upstream with each message. Older turns
/// are dropped.
pub const MAX_HISTORY_TURNS: usize = 10;

/// Maximum length of the visitor message and of each history entry.
pub const MAX_MESSAGE_LEN: usize = 2_000;

/// Parses wire-format history entries into typed turns.
pub fn parse_history(entries: &[String]) -> Vec<ChatTurn> {
    entries
        .iter()
        .map(|entry| {
            if let Some(content) = entry.strip_prefix("User: ") {
                ChatTurn::user(content)
            } else if let Some(content) = entry.strip_prefix("Assistant: ") {
                ChatTurn::assistant(content)
            } else {
                ChatTurn::user(entry.as_str())
            }
        })
        .collect()
}

/// Returns the most recent [`MAX_HISTORY_TURNS`] turns.
pub fn trim_history(turns: &[ChatTurn]) -> &[ChatTurn] {
    let start = turns.len().saturating_sub(MAX_HISTORY_TURNS);
    &turns[start..]
}
