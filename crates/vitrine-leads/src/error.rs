//! Error types for contact-submission storage.

/// Errors that can occur during submission storage operations.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// A database operation failed.
    #[error("lead database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored `created_at` value could not be parsed as RFC 3339.
    #[error("invalid stored timestamp '{raw}': {source}")]
    Timestamp {
        /// The raw text stored in the row.
        raw: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },
}
