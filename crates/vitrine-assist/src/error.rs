use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    /// No upstream API key is configured.
    #[error("assistant is not configured")]
    Disabled,

    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion API answered with a non-success status.
    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The completion API answered 2xx but the body had no usable text.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
