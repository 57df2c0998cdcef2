use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The mailer is missing an API key, sender, or recipient.
    #[error("mail delivery is not configured")]
    Disabled,

    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("mail request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail API answered with a non-success status.
    #[error("mail API returned status {status}: {body}")]
    Api { status: u16, body: String },
}
