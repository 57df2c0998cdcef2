//! Email notification for new contact submissions.
//!
//! Formats a plain-text notification from a stored submission and delivers
//! it through a SendGrid-compatible HTTP mail API. Delivery is best-effort:
//! the contact handler fires it on a background task and logs failures, so
//! a mail outage never fails a form submission. When the mailer is not
//! configured, the caller logs the formatted body instead so the site owner
//! can forward it manually.

mod error;
mod format;
mod mailer;

pub use error::NotifyError;
pub use format::{format_notification, notification_subject};
pub use mailer::{Notifier, NotifyConfig};
