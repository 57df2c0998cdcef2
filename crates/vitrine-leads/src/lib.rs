//! Contact-submission storage for the vitrine backend.
//!
//! Implements the lead pipeline behind the contact form: field validation
//! with per-field error details, insert-only persistence, and the
//! chronological admin listing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vitrine_leads::{create_submission, validate_submission};
//!
//! let normalized = validate_submission(&form)?;
//! let stored = create_submission(&conn, &normalized)?;
//! ```

mod error;
mod store;
mod validate;

pub use error::LeadError;
pub use store::{create_submission, list_submissions};
pub use validate::{
    validate_submission, FieldError, MAX_DETAIL_LEN, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN,
};
