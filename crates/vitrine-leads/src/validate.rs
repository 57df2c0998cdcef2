//! Form validation for contact submissions.
//!
//! Produces per-field error details so the handler can return a 400 body the
//! client can attach to individual inputs. Validation also normalizes the
//! form: surrounding whitespace is trimmed and empty optional fields become
//! NULL rather than empty strings.

use serde::Serialize;
use vitrine_types::NewContactSubmission;

/// Maximum length for the sender name.
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length for the sender email address.
pub const MAX_EMAIL_LEN: usize = 320;
/// Maximum length for the service / budget / timeline fields.
pub const MAX_DETAIL_LEN: usize = 200;
/// Maximum length for the message body.
pub const MAX_MESSAGE_LEN: usize = 5_000;

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The JSON field name the error applies to.
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Accepts addresses with a single `@`, non-empty local and domain parts,
/// a dot somewhere in the domain, and no whitespace. Deliverability is the
/// mail provider's problem, not ours.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}

fn normalize_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validates a submitted contact form.
///
/// On success returns the normalized submission (trimmed fields, empty
/// optionals collapsed to `None`). On failure returns one [`FieldError`] per
/// offending field.
pub fn validate_submission(
    form: &NewContactSubmission,
) -> Result<NewContactSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            format!("name must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    } else if email.len() > MAX_EMAIL_LEN {
        errors.push(FieldError::new(
            "email",
            format!("email must be at most {MAX_EMAIL_LEN} characters"),
        ));
    } else if !is_plausible_email(email) {
        errors.push(FieldError::new("email", "email address is not valid"));
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.push(FieldError::new("message", "message is required"));
    } else if message.len() > MAX_MESSAGE_LEN {
        errors.push(FieldError::new(
            "message",
            format!("message must be at most {MAX_MESSAGE_LEN} characters"),
        ));
    }

    for (field, value) in [
        ("service", &form.service),
        ("budget", &form.budget),
        ("timeline", &form.timeline),
    ] {
        if let Some(v) = value {
            if v.trim().len() > MAX_DETAIL_LEN {
                errors.push(FieldError::new(
                    field,
                    format!("{field} must be at most {MAX_DETAIL_LEN} characters"),
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        service: normalize_optional(&form.service),
        budget: normalize_optional(&form.budget),
        timeline: normalize_optional(&form.timeline),
        message: message.to_string(),
    })
}
