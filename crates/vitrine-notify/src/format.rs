//! Plain-text rendering of a submission for the notification email.

use vitrine_types::ContactSubmission;

/// Subject line for the notification email.
pub fn notification_subject(submission: &ContactSubmission) -> String {
    format!("Portfolio contact from {}", submission.name)
}

/// Renders the notification body.
///
/// Unset optional fields get the same placeholder wording the contact form
/// shows for them, so the email reads like the form did.
pub fn format_notification(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\
         \n\
         From: {name}\n\
         Email: {email}\n\
         Service: {service}\n\
         Budget: {budget}\n\
         Timeline: {timeline}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Submitted: {submitted}\n\
         Reply directly to {email}.\n",
        name = submission.name,
        email = submission.email,
        service = submission.service.as_deref().unwrap_or("General Inquiry"),
        budget = submission.budget.as_deref().unwrap_or("Not specified"),
        timeline = submission.timeline.as_deref().unwrap_or("Flexible"),
        message = submission.message,
        submitted = submission.created_at.format("%Y-%m-%d %H:%M UTC"),
    )
}
