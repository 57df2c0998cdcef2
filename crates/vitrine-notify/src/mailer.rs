use crate::error::NotifyError;
use crate::format::{format_notification, notification_subject};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use vitrine_types::ContactSubmission;

/// Request timeout for mail API calls.
const MAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the body preview kept in a [`NotifyError::Api`] may grow.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Mail API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Full URL of the mail-send endpoint (SendGrid-compatible).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the mail API. Empty disables delivery.
    #[serde(default)]
    pub api_key: String,

    /// Verified sender address.
    #[serde(default)]
    pub from_email: String,

    /// Where submission notifications are delivered.
    #[serde(default)]
    pub to_email: String,
}

fn default_api_url() -> String {
    "https://api.sendgrid.com/v3/mail/send".to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            from_email: String::new(),
            to_email: String::new(),
        }
    }
}

/// Sends contact-submission notifications through an HTTP mail API.
#[derive(Debug)]
pub struct Notifier {
    config: NotifyConfig,
    client: reqwest::Client,
}

impl Notifier {
    pub fn new(config: NotifyConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(MAIL_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    /// Delivery is enabled once an API key, sender, and recipient are all
    /// configured.
    pub fn is_enabled(&self) -> bool {
        !self.config.api_key.is_empty()
            && !self.config.from_email.is_empty()
            && !self.config.to_email.is_empty()
    }

    /// Delivers a notification email for the given submission.
    ///
    /// Reply-To is set to the submitter's address so the site owner can
    /// answer the lead straight from their inbox.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Disabled` when unconfigured, `NotifyError::Http`
    /// on transport failure, and `NotifyError::Api` on a non-2xx status.
    pub async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        if !self.is_enabled() {
            return Err(NotifyError::Disabled);
        }

        let body = json!({
            "personalizations": [ { "to": [ { "email": self.config.to_email } ] } ],
            "from": { "email": self.config.from_email },
            "reply_to": { "email": submission.email },
            "subject": notification_subject(submission),
            "content": [
                { "type": "text/plain", "value": format_notification(submission) }
            ],
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            body.truncate(MAX_ERROR_BODY_LEN);
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            submission_id = submission.id,
            "notification email accepted by mail API"
        );
        Ok(())
    }
}
