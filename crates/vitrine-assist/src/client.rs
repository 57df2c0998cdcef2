use crate::error::AssistError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use vitrine_types::ChatTurn;

/// Fixed system prompt sent with every completion request. Visitors cannot
/// override or extend it — the handler only forwards their message and
/// prior turns.
const SYSTEM_PROMPT: &str = "You are the assistant on a freelance software developer's \
portfolio site. The developer offers cybersecurity consulting, Python development, \
Discord bot development, and full-stack web development. Answer visitor questions \
about these services concisely and professionally. When a visitor wants a quote or a \
detailed discussion, point them to the contact form and ask them to leave their email. \
Keep replies under 120 words.";

/// Sampling temperature for visitor-facing replies.
const COMPLETION_TEMPERATURE: f64 = 0.7;

/// Reply length cap, in tokens. The system prompt already asks for short
/// replies; this bounds the spend when the model ignores it.
const COMPLETION_MAX_TOKENS: u32 = 300;

/// How long the body preview kept in an [`AssistError::Api`] may grow.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Upstream completion API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistConfig {
    /// Full URL of the chat-completions endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the completion API. Empty disables the assistant.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier passed through to the API.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Client for the upstream chat-completion API.
#[derive(Debug)]
pub struct AssistService {
    config: AssistConfig,
    client: reqwest::Client,
}

impl AssistService {
    pub fn new(config: AssistConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    /// The assistant is enabled once an upstream API key is configured.
    pub fn is_enabled(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// The system prompt forwarded with every request.
    pub fn system_prompt() -> &'static str {
        SYSTEM_PROMPT
    }

    /// Requests a completion for `message` with `history` as prior context.
    ///
    /// `history` is forwarded as-is; callers trim it first (see
    /// [`crate::trim_history`]).
    ///
    /// # Errors
    ///
    /// Returns `AssistError::Disabled` when no API key is configured,
    /// `AssistError::Http` on transport failure, `AssistError::Api` on a
    /// non-2xx status, and `AssistError::MalformedResponse` when a 2xx body
    /// carries no completion text.
    pub async fn complete(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, AssistError> {
        if !self.is_enabled() {
            return Err(AssistError::Disabled);
        }

        tracing::debug!(
            model = %self.config.model,
            turns = history.len(),
            "requesting chat completion"
        );

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(json!({ "role": "system", "content": SYSTEM_PROMPT }));
        for turn in history {
            messages.push(json!({ "role": turn.role.as_str(), "content": turn.content }));
        }
        messages.push(json!({ "role": "user", "content": message }));

        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": COMPLETION_TEMPERATURE,
            "max_tokens": COMPLETION_MAX_TOKENS,
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
            return Err(AssistError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        let text = payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AssistError::MalformedResponse(
                    "missing or empty choices[0].message.content".to_string(),
                )
            })?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn service_for(server: &MockServer) -> AssistService {
        AssistService::new(AssistConfig {
            api_url: server.url("/v1/chat/completions"),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        })
    }

    #[tokio::test]
    async fn disabled_without_api_key() {
        let service = AssistService::new(AssistConfig::default());
        assert!(!service.is_enabled());

        let err = service
            .complete("hello", &[])
            .await
            .expect_err("unconfigured service should refuse");
        assert!(matches!(err, AssistError::Disabled));
    }

    #[tokio::test]
    async fn forwards_system_prompt_history_and_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(
                        serde_json::json!({
                            "model": "test-model",
                            "messages": [
                                { "role": "system", "content": AssistService::system_prompt() },
                                { "role": "user", "content": "What do you build?" },
                                { "role": "assistant", "content": "Websites and bots." },
                                { "role": "user", "content": "How much?" },
                            ],
                        })
                        .to_string(),
                    );
                then.status(200).json_body(serde_json::json!({
                    "choices": [
                        { "message": { "role": "assistant", "content": "  Depends on scope.  " } }
                    ]
                }));
            })
            .await;

        let service = service_for(&server);
        let history = vec![
            ChatTurn::user("What do you build?"),
            ChatTurn::assistant("Websites and bots."),
        ];

        let reply = service
            .complete("How much?", &history)
            .await
            .expect("completion should succeed");

        mock.assert_async().await;
        assert_eq!(reply, "Depends on scope.", "reply should be trimmed");
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(429).body("rate limited");
            })
            .await;

        let err = service_for(&server)
            .complete("hello", &[])
            .await
            .expect_err("429 should be an error");

        match err {
            AssistError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_completion_text_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).json_body(serde_json::json!({
                    "choices": [ { "message": { "role": "assistant", "content": "   " } } ]
                }));
            })
            .await;

        let err = service_for(&server)
            .complete("hello", &[])
            .await
            .expect_err("blank completion should be an error");
        assert!(matches!(err, AssistError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_choices_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).json_body(serde_json::json!({ "choices": [] }));
            })
            .await;

        let err = service_for(&server)
            .complete("hello", &[])
            .await
            .expect_err("empty choices should be an error");
        assert!(matches!(err, AssistError::MalformedResponse(_)));
    }
}
