//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call behind [`CompletionBackend`] so the
//! assessment pipeline never talks to `reqwest` directly.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::AiqError;
use crate::prompt::SYSTEM_PROMPT;

pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Low temperature keeps the model close to the requested schema.
pub const TEMPERATURE: f64 = 0.4;

/// Something that can turn a chat prompt into completion text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends `prompt` upstream and returns the text of the first choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the reply is not JSON,
    /// or the upstream reports a non-success status.
    async fn complete(
        &self,
        api_key: &str,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, AiqError>;
}

/// Builds the two-turn conversation: strict-JSON system instruction, then the
/// assessment prompt as the only user turn.
#[must_use]
pub fn build_prompt(user_prompt: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(user_prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Shared HTTP client so warm invocations reuse pooled connections.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// The process-wide `reqwest` client used for every upstream call.
#[must_use]
pub fn shared_http_client() -> &'static Client {
    &HTTP_CLIENT
}

/// `OpenAI` chat-completions client.
pub struct LlmClient {
    http: Client,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(org_id: Option<String>, model_name: String) -> Self {
        Self {
            http: shared_http_client().clone(),
            org_id,
            model_name,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.openai_org_id.clone(), config.model_name().to_string())
    }

    /// Headers for `POST /v1/chat/completions`: bearer credential, JSON
    /// content type, and the organization when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AiqError::HttpError`] when the key or organization is not a
    /// valid header value.
    pub fn request_headers(&self, api_key: &str) -> Result<HeaderMap, AiqError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {api_key}")
            .parse()
            .map_err(|e| AiqError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| AiqError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                AiqError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }

    /// Request body for `POST /v1/chat/completions`.
    ///
    /// # Errors
    ///
    /// Returns [`AiqError::Internal`] if the prompt holds anything other than
    /// system and user text turns.
    pub fn request_body(&self, prompt: &[ChatCompletionMessage]) -> Result<Value, AiqError> {
        Ok(json!({
            "model": self.model_name,
            "messages": build_chat_messages_from_prompt(prompt)?,
            "temperature": TEMPERATURE
        }))
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(
        &self,
        api_key: &str,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, AiqError> {
        #[cfg(feature = "debug-logs")]
        info!("Using OpenAI prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            "Requesting AIQ assessment with {} messages in prompt",
            prompt.len()
        );

        let headers = self.request_headers(api_key)?;
        let body = self.request_body(&prompt)?;

        let response = self
            .http
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_completion(status, &body)
    }
}

/// Converts the prompt into chat-completions `messages`.
pub(crate) fn build_chat_messages_from_prompt(
    prompt: &[ChatCompletionMessage],
) -> Result<Vec<Value>, AiqError> {
    prompt
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                _ => {
                    return Err(AiqError::Internal(format!(
                        "Unsupported prompt role: {:?}",
                        m.role
                    )));
                }
            };

            let Content::Text(text) = &m.content else {
                return Err(AiqError::Internal(
                    "Prompt content must be text".to_string(),
                ));
            };

            Ok(json!({
                "role": role_str,
                "content": text
            }))
        })
        .collect()
}

/// Decodes a chat-completions reply into the first choice's text.
///
/// A reply that is not JSON at all is an unexpected failure. A non-success
/// status surfaces `error.message` when the upstream supplied one. A success
/// without content yields an empty string.
///
/// # Errors
///
/// Returns [`AiqError::Internal`] for non-JSON replies and
/// [`AiqError::OpenAIError`] for non-success statuses.
pub fn decode_completion(status: u16, body: &str) -> Result<String, AiqError> {
    let data: Value = serde_json::from_str(body).map_err(|e| {
        error!(status, body = %body, "OpenAI reply is not JSON");
        AiqError::Internal(format!("OpenAI reply (status {status}) is not JSON: {e}"))
    })?;

    if !(200..300).contains(&status) {
        error!(status, error = %data, "OpenAI error");
        let message = data
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(ToString::to_string);
        return Err(AiqError::OpenAIError { status, message });
    }

    Ok(data
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}
