use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b:free";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const ERROR_EXCERPT_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("LLM API error ({status}): {excerpt}")]
    Api { status: u16, excerpt: String },
    #[error("OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new() -> Self {
        let base_url = env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());

        Self {
            client: Client::new(),
            base_url,
            api_key: None,
        }
    }

    /// Points the client at an alternate provider with a fixed credential.
    /// Lets tests stand in a local mock without touching the environment.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    // Re-read from the environment on every call so the key can be
    // rotated without a restart.
    fn resolve_api_key(&self) -> Result<String, LlmError> {
        match &self.api_key {
            Some(key) => Ok(key.clone()),
            None => env::var("OPENROUTER_API_KEY").map_err(|_| LlmError::MissingApiKey),
        }
    }

    /// Sends one chat completion and returns the first choice's content
    /// verbatim. Content-shape validation is the contract layer's job.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let api_key = self.resolve_api_key()?;

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage {
            role: Role::System,
            content: system_prompt.to_string(),
        });
        messages.extend_from_slice(history);

        let request = ChatRequest {
            model: DEFAULT_MODEL,
            messages,
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "LLM provider returned an error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                excerpt: error_text.chars().take(ERROR_EXCERPT_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
    }
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}
