//! Minimal OpenAI-compatible chat-completion client
//!
//! Works against any endpoint exposing `POST {base_url}/chat/completions`
//! with bearer authentication (OpenAI, OpenRouter, local gateways).

use crate::config::SummaryConfig;
use crate::SummaryError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,

    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// "system", "user" or "assistant"
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

/// Chat-completion client
#[derive(Debug, Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
}

impl ChatClient {
    /// Creates a client for the default OpenRouter endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = SummaryConfig::default();
        Self {
            http_client: Client::new(),
            api_key: Some(api_key.into()),
            api_key_env: defaults.api_key_env,
            base_url: defaults.base_url,
        }
    }

    /// Creates a client from config, reading the key from `api_key_env`
    ///
    /// A missing key is not an error here; calls fail with
    /// [`SummaryError::MissingApiKey`] instead.
    pub fn from_config(config: &SummaryConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!("{} is not set; summaries will fail", config.api_key_env);
        }

        Self {
            http_client: Client::new(),
            api_key,
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sets a custom base URL (proxies, test servers)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends a chat completion and returns the first choice's content
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<String, SummaryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SummaryError::MissingApiKey(self.api_key_env.clone()))?;

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Chat completion request failed: {}", e);
                SummaryError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Chat completion API error {}: {}", status, message);
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| SummaryError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(SummaryError::EmptyResponse)?;

        tracing::debug!(
            "Chat completion with {} took {} ms",
            request.model,
            start.elapsed().as_millis()
        );

        Ok(content)
    }
}
