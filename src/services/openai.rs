//! OpenAI-compatible chat client
//!
//! Covers the default provider and OpenAI-compatible gateways such as
//! OpenRouter; the gateway case only differs in base URL, key, and the extra
//! identifying headers supplied at construction.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, ChatModel, ChatResponse};
use crate::error::{AgentkitError, Result};

/// Default provider endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Construction parameters for [`OpenAiChat`]
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Provider name reported by the client
    pub provider: String,

    /// Model identifier requests are issued with
    pub model: String,

    /// Bearer key; omitted entirely when `None`
    pub api_key: Option<String>,

    /// Custom endpoint, falling back to [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// Extra identifying headers sent with every request
    pub headers: Vec<(String, String)>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: String::new(),
            api_key: None,
            base_url: None,
            headers: Vec::new(),
        }
    }
}

/// OpenAI-compatible chat client
pub struct OpenAiChat {
    client: Client,
    provider: String,
    model: String,
    base_url: String,
}

impl OpenAiChat {
    /// Build a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentkitError::InvalidConfig`] when the key or an extra
    /// header cannot be encoded as an HTTP header.
    pub fn new(config: ChatConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| AgentkitError::InvalidConfig("invalid API key format".to_string()))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        for (name, value) in &config.headers {
            let name = header::HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                AgentkitError::InvalidConfig(format!("invalid header name: {name}"))
            })?;
            let value = header::HeaderValue::from_str(value).map_err(|_| {
                AgentkitError::InvalidConfig(format!("invalid value for header {name}"))
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            provider: config.provider,
            model: config.model,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Effective endpoint requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
        };

        debug!(provider = %self.provider, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(AgentkitError::Api {
                provider: self.provider.clone(),
                message: format!("HTTP {status}: {error_text}"),
            });
        }

        let api_response: ApiResponse = response.json().await?;

        let model = api_response.model;
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentkitError::Api {
                provider: self.provider.clone(),
                message: "no choices in response".to_string(),
            })?;

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            model,
            stop_reason: choice.finish_reason,
        })
    }
}

// OpenAI wire types

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}
