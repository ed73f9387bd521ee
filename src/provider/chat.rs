use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{Provider, ProviderError};
use super::status_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Provider-level output constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonObject,
}

/// Request body. The model is addressed by URL, so it is not part of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            response_format: None,
        }
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Response body; only `choices[].message.content` is read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Option<Vec<ChatChoice>>,
}

impl ChatResponse {
    /// Content of the first choice. No choices at all is a shape error, never a default.
    pub fn first_content(&self) -> Result<&str, ProviderError> {
        let first = self
            .choices
            .as_deref()
            .and_then(|choices| choices.first())
            .ok_or_else(|| ProviderError::shape(Provider::Llm, "response has no choices"))?;

        first
            .message
            .as_ref()
            .and_then(|message| message.content.as_deref())
            .ok_or_else(|| ProviderError::shape(Provider::Llm, "first choice has no message content"))
    }
}

#[async_trait]
/// Chat-completion endpoint addressed per model.
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        model_name: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ProviderError>;
}

/// `reqwest` implementation of [`ChatCompletion`].
#[derive(Clone)]
pub struct HttpChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl HttpChatClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// `{base}/{model}/chat/completions`.
    pub fn completion_url(&self, model_name: &str) -> String {
        format!(
            "{}/{}/chat/completions",
            self.base_url.trim_end_matches('/'),
            model_name
        )
    }
}

#[async_trait]
impl ChatCompletion for HttpChatClient {
    #[instrument(skip(self, request), fields(messages = request.messages.len()))]
    async fn complete(
        &self,
        model_name: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ProviderError> {
        let url = self.completion_url(model_name);

        let mut builder = self.http.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header("api-key", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::Llm, e))?;

        if !response.status().is_success() {
            return Err(status_error(Provider::Llm, response).await);
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            ProviderError::transport(Provider::Llm, format!("invalid JSON body: {e}"))
        })?;
        let body: ChatResponse = serde_json::from_value(raw)
            .map_err(|e| ProviderError::shape(Provider::Llm, format!("unexpected body: {e}")))?;

        debug!(
            choices = body.choices.as_ref().map_or(0, Vec::len),
            "Chat completion received"
        );
        Ok(body)
    }
}
