use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::chat::{ChatCompletion, ChatRequest, ChatResponse};
use super::error::{Provider, ProviderError};
use super::reference::ReferenceTranslator;

/// One recorded call to [`MockReferenceTranslator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCall {
    pub lines: Vec<String>,
    pub source_lang: String,
    pub target_lang: String,
    pub endpoint_override: Option<String>,
}

/// Reference translator returning a canned body (or a transport failure).
pub struct MockReferenceTranslator {
    response: Result<Value, String>,
    calls: Mutex<Vec<ReferenceCall>>,
}

impl MockReferenceTranslator {
    pub fn returning(body: Value) -> Self {
        Self {
            response: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with a [`ProviderError::Transport`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ReferenceCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ReferenceTranslator for MockReferenceTranslator {
    async fn translate(
        &self,
        lines: &[String],
        source_lang: &str,
        target_lang: &str,
        endpoint_override: Option<&str>,
    ) -> Result<Value, ProviderError> {
        self.calls.lock().push(ReferenceCall {
            lines: lines.to_vec(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            endpoint_override: endpoint_override.map(str::to_string),
        });

        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(ProviderError::transport(Provider::Translation, message.clone())),
        }
    }
}

/// Chat client that replays queued responses in order.
///
/// Running out of queued responses is reported as a transport error.
#[derive(Default)]
pub struct MockChatClient {
    responses: Mutex<VecDeque<Result<Value, String>>>,
    calls: Mutex<Vec<(String, ChatRequest)>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response body (decoded like the HTTP client would).
    pub fn push_body(self, body: Value) -> Self {
        self.responses.lock().push_back(Ok(body));
        self
    }

    /// Queues a response whose first choice carries `content`.
    pub fn push_content(self, content: impl Into<String>) -> Self {
        let content = content.into();
        self.push_body(serde_json::json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        }))
    }

    /// Queues a transport failure.
    pub fn push_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().push_back(Err(message.into()));
        self
    }

    /// `(model_name, request)` pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, ChatRequest)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ChatCompletion for MockChatClient {
    async fn complete(
        &self,
        model_name: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ProviderError> {
        self.calls
            .lock()
            .push((model_name.to_string(), request.clone()));

        let next = self.responses.lock().pop_front();
        match next {
            Some(Ok(body)) => serde_json::from_value(body).map_err(|e| {
                ProviderError::transport(Provider::Llm, format!("invalid JSON body: {e}"))
            }),
            Some(Err(message)) => Err(ProviderError::transport(Provider::Llm, message)),
            None => Err(ProviderError::transport(
                Provider::Llm,
                "no mock response queued",
            )),
        }
    }
}
