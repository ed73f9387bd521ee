//! Outbound HTTP clients for the two upstream APIs.
//!
//! - [`reference`] posts line batches to the reference-translation endpoint.
//! - [`chat`] posts chat-completion requests to `{base}/{model}/chat/completions`.
//!
//! Neither client retries or validates shapes beyond what it needs to hand back a value;
//! every failure surfaces as a [`ProviderError`] naming the API it came from.

pub mod chat;
pub mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod reference;


pub use chat::{
    ChatChoice, ChatCompletion, ChatMessage, ChatRequest, ChatResponse, ChatRole, ChoiceMessage,
    HttpChatClient, ResponseFormat,
};
pub use error::{Provider, ProviderError};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockChatClient, MockReferenceTranslator, ReferenceCall};
pub use reference::{HttpReferenceTranslator, ReferenceTranslator};

use std::time::Duration;

/// Builds the shared HTTP client; `timeout` bounds each whole request.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

const ERROR_BODY_PREVIEW: usize = 200;

/// Turns a non-2xx response into a transport error carrying status and a body preview.
pub(crate) async fn status_error(provider: Provider, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();

    if preview.trim().is_empty() {
        ProviderError::transport(provider, format!("HTTP {status}"))
    } else {
        ProviderError::transport(provider, format!("HTTP {status}: {}", preview.trim()))
    }
}
