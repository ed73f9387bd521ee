use thiserror::Error;

/// Which upstream API a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Reference-translation endpoint.
    Translation,
    /// Chat-completion endpoint (translation and judging).
    Llm,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Translation => f.write_str("Translation API"),
            Provider::Llm => f.write_str("LLM API"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection failure, timeout, non-2xx status or an undecodable body.
    #[error("{provider} error: {message}")]
    Transport { provider: Provider, message: String },

    /// A 2xx JSON body with missing or mistyped fields.
    #[error("Invalid response format from {provider}: {reason}")]
    Shape { provider: Provider, reason: String },

    /// Model output that had to be JSON but was not.
    #[error("Failed to parse {what} as JSON ({provider}): {reason}")]
    Parse {
        provider: Provider,
        what: &'static str,
        reason: String,
    },
}

impl ProviderError {
    pub fn transport(provider: Provider, message: impl Into<String>) -> Self {
        ProviderError::Transport {
            provider,
            message: message.into(),
        }
    }

    pub fn shape(provider: Provider, reason: impl Into<String>) -> Self {
        ProviderError::Shape {
            provider,
            reason: reason.into(),
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Shape { provider, .. }
            | ProviderError::Parse { provider, .. } => *provider,
        }
    }

    pub(crate) fn from_reqwest(provider: Provider, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        ProviderError::Transport { provider, message }
    }
}
