//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TRANSEVAL_*` environment variables.
//! The two provider base URLs have no sensible default and must be set.

pub mod catalog;
pub mod error;


pub use catalog::{Catalog, CatalogEntry};
pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_HTTP_TIMEOUT;

/// Server and provider configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TRANSEVAL_*` overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Default reference-translation endpoint (full URL, used verbatim).
    pub translation_url: String,

    /// Value of the `Authorization` header sent to the translation endpoint.
    pub translation_api_key: Option<String>,

    /// Chat-completion base URL; requests go to `{base}/{model}/chat/completions`.
    pub llm_base_url: String,

    /// Value of the `api-key` header sent to the chat-completion endpoint.
    pub llm_api_key: Option<String>,

    /// Bound applied to every outbound call. Default: 60 seconds.
    pub http_timeout: Duration,

    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`
    /// for the sentence embedder. `None` runs the embedder in stub mode.
    pub embedding_model_path: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("translation_url", &self.translation_url)
            .field("translation_api_key", &redact(&self.translation_api_key))
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("http_timeout", &self.http_timeout)
            .field("embedding_model_path", &self.embedding_model_path)
            .finish()
    }
}

fn redact(key: &Option<String>) -> &'static str {
    if key.is_some() { "<redacted>" } else { "<none>" }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            translation_url: String::new(),
            translation_api_key: None,
            llm_base_url: String::new(),
            llm_api_key: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            embedding_model_path: None,
        }
    }
}

impl Config {
    pub(crate) const ENV_PORT: &'static str = "TRANSEVAL_PORT";
    pub(crate) const ENV_BIND_ADDR: &'static str = "TRANSEVAL_BIND_ADDR";
    pub(crate) const ENV_TRANSLATION_URL: &'static str = "TRANSEVAL_TRANSLATION_URL";
    pub(crate) const ENV_TRANSLATION_API_KEY: &'static str = "TRANSEVAL_TRANSLATION_API_KEY";
    pub(crate) const ENV_LLM_BASE_URL: &'static str = "TRANSEVAL_LLM_BASE_URL";
    pub(crate) const ENV_LLM_API_KEY: &'static str = "TRANSEVAL_LLM_API_KEY";
    pub(crate) const ENV_HTTP_TIMEOUT_SECS: &'static str = "TRANSEVAL_HTTP_TIMEOUT_SECS";
    pub(crate) const ENV_EMBEDDING_MODEL_PATH: &'static str = "TRANSEVAL_EMBEDDING_MODEL_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let translation_url = Self::parse_required_string_from_env(Self::ENV_TRANSLATION_URL)?;
        let translation_api_key = Self::parse_optional_string_from_env(Self::ENV_TRANSLATION_API_KEY);
        let llm_base_url = Self::parse_required_string_from_env(Self::ENV_LLM_BASE_URL)?;
        let llm_api_key = Self::parse_optional_string_from_env(Self::ENV_LLM_API_KEY);
        let http_timeout = Self::parse_timeout_from_env(defaults.http_timeout)?;
        let embedding_model_path =
            Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_MODEL_PATH).map(PathBuf::from);

        Ok(Self {
            port,
            bind_addr,
            translation_url,
            translation_api_key,
            llm_base_url,
            llm_api_key,
            http_timeout,
            embedding_model_path,
        })
    }

    /// Validates URLs, timeout and the model directory (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url(Self::ENV_TRANSLATION_URL, &self.translation_url)?;
        check_http_url(Self::ENV_LLM_BASE_URL, &self.llm_base_url)?;

        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: format!("{:?}", self.http_timeout),
            });
        }

        if let Some(ref path) = self.embedding_model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_HTTP_TIMEOUT_SECS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_required_string_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        Self::parse_optional_string_from_env(var_name)
            .ok_or(ConfigError::MissingEnvVar { name: var_name })
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

fn check_http_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingEnvVar { name });
    }

    let url = reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
