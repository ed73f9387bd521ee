//! Transeval library crate (used by the server binary and integration tests).
//!
//! Evaluates a machine translation against a reference: the text goes to a reference
//! translation endpoint, optionally to a chat model as well, and the two outputs are
//! compared by embedding similarity and by an LLM judge with a fixed rubric.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`Evaluator`] - orchestrates one evaluation; never returns an `Err`
//! - [`TranslationRequest`], [`LineBatch`], [`ReferenceTranslation`]
//! - [`EvaluationResult`], [`EvaluationReport`], [`Envelope`] - outcome and its wire form
//!
//! ## Clients
//! - [`ReferenceTranslator`] / [`HttpReferenceTranslator`] - reference endpoint
//! - [`ChatCompletion`] / [`HttpChatClient`] - chat-completion endpoint
//! - [`LlmTranslator`], [`TranslationJudge`] - prompts and strict verdict parsing
//!
//! ## Embedding & Scoring
//! - [`SentenceEmbedder`], [`EmbedderConfig`], [`shared_embedder`] - sentence embeddings
//! - [`SimilarityScorer`], [`cosine_similarity`] - cosine similarity of two texts
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod llm;
pub mod pipeline;
pub mod provider;
pub mod scoring;

pub use config::{Catalog, CatalogEntry, Config, ConfigError};
pub use constants::{
    DEFAULT_HTTP_TIMEOUT, DEFAULT_HTTP_TIMEOUT_SECS, TRANSEVAL_STATUS_HEADER, TRANSEVAL_STATUS_OK,
    TRANSEVAL_STATUS_READY,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    EMBEDDING_DIM, EmbedderConfig, EmbeddingError, MAX_SEQ_LEN, SentenceEmbedder, TextEmbedder,
    shared_embedder,
};
pub use gateway::{AppState, GatewayError, create_router};
pub use llm::{EvaluationVerdict, LlmTranslator, TranslationJudge, VerdictCategory};
pub use pipeline::{
    Envelope, EvaluationReport, EvaluationResult, Evaluator, FailureKind, LineBatch,
    PipelineError, ReferenceTranslation, TranslationRequest,
};
#[cfg(any(test, feature = "mock"))]
pub use provider::{MockChatClient, MockReferenceTranslator, ReferenceCall};
pub use provider::{
    ChatCompletion, HttpChatClient, HttpReferenceTranslator, Provider, ProviderError,
    ReferenceTranslator, build_http_client,
};
pub use scoring::{ScoringError, SimilarityBand, SimilarityScorer, clamp_unit, cosine_similarity};
