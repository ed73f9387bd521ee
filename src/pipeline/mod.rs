//! The evaluation pipeline: request validation, reference translation, optional LLM
//! translation, similarity and judging, folded into one [`EvaluationResult`].
//!
//! # Flow
//!
//! 1. [`TranslationRequest::validate`] rejects bad input before any network call.
//! 2. The text is split into a [`LineBatch`] and sent to the reference endpoint.
//! 3. The body is classified as a [`ReferenceTranslation`] and normalized to one string.
//! 4. With evaluation on, the original text goes to the chat model, the two translations
//!    are scored, and the judge grades the candidate against the reference.
//!
//! A failing stage stops the run; the caller sees either a complete report or one error.

pub mod error;
pub mod evaluator;
pub mod reference;
pub mod request;
pub mod result;


pub use error::{FailureKind, PipelineError};
pub use evaluator::Evaluator;
pub use reference::ReferenceTranslation;
pub use request::{LineBatch, TranslationRequest};
pub use result::{Envelope, EvaluationReport, EvaluationResult};
