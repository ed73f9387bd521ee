//! LLM-backed stages: candidate translation and judged comparison.
//!
//! Both stages talk to the same [`ChatCompletion`](crate::provider::ChatCompletion)
//! endpoint. The judge asks for JSON output and parses it strictly; anything that is not a
//! `{category, reason}` object with a known category is an error, never a guess.

pub mod judge;
pub mod translator;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use judge::{
    RUBRIC_DIMENSIONS, RubricDimension, TranslationJudge, parse_verdict, strip_code_fence,
};
pub use translator::LlmTranslator;
pub use verdict::{EvaluationVerdict, VerdictCategory};
