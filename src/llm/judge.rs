use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::provider::{
    ChatCompletion, ChatMessage, ChatRequest, Provider, ProviderError, ResponseFormat,
};

use super::verdict::{EvaluationVerdict, VerdictCategory};

const JUDGE_SYSTEM_PROMPT: &str = "You are an expert bilingual evaluator tasked with judging the quality of translations. Given a source text, a reference translation, and a candidate translation, your role is to assess how well the candidate translation matches the reference while maintaining accuracy to the source. Your evaluation must be precise, unbiased, and clearly explain your reasoning.";

const REFERENCE_NOT_PROVIDED: &str = "Not provided";

/// One weighted evaluation dimension of the rubric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubricDimension {
    pub title: &'static str,
    pub weight: f32,
    pub questions: &'static [&'static str],
}

/// Rubric dimensions in prompt order. Weights sum to 1.
pub const RUBRIC_DIMENSIONS: [RubricDimension; 4] = [
    RubricDimension {
        title: "ACCURACY (Semantic Equivalence)",
        weight: 0.40,
        questions: &[
            "How well does it match the reference translation?",
            "Are all key concepts and information transferred correctly?",
            "Are there any mistranslations or semantic errors compared to both source and reference?",
        ],
    },
    RubricDimension {
        title: "FLUENCY (Linguistic Quality)",
        weight: 0.25,
        questions: &[
            "Is the grammar completely correct?",
            "Does it read naturally in the target language?",
            "Is the word choice and phrasing idiomatic?",
        ],
    },
    RubricDimension {
        title: "FAITHFULNESS (Style & Tone)",
        weight: 0.20,
        questions: &[
            "Does it maintain the same style as the reference translation?",
            "Are cultural nuances preserved similarly to the reference?",
            "Is the tone consistent with both source and reference?",
        ],
    },
    RubricDimension {
        title: "TECHNICAL QUALITY",
        weight: 0.15,
        questions: &[
            "Completeness: Are there any omissions or additions compared to the reference?",
            "Consistency: Is terminology used consistently with the reference?",
            "Formatting: Are proper nouns, numbers, and special elements handled correctly?",
        ],
    },
];

/// Removes a surrounding ```` ``` ```` fence (with optional language tag) from `content`.
///
/// Input without both an opening and a closing fence is returned trimmed but otherwise as-is.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();

    if trimmed.len() < 6 || !trimmed.starts_with("```") || !trimmed.ends_with("```") {
        return trimmed;
    }

    let inner = &trimmed[3..trimmed.len() - 3];
    let inner = match inner.find('\n') {
        // First line is either empty or a language tag such as `json`.
        Some(newline) if !inner[..newline].contains(|c: char| matches!(c, '{' | '[' | '"')) => {
            &inner[newline + 1..]
        }
        Some(_) => inner,
        None => inner
            .strip_prefix("json")
            .or_else(|| inner.strip_prefix("JSON"))
            .unwrap_or(inner),
    };

    inner.trim()
}

/// Parses judge output into a verdict. Only a `{category, reason}` object is accepted.
pub fn parse_verdict(content: &str) -> Result<EvaluationVerdict, ProviderError> {
    let payload = strip_code_fence(content);
    serde_json::from_str::<EvaluationVerdict>(payload).map_err(|e| ProviderError::Parse {
        provider: Provider::Llm,
        what: "judge response",
        reason: e.to_string(),
    })
}

/// LLM-as-judge comparing a candidate translation against the reference.
#[derive(Clone)]
pub struct TranslationJudge {
    chat: Arc<dyn ChatCompletion>,
}

impl TranslationJudge {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }

    /// Rubric prompt with all three texts, the weighted dimensions and the output contract.
    pub fn build_prompt(
        source_text: &str,
        candidate_text: &str,
        source_lang: &str,
        target_lang: &str,
        reference_text: Option<&str>,
    ) -> String {
        let reference = reference_text
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(REFERENCE_NOT_PROVIDED);

        let mut prompt = format!(
            "You are an expert translation evaluator with deep knowledge of both {source_lang} and {target_lang}.\n\
             Please evaluate the following translation with careful attention to detail.\n\
             \n\
             SOURCE TEXT ({source_lang}):\n\
             {source_text}\n\
             \n\
             REFERENCE TRANSLATION ({target_lang}):\n\
             {reference}\n\
             \n\
             CANDIDATE TRANSLATION ({target_lang}):\n\
             {candidate_text}\n\
             \n\
             Evaluate the candidate translation based on these weighted criteria:\n"
        );

        for (idx, dimension) in RUBRIC_DIMENSIONS.iter().enumerate() {
            let _ = writeln!(
                prompt,
                "\n{}. {} (weight {:.0}%)",
                idx + 1,
                dimension.title,
                dimension.weight * 100.0
            );
            for question in dimension.questions {
                let _ = writeln!(prompt, "- {question}");
            }
        }

        prompt.push_str(
            "\nBased on your evaluation, classify the translation into exactly ONE of these categories:\n",
        );
        for category in VerdictCategory::ALL {
            let _ = writeln!(prompt, "- {}: {}", category.as_str(), category.description());
        }

        prompt.push_str(
            "\nIMPORTANT: Respond ONLY with a JSON object in this exact format:\n\
             {\n\
             \x20   \"category\": \"<category>\",\n\
             \x20   \"reason\": \"<concise explanation focusing on how well the candidate translation matches the reference while maintaining accuracy to the source>\"\n\
             }\n\
             \n\
             Your reason should be clear, specific, and reference actual content from both translations.",
        );

        prompt
    }

    pub fn build_request(
        source_text: &str,
        candidate_text: &str,
        source_lang: &str,
        target_lang: &str,
        reference_text: Option<&str>,
    ) -> ChatRequest {
        let prompt = Self::build_prompt(
            source_text,
            candidate_text,
            source_lang,
            target_lang,
            reference_text,
        );

        ChatRequest::new(vec![
            ChatMessage::system(JUDGE_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_response_format(ResponseFormat::JsonObject)
    }

    /// Asks `model_name` to grade `candidate_text` and parses its verdict strictly.
    #[instrument(skip_all, fields(model = model_name))]
    pub async fn judge(
        &self,
        source_text: &str,
        candidate_text: &str,
        source_lang: &str,
        target_lang: &str,
        model_name: &str,
        reference_text: Option<&str>,
    ) -> Result<EvaluationVerdict, ProviderError> {
        let request = Self::build_request(
            source_text,
            candidate_text,
            source_lang,
            target_lang,
            reference_text,
        );

        let response = self.chat.complete(model_name, &request).await?;
        let content = response.first_content()?;

        match parse_verdict(content) {
            Ok(verdict) => {
                debug!(category = %verdict.category, "Judge verdict parsed");
                Ok(verdict)
            }
            Err(e) => {
                warn!(content_len = content.len(), error = %e, "Judge returned unparseable output");
                Err(e)
            }
        }
    }
}
