use std::sync::Arc;

use tracing::{debug, instrument};

use crate::provider::{ChatCompletion, ChatMessage, ChatRequest, ProviderError};

const TRANSLATOR_SYSTEM_PROMPT: &str = "You are an expert bilingual translator. Translate the text accurately while preserving meaning, tone, and cultural nuances. Respond only with the translation.";

/// Produces the candidate translation through a chat model.
#[derive(Clone)]
pub struct LlmTranslator {
    chat: Arc<dyn ChatCompletion>,
}

impl LlmTranslator {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }

    /// Deterministic prompt; `source_text` is embedded verbatim.
    pub fn build_request(source_text: &str, source_lang: &str, target_lang: &str) -> ChatRequest {
        let prompt = format!(
            "You are an expert translator with deep knowledge of both {source_lang} and {target_lang}.\n\
             Please translate the following text from {source_lang} to {target_lang}.\n\
             \n\
             SOURCE TEXT ({source_lang}):\n\
             {source_text}\n\
             \n\
             Provide ONLY the translation in {target_lang}, with no additional comments or explanations."
        );

        ChatRequest::new(vec![
            ChatMessage::system(TRANSLATOR_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
    }

    /// Translates `text` with `model_name`; returns the trimmed first choice.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate_via_model(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        model_name: &str,
    ) -> Result<String, ProviderError> {
        let request = Self::build_request(text, source_lang, target_lang);
        let response = self.chat.complete(model_name, &request).await?;
        let translation = response.first_content()?.trim().to_string();

        debug!(output_len = translation.len(), "Candidate translation received");
        Ok(translation)
    }
}
