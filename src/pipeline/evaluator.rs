use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::{Catalog, Config};
use crate::embedding::TextEmbedder;
use crate::llm::{LlmTranslator, TranslationJudge};
use crate::provider::{
    ChatCompletion, HttpChatClient, HttpReferenceTranslator, ReferenceTranslator,
    build_http_client,
};
use crate::scoring::{ScoringError, SimilarityBand, SimilarityScorer};

use super::error::PipelineError;
use super::reference::ReferenceTranslation;
use super::request::{LineBatch, TranslationRequest};
use super::result::{EvaluationReport, EvaluationResult};

/// Sequences reference translation, candidate translation, similarity and judging.
///
/// Holds no per-request state; one instance serves any number of concurrent calls.
#[derive(Clone)]
pub struct Evaluator {
    reference: Arc<dyn ReferenceTranslator>,
    translator: LlmTranslator,
    judge: TranslationJudge,
    scorer: SimilarityScorer,
    catalog: Catalog,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("scorer", &self.scorer)
            .field("languages", &self.catalog.languages().len())
            .finish_non_exhaustive()
    }
}

impl Evaluator {
    pub fn new(
        reference: Arc<dyn ReferenceTranslator>,
        chat: Arc<dyn ChatCompletion>,
        scorer: SimilarityScorer,
    ) -> Self {
        Self {
            reference,
            translator: LlmTranslator::new(chat.clone()),
            judge: TranslationJudge::new(chat),
            scorer,
            catalog: Catalog::default(),
        }
    }

    /// Wires the HTTP clients described by `config` around `embedder`.
    ///
    /// Both clients share one connection pool and the configured timeout.
    pub fn from_config(
        config: &Config,
        embedder: Arc<dyn TextEmbedder>,
    ) -> Result<Self, reqwest::Error> {
        let http = build_http_client(config.http_timeout)?;

        let reference = HttpReferenceTranslator::new(
            http.clone(),
            config.translation_url.clone(),
            config.translation_api_key.clone(),
        );
        let chat = HttpChatClient::new(
            http,
            config.llm_base_url.clone(),
            config.llm_api_key.clone(),
        );

        Ok(Self::new(
            Arc::new(reference),
            Arc::new(chat),
            SimilarityScorer::new(embedder),
        ))
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Runs the pipeline. Every failure is folded into [`EvaluationResult::Failure`].
    pub async fn evaluate(&self, request: &TranslationRequest) -> EvaluationResult {
        let span = info_span!(
            "evaluate",
            request_id = %uuid::Uuid::new_v4(),
            source = %request.source_language,
            target = %request.target_language,
            evaluate = request.evaluate,
        );

        let result = self.run(request).instrument(span.clone()).await;
        if let Err(e) = &result {
            span.in_scope(|| warn!(kind = %e.kind(), error = %e, "Evaluation failed"));
        }
        result.into()
    }

    async fn run(&self, request: &TranslationRequest) -> Result<EvaluationReport, PipelineError> {
        request.validate()?;

        let batch = LineBatch::from_text(&request.text);
        if batch.is_empty() {
            return Err(PipelineError::validation("text has no non-blank lines"));
        }
        debug!(lines = batch.len(), "Requesting reference translation");

        let raw = self
            .reference
            .translate(
                &batch,
                &request.source_language,
                &request.target_language,
                request.endpoint_override.as_deref(),
            )
            .await?;
        let reference = ReferenceTranslation::from_response(&raw)?.normalize();

        let Some(model) = request.evaluation_model() else {
            info!(reference_len = reference.len(), "Reference translation complete");
            return Ok(EvaluationReport::reference_only(reference, raw));
        };

        let source_name = self.catalog.language_name(&request.source_language);
        let target_name = self.catalog.language_name(&request.target_language);

        let candidate = self
            .translator
            .translate_via_model(&request.text, source_name, target_name, model)
            .await?;

        let score = self.similarity(&reference, &candidate).await?;
        debug!(score, band = %SimilarityBand::from_score(score), "Similarity computed");

        let verdict = self
            .judge
            .judge(
                &request.text,
                &candidate,
                source_name,
                target_name,
                model,
                Some(reference.as_str()),
            )
            .await?;

        info!(
            model,
            category = %verdict.category,
            score,
            "Evaluation complete"
        );

        Ok(EvaluationReport {
            reference_translation: reference,
            openai_translation: Some(candidate),
            similarity_score: Some(score),
            evaluation: Some(verdict),
            raw_response: Some(raw),
        })
    }

    // Inference is CPU-bound; keep it off the async workers.
    async fn similarity(&self, reference: &str, candidate: &str) -> Result<f32, ScoringError> {
        let scorer = self.scorer.clone();
        let reference = reference.to_string();
        let candidate = candidate.to_string();

        tokio::task::spawn_blocking(move || scorer.similarity(&reference, &candidate))
            .await
            .map_err(|e| ScoringError::ComputationFailed {
                reason: format!("similarity task failed: {e}"),
            })?
    }
}
