//! Comparison Use Case
//!
//! Orchestrates one comparison request end to end: segmentation of both
//! sides, embedding of both sides with a single resolved model, and the
//! diff in both directions. Steps are strictly ordered; there is no
//! internal parallelism within one request.

use std::sync::Arc;

use tracing::{debug, info};

use semdiff_domain::constants::{DEFAULT_EMBEDDING_MODEL, SEMANTIC_COMPARE_DEFAULT_THRESHOLD};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::model::resolve_model;
use semdiff_domain::value_objects::{ComparisonOutcome, Embedding, Sentence};

use crate::domain_services::alignment::sentence_diff;
use crate::ports::providers::{ArticleSegmenter, EmbeddingModelPool, EmbeddingProvider};

/// One comparison request, as handed over by the request boundary
///
/// `threshold` and `model` are optional here because the defaults differ
/// by entry path: the strict semantic path leaves them unset and takes
/// the fallbacks applied in [`ComparisonService::compare`], while the
/// document-compare path fills the configured service default in before
/// calling. Callers are responsible for range-validating any threshold
/// they do set.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    /// Text of the first (source) article
    pub text_a: String,
    /// Text of the second (target) article
    pub text_b: String,
    /// Language code of the first article
    pub lang_a: String,
    /// Language code of the second article
    pub lang_b: String,
    /// Similarity threshold; falls back to 0.75 when unset
    pub threshold: Option<f32>,
    /// Model selector; unknown or unset selectors resolve to the default model
    pub model: Option<String>,
}

/// Bidirectional semantic comparison service
///
/// Holds the segmentation engine and the load-once embedding model pool.
/// The service is read-only after construction and safe to share across
/// concurrent requests.
pub struct ComparisonService {
    segmenter: Arc<dyn ArticleSegmenter>,
    embedders: Arc<dyn EmbeddingModelPool>,
}

impl ComparisonService {
    /// Create a comparison service from its collaborators
    pub fn new(
        segmenter: Arc<dyn ArticleSegmenter>,
        embedders: Arc<dyn EmbeddingModelPool>,
    ) -> Self {
        Self {
            segmenter,
            embedders,
        }
    }

    /// The segmentation engine backing this service
    pub fn segmenter(&self) -> &Arc<dyn ArticleSegmenter> {
        &self.segmenter
    }

    /// Compare two texts and classify unmatched sentences on both sides
    ///
    /// Runs the pipeline in strict order: segment A, segment B, embed A,
    /// embed B, diff A against B ("missing"), diff B against A ("extra").
    /// The outcome carries both full sentence sequences plus both index
    /// sets; it is all-or-nothing, never partial.
    pub async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonOutcome> {
        let threshold = request
            .threshold
            .unwrap_or(SEMANTIC_COMPARE_DEFAULT_THRESHOLD);
        let model = resolve_model(request.model.as_deref().unwrap_or(DEFAULT_EMBEDDING_MODEL));

        debug!(
            model = model.id,
            threshold,
            lang_a = %request.lang_a,
            lang_b = %request.lang_b,
            "starting semantic comparison"
        );

        let source = self.segmenter.segment(&request.text_a, &request.lang_a)?;
        let target = self.segmenter.segment(&request.text_b, &request.lang_b)?;

        let provider = self.embedders.acquire(model)?;
        let source_embeddings = embed_side(provider.as_ref(), &source).await?;
        let target_embeddings = embed_side(provider.as_ref(), &target).await?;

        let missing = sentence_diff(&source, &source_embeddings, &target_embeddings, threshold);
        let extra = sentence_diff(&target, &target_embeddings, &source_embeddings, threshold);

        info!(
            source_sentences = source.len(),
            target_sentences = target.len(),
            missing = missing.len(),
            extra = extra.len(),
            "semantic comparison complete"
        );

        Ok(ComparisonOutcome {
            source_sentences: source.into_iter().map(|s| s.text).collect(),
            target_sentences: target.into_iter().map(|s| s.text).collect(),
            missing,
            extra,
        })
    }
}

/// Embed one side of the comparison, one vector per sentence
async fn embed_side(
    provider: &dyn EmbeddingProvider,
    sentences: &[Sentence],
) -> Result<Vec<Embedding>> {
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let texts: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
    let embeddings = provider.embed_batch(&texts).await?;

    if embeddings.len() != sentences.len() {
        return Err(Error::embedding(format!(
            "expected {} embeddings, provider '{}' returned {}",
            sentences.len(),
            provider.provider_name(),
            embeddings.len()
        )));
    }

    Ok(embeddings)
}
