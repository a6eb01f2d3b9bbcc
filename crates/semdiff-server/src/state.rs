//! Shared Request State
//!
//! The state handed to every request handler: the comparison service,
//! the language-validity cache, and the configured defaults for the
//! document-compare path.

use std::sync::Arc;

use semdiff_application::ports::providers::{ArticleSegmenter, EmbeddingModelPool};
use semdiff_application::use_cases::ComparisonService;
use semdiff_infrastructure::cache::LanguageValidityCache;
use semdiff_infrastructure::config::AppConfig;
use semdiff_providers::embedding::CachedEmbedderPool;
use semdiff_providers::segmentation::SegmentationEngine;

/// State shared across request handlers
pub struct AppState {
    /// The comparison pipeline
    pub service: Arc<ComparisonService>,
    /// Append-only language-validity cache, owned by this service layer
    pub languages: Arc<LanguageValidityCache>,
    /// Default threshold for the document-compare path
    pub default_threshold: f32,
    /// Default model selector for the document-compare path
    pub default_model: String,
}

impl AppState {
    /// Wire the full pipeline from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let segmenter: Arc<dyn ArticleSegmenter> = Arc::new(SegmentationEngine::new());
        let embedders: Arc<dyn EmbeddingModelPool> = Arc::new(CachedEmbedderPool::new(
            config.embedding.provider.clone(),
            Some(config.embedding.endpoint.clone()),
            Some(config.embedding.timeout),
        ));

        Self {
            service: Arc::new(ComparisonService::new(segmenter, embedders)),
            languages: Arc::new(LanguageValidityCache::new()),
            default_threshold: config.comparison.threshold,
            default_model: config.comparison.model.clone(),
        }
    }
}
