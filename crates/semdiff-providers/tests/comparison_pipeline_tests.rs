//! End-to-end pipeline tests with the real segmentation engine
//!
//! The embedder is a local table stub with axis vectors so match scores
//! are exact; segmentation runs through the real engine, so these tests
//! cover the full segment-embed-diff chain.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use semdiff_application::ports::providers::{EmbeddingModelPool, EmbeddingProvider};
use semdiff_application::use_cases::{ComparisonRequest, ComparisonService};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::Embedding;
use semdiff_domain::value_objects::model::EmbeddingModelSpec;
use semdiff_providers::embedding::CachedEmbedderPool;
use semdiff_providers::segmentation::SegmentationEngine;

struct TableEmbedder {
    table: HashMap<String, Vec<f32>>,
}

#[async_trait]
impl EmbeddingProvider for TableEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        texts
            .iter()
            .map(|text| {
                self.table
                    .get(text)
                    .cloned()
                    .map(|vector| Embedding::new(vector, "table"))
                    .ok_or_else(|| Error::embedding(format!("no vector for '{text}'")))
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn provider_name(&self) -> &str {
        "table"
    }
}

struct TablePool {
    provider: Arc<TableEmbedder>,
}

impl TablePool {
    fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        let table = entries
            .iter()
            .map(|(text, vector)| ((*text).to_string(), vector.clone()))
            .collect();
        Self {
            provider: Arc::new(TableEmbedder { table }),
        }
    }
}

impl EmbeddingModelPool for TablePool {
    fn acquire(&self, _model: &EmbeddingModelSpec) -> Result<Arc<dyn EmbeddingProvider>> {
        Ok(self.provider.clone())
    }
}

#[tokio::test]
async fn hungry_cat_scenario_with_real_segmentation() {
    // English segmentation keeps terminators, so table keys carry them
    let pool = TablePool::new(&[
        ("The cat sat.", vec![1.0, 0.0, 0.0]),
        ("It was hungry.", vec![0.0, 1.0, 0.0]),
    ]);
    let service = ComparisonService::new(
        Arc::new(SegmentationEngine::new()),
        Arc::new(pool),
    );

    let request = ComparisonRequest {
        text_a: "The cat sat. It was hungry.".to_string(),
        text_b: "The cat sat.".to_string(),
        lang_a: "en".to_string(),
        lang_b: "en".to_string(),
        threshold: Some(0.75),
        model: None,
    };

    let outcome = service.compare(&request).await.unwrap();

    assert_eq!(
        outcome.source_sentences,
        vec!["The cat sat.", "It was hungry."]
    );
    assert_eq!(outcome.target_sentences, vec!["The cat sat."]);
    assert_eq!(outcome.missing.indices, vec![1]);
    assert_eq!(outcome.missing.sentences, vec!["It was hungry."]);
    assert!(outcome.extra.is_empty());
}

#[tokio::test]
async fn identity_comparison_through_the_null_pool() {
    let service = ComparisonService::new(
        Arc::new(SegmentationEngine::new()),
        Arc::new(CachedEmbedderPool::new("null", None, None)),
    );

    let text = "The cat sat. It was hungry. The bowl was empty.";
    let request = ComparisonRequest {
        text_a: text.to_string(),
        text_b: text.to_string(),
        lang_a: "en".to_string(),
        lang_b: "en".to_string(),
        threshold: Some(0.75),
        model: Some("sentence-transformers/LaBSE".to_string()),
    };

    let outcome = service.compare(&request).await.unwrap();
    assert_eq!(outcome.source_sentences.len(), 3);
    assert!(outcome.missing.is_empty());
    assert!(outcome.extra.is_empty());
}
