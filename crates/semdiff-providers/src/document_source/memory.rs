//! In-Memory Document Source
//!
//! Serves pre-seeded articles keyed by `language.title`, the same cache
//! key the production document source uses. Useful for tests and local
//! development without network access.

use async_trait::async_trait;
use dashmap::DashMap;

use semdiff_application::ports::providers::{DocumentSource, SourceDocument};
use semdiff_domain::error::{Error, Result};

/// Document source backed by an in-memory map
#[derive(Default)]
pub struct InMemoryDocumentSource {
    articles: DashMap<String, SourceDocument>,
}

impl InMemoryDocumentSource {
    /// Create an empty document source
    pub fn new() -> Self {
        Self {
            articles: DashMap::new(),
        }
    }

    /// Seed an article under `language.title`
    pub fn insert(&self, title: &str, language: &str, document: SourceDocument) {
        self.articles.insert(cache_key(title, language), document);
    }
}

/// Cache key: `language.title`
fn cache_key(title: &str, language: &str) -> String {
    format!("{language}.{title}")
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn fetch(&self, title: &str, language: &str) -> Result<SourceDocument> {
        self.articles
            .get(&cache_key(title, language))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                Error::invalid_input(format!("article not found: {language}.{title}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_seeded_article() {
        let source = InMemoryDocumentSource::new();
        source.insert(
            "Rust",
            "en",
            SourceDocument {
                text: "Rust is a systems language.".to_string(),
                available_languages: vec!["fr".to_string()],
            },
        );

        let document = source.fetch("Rust", "en").await.unwrap();
        assert_eq!(document.text, "Rust is a systems language.");
        assert!(source.fetch("Rust", "de").await.is_err());
    }
}
