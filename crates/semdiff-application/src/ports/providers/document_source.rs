//! External Document Source Port
//!
//! The comparison pipeline consumes article text it does not fetch
//! itself. This port is the interface boundary to that collaborator:
//! fetch-and-cache semantics (keyed by `language.title`), URL parsing,
//! and upstream encyclopedia APIs are entirely the implementor's
//! responsibility and are out of scope for this repository.

use async_trait::async_trait;

use semdiff_domain::error::Result;

/// An article as supplied by a document source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Full plain text of the article
    pub text: String,
    /// Language codes the article is also available in
    pub available_languages: Vec<String>,
}

/// Document retrieval collaborator
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch an article by title and language code
    ///
    /// Implementations cache by `language.title`; a repeated fetch for
    /// the same key must not hit the upstream source again.
    async fn fetch(&self, title: &str, language: &str) -> Result<SourceDocument>;
}
