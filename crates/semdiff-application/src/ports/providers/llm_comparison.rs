//! LLM Comparator Port
//!
//! Interface boundary to the alternative, non-embedding comparison path.
//! The LLM path is an independent collaborator; this repository neither
//! implements nor routes to it.

use async_trait::async_trait;

use semdiff_domain::error::Result;

/// Result of an LLM-based comparison of two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmComparison {
    /// Information present in the first text but absent from the second
    pub missing_info: Vec<String>,
    /// Information present in the second text but absent from the first
    pub extra_info: Vec<String>,
}

/// LLM-based comparison collaborator
#[async_trait]
pub trait LlmComparator: Send + Sync {
    /// Compare two texts and describe missing and extra information
    async fn compare(&self, text_a: &str, text_b: &str) -> Result<LlmComparison>;
}
