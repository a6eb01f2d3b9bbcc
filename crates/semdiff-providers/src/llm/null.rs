//! Null LLM Comparator
//!
//! Reports no differences for any input pair. Stands in for the external
//! LLM comparison collaborator in tests.

use async_trait::async_trait;

use semdiff_application::ports::providers::{LlmComparator, LlmComparison};
use semdiff_domain::error::Result;

/// LLM comparator stub that always reports no differences
#[derive(Default)]
pub struct NullLlmComparator;

impl NullLlmComparator {
    /// Create a new null comparator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmComparator for NullLlmComparator {
    async fn compare(&self, _text_a: &str, _text_b: &str) -> Result<LlmComparison> {
        Ok(LlmComparison::default())
    }
}
