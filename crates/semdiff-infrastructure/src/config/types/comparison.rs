//! Comparison defaults

use serde::{Deserialize, Serialize};

use semdiff_domain::constants::{DEFAULT_EMBEDDING_MODEL, DOCUMENT_COMPARE_DEFAULT_THRESHOLD};

/// Comparison defaults applied on the document-compare entry path
///
/// The strict semantic entry path carries its own fallback (0.75); this
/// section intentionally does not unify the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Similarity threshold used when a compare request does not set one
    pub threshold: f32,
    /// Default embedding model selector
    pub model: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            threshold: DOCUMENT_COMPARE_DEFAULT_THRESHOLD,
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}
