//! Embedding backend configuration

use serde::{Deserialize, Serialize};

/// Embedding backend settings
///
/// `provider` names a registered embedding provider; the inference-server
/// provider additionally needs `endpoint`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name ("inference-server" or "null")
    pub provider: String,
    /// Base URL of the inference server
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "inference-server".to_string(),
            endpoint: "http://localhost:8080/v1".to_string(),
            timeout: 30,
        }
    }
}
