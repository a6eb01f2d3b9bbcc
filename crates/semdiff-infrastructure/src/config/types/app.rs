//! Top-level application configuration

use serde::{Deserialize, Serialize};

use super::comparison::ComparisonConfig;
use super::embedding::EmbeddingConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Complete configuration for the semdiff service
///
/// Every section has working defaults; a configuration file and
/// environment variables are optional overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Embedding backend settings
    pub embedding: EmbeddingConfig,
    /// Comparison defaults
    pub comparison: ComparisonConfig,
}
