//! Configuration
//!
//! Layered configuration for the semdiff service. Sources are merged in
//! order (later overrides earlier): built-in defaults, a `semdiff.toml`
//! file, then `SEMDIFF_*` environment variables.

/// Configuration loader
pub mod loader;
/// Configuration type definitions
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ComparisonConfig, EmbeddingConfig, LoggingConfig, ServerConfig};
