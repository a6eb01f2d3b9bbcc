//! Configuration type definitions
//!
//! One module per configuration section, aggregated by [`AppConfig`].

/// Top-level application configuration
pub mod app;
/// Comparison defaults
pub mod comparison;
/// Embedding backend configuration
pub mod embedding;
/// Logging configuration
pub mod logging;
/// HTTP server configuration
pub mod server;

pub use app::AppConfig;
pub use comparison::ComparisonConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
