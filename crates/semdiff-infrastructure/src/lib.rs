//! # Semdiff Infrastructure Layer
//!
//! Cross-cutting concerns for the semdiff service: typed configuration
//! with layered loading, structured logging initialization, and the
//! process-wide language-validity cache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, `semdiff.toml`, `SEMDIFF_*` env) |
//! | [`logging`] | Tracing subscriber setup |
//! | [`cache`] | Append-only language-validity cache |

/// Configuration loading and types
pub mod config;

/// Structured logging with tracing
pub mod logging;

/// Service-owned caches
pub mod cache;

pub use cache::LanguageValidityCache;
pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;
