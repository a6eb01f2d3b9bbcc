//! # Semdiff Server
//!
//! HTTP boundary for the cross-lingual semantic diff service. Exposes
//! the comparison pipeline under `/semdiff/v1` plus service metadata at
//! the root, validates requests before they reach the core, and maps
//! domain errors to HTTP statuses.
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/` | GET | Service info |
//! | `/health` | GET | Health check |
//! | `/semdiff/v1/articles/compare` | POST | Document comparison (lenient defaults) |
//! | `/semdiff/v1/comparison/semantic` | GET | Semantic comparison (strict validation) |
//! | `/semdiff/v1/comparison/semantic` | POST | Semantic comparison, JSON body (strict validation) |
//!
//! The two comparison paths carry different default thresholds (0.65 on
//! the document path via configuration, 0.75 on the semantic path); the
//! divergence is observed behavior and intentionally not unified.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use semdiff_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Run with defaults ("semdiff.toml" + SEMDIFF_* environment)
//!     run(None).await?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use tracing::info;

use semdiff_infrastructure::config::ConfigLoader;
use semdiff_infrastructure::logging::init_logging;

/// Domain error re-export for handler signatures
pub use semdiff_domain::error::{Error, Result};

/// Error-to-HTTP mapping
pub mod error;
/// Request handlers
pub mod handlers;
/// Request and response models
pub mod models;
/// Route assembly
pub mod routes;
/// Shared request state
pub mod state;

pub use routes::semdiff_rocket;
pub use state::AppState;

/// Load configuration, initialize logging, and serve until shutdown
pub async fn run(config_path: Option<&Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    init_logging(&config.logging)?;

    let state = AppState::from_config(&config);

    let rocket_config = rocket::Config {
        address: config.server.address.parse()?,
        port: config.server.port,
        ..rocket::Config::default()
    };

    info!(
        address = %config.server.address,
        port = config.server.port,
        "starting semdiff server"
    );

    let _ = semdiff_rocket(state).configure(rocket_config).launch().await?;

    Ok(())
}
