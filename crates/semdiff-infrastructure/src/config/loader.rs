//! Configuration loader
//!
//! Loads configuration from defaults, an optional TOML file, and
//! `SEMDIFF_*` environment variables, then validates the result.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{info, warn};

use semdiff_domain::constants::{SIMILARITY_THRESHOLD_MAX, SIMILARITY_THRESHOLD_MIN};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::model::is_cataloged;

use crate::config::AppConfig;
use crate::logging::parse_log_level;

/// Environment variable prefix for configuration overrides
const CONFIG_ENV_PREFIX: &str = "SEMDIFF";

/// Default configuration file name, looked up in the working directory
const CONFIG_DEFAULT_FILE: &str = "semdiff.toml";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later overrides earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if present)
    /// 3. Environment variables with prefix (e.g. `SEMDIFF_SERVER_PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DEFAULT_FILE));
        if config_path.exists() {
            figment = figment.merge(Toml::file(&config_path));
            info!("Configuration loaded from {}", config_path.display());
        } else if self.config_path.is_some() {
            warn!("Configuration file not found: {}", config_path.display());
        }

        // Nested keys use underscore separation (SEMDIFF_SERVER_PORT)
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("_"));

        let app_config: AppConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validate a loaded configuration
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        parse_log_level(&config.logging.level)?;

        let threshold = config.comparison.threshold;
        if !(SIMILARITY_THRESHOLD_MIN..=SIMILARITY_THRESHOLD_MAX).contains(&threshold) {
            return Err(Error::configuration(format!(
                "comparison.threshold must lie in [{SIMILARITY_THRESHOLD_MIN}, {SIMILARITY_THRESHOLD_MAX}], got {threshold}"
            )));
        }

        if config.embedding.provider.is_empty() {
            return Err(Error::configuration("embedding.provider must not be empty"));
        }

        // A non-cataloged default model is tolerated (the catalog default
        // takes over at resolution time) but worth flagging early.
        if !is_cataloged(&config.comparison.model) {
            warn!(
                model = %config.comparison.model,
                "configured default model is not in the catalog; the catalog default will be used"
            );
        }

        Ok(())
    }
}
