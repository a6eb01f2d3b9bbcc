//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the semdiff service
///
/// The variants follow the failure taxonomy of the comparison pipeline:
/// client mistakes (`InvalidInput`, `UnknownModel`), missing runtime
/// resources (`ResourceUnavailable`, `ModelUnavailable`), provider
/// failures (`Embedding`, `Segmentation`), and cross-cutting concerns
/// (`Configuration`, `Io`, `Json`, `Internal`).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input supplied by a caller (missing text, out-of-range threshold)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was invalid
        message: String,
    },

    /// Model selector rejected at the strict request boundary
    #[error("Invalid model selected. {model} does not exist.")]
    UnknownModel {
        /// The selector that did not match the catalog
        model: String,
    },

    /// A linguistic resource for a declared-supported language is missing
    ///
    /// Raised instead of silently falling back to the universal splitter,
    /// so behavior for a supported language is consistent across requests.
    #[error("Resource unavailable: {resource}: {message}")]
    ResourceUnavailable {
        /// The resource that could not be provisioned
        resource: String,
        /// Description of the failure
        message: String,
    },

    /// An embedding model could not be loaded or reached
    #[error("Embedding model unavailable: {model}: {message}")]
    ModelUnavailable {
        /// Model identifier that failed to load
        model: String,
        /// Description of the failure
        message: String,
    },

    /// Embedding provider operation error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// Sentence segmentation error
    #[error("Segmentation error: {message}")]
    Segmentation {
        /// Description of the segmentation error
        message: String,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown model error
    pub fn unknown_model<S: Into<String>>(model: S) -> Self {
        Self::UnknownModel {
            model: model.into(),
        }
    }

    /// Create a resource unavailable error
    pub fn resource_unavailable<R: Into<String>, S: Into<String>>(resource: R, message: S) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a model unavailable error
    pub fn model_unavailable<M: Into<String>, S: Into<String>>(model: M, message: S) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a segmentation error
    pub fn segmentation<S: Into<String>>(message: S) -> Self {
        Self::Segmentation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error was caused by the caller's request
    ///
    /// Client errors must never be retried by the service; they are
    /// surfaced to the caller unchanged.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnknownModel { .. }
        )
    }
}
