//! Inference-Server Embedding Provider
//!
//! Implements the EmbeddingProvider port against an OpenAI-compatible
//! `/embeddings` HTTP route, as exposed by text-embeddings-inference,
//! vLLM, LocalAI and similar self-hosted servers that host the catalog
//! models.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use semdiff_application::ports::providers::EmbeddingProvider;
use semdiff_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::Embedding;
use semdiff_domain::value_objects::model::resolve_model;

/// Default request timeout against the inference server
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Embedding provider backed by a self-hosted inference server
///
/// One instance serves exactly one catalog model; the request payload
/// names the model so a single server can host the whole catalog. The
/// provider holds no mutable state and is shared read-only across
/// requests once loaded into the pool.
pub struct InferenceServerProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl InferenceServerProvider {
    /// Create a new inference-server provider
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g. "http://localhost:8080/v1")
    /// * `model` - Catalog model identifier this instance serves
    /// * `dimensions` - Expected vector dimensionality for the model
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Get the model identifier this provider serves
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the embedding request and parse the JSON body
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!(
                "{}/embeddings",
                self.base_url.trim_end_matches('/')
            ))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                // The server (and therefore the model weights) cannot be
                // reached; surfaced as ModelUnavailable so the caller can
                // decide whether to retry or abort.
                if e.is_timeout() {
                    Error::model_unavailable(
                        &self.model,
                        format!("inference server timed out after {:?}", self.timeout),
                    )
                } else {
                    Error::model_unavailable(
                        &self.model,
                        format!("inference server unreachable: {e}"),
                    )
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "inference server returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("invalid response payload: {e}")))
    }

    /// Parse one embedding vector from the response data array
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let vector = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding(format!("invalid embedding format for text {index}")))?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect::<Vec<f32>>();

        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions: self.dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for InferenceServerProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("invalid response format: missing data array"))?;

        if data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        let embeddings = data
            .iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect::<Result<Vec<Embedding>>>()?;

        // Dimensionality must be uniform across one invocation
        if let Some(first) = embeddings.first() {
            let dims = first.vector.len();
            if embeddings.iter().any(|e| e.vector.len() != dims) {
                return Err(Error::embedding(
                    "inference server returned vectors of mixed dimensionality",
                ));
            }
        }

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "inference-server"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating inference-server provider instances
fn inference_server_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let endpoint = config
        .endpoint
        .clone()
        .ok_or_else(|| "inference-server provider requires an endpoint".to_string())?;
    let spec = resolve_model(config.model.as_deref().unwrap_or_default());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("failed to build HTTP client: {e}"))?;

    Ok(Arc::new(InferenceServerProvider::new(
        endpoint,
        spec.id.to_string(),
        config.dimensions.unwrap_or(spec.dimensions),
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static INFERENCE_SERVER_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "inference-server",
    description: "OpenAI-compatible /embeddings route (text-embeddings-inference, vLLM, ...)",
    factory: inference_server_factory,
};
