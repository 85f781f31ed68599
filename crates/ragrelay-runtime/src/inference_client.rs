//! HTTP client for the inference service.
//!
//! Used by the RAG service. One instance is built at startup and shared by
//! all requests; the underlying `reqwest::Client` pools connections.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use ragrelay_core::ports::{InferenceClient, UpstreamError};
use ragrelay_core::{GenerationRequest, RagSettings};

/// The part of a generation response the RAG service needs.
#[derive(Debug, Deserialize)]
struct GenerationReply {
    #[serde(default)]
    text: Option<String>,
}

/// `InferenceClient` that posts to the inference service's `/generate`.
#[derive(Debug, Clone)]
pub struct HttpInferenceClient {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpInferenceClient {
    /// Create a client for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn from_settings(settings: &RagSettings) -> reqwest::Result<Self> {
        Self::new(
            settings.inference_url.clone(),
            Duration::from_secs(settings.inference_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, UpstreamError> {
        let payload = GenerationRequest {
            prompt: prompt.to_string(),
            max_new_tokens,
            temperature,
        };

        debug!(endpoint = %self.endpoint, max_new_tokens, "Forwarding prompt to inference service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerationReply = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(reply.text.unwrap_or_default())
    }
}
