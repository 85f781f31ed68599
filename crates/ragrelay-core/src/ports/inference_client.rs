//! Inference client port: the RAG service's view of the inference service.

use async_trait::async_trait;
use thiserror::Error;

/// Failures of the outbound call to the inference service.
///
/// The RAG service logs these and answers its own caller with a generic
/// message; the detail never leaves the process.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure or timeout.
    #[error("Inference request failed: {0}")]
    Transport(String),

    /// The inference service answered with a non-success status.
    #[error("Inference service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Invalid inference response: {0}")]
    Decode(String),
}

/// Port for calling the inference service.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generate text for an already-assembled prompt. Single attempt.
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, UpstreamError>;
}
