//! Model client port for the inference service.
//!
//! A model client wraps one text-generation backend. Exactly one instance is
//! built at startup and shared by every request, so implementations must be
//! safe to call concurrently.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ModelMode;

/// Errors raised while constructing a model client.
///
/// These are deploy-time failures: the service must not start serving when
/// one occurs, and retrying the same configuration will not help.
#[derive(Debug, Error)]
pub enum ModelConstructionError {
    /// A runtime dependency of the backend is missing (binary, library, ...).
    #[error("Model backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The configuration cannot produce a working client.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The backend started but the model never became ready.
    #[error("Failed to load model: {0}")]
    LoadFailed(String),
}

/// Errors raised by a single `generate` call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The backend could not be reached or timed out.
    #[error("Model backend request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Model backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered with a body that could not be decoded.
    #[error("Invalid model backend response: {0}")]
    Decode(String),
}

/// Port for text generation.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Operating mode, reported in every generation response.
    fn mode(&self) -> ModelMode;

    /// Identifier of the loaded model, reported in every generation response.
    fn model_name(&self) -> &str;

    /// Generate a continuation of `prompt`.
    ///
    /// `temperature == 0.0` requests greedy decoding.
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, GenerationError>;
}
