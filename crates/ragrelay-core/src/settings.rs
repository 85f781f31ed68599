//! Settings domain types and validation.
//!
//! Settings are resolved once at process start (by the CLI) and handed to
//! the composition root. These are pure domain types with no knowledge of
//! where the values came from.

use std::path::PathBuf;

use crate::domain::ModelMode;

/// Default listen port of the inference service.
pub const DEFAULT_INFERENCE_PORT: u16 = 8000;

/// Default listen port of the RAG service.
pub const DEFAULT_RAG_PORT: u16 = 8001;

/// Default endpoint the RAG service posts generation requests to.
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:8000/generate";

/// Default timeout, in seconds, for the RAG -> inference call.
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 30;

/// Default number of chunks a retriever may return.
pub const DEFAULT_TOP_K: usize = 3;

/// Default time, in seconds, a real model may take to become ready.
pub const DEFAULT_MODEL_LOAD_TIMEOUT_SECS: u64 = 120;

/// Model client selection for the inference service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    /// Which model client variant to build.
    pub mode: ModelMode,

    /// Model identifier: a local GGUF path or a Hugging Face repo.
    /// Only used in real mode, where it is required.
    pub model_name: Option<String>,

    /// Explicit llama-server binary. `None` searches `PATH`.
    pub llama_server_path: Option<PathBuf>,

    /// Seconds to wait for a real model to pass its health check.
    pub load_timeout_secs: u64,
}

impl ModelSettings {
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            mode: ModelMode::Mock,
            model_name: None,
            llama_server_path: None,
            load_timeout_secs: DEFAULT_MODEL_LOAD_TIMEOUT_SECS,
        }
    }

    /// Settings for a real model with default timeouts.
    pub fn real(model_name: impl Into<String>) -> Self {
        Self {
            mode: ModelMode::Real,
            model_name: Some(model_name.into()),
            ..Self::with_defaults()
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Outbound and retrieval settings for the RAG service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagSettings {
    /// Full URL of the inference service's generate endpoint.
    pub inference_url: String,

    /// Timeout, in seconds, for one inference call.
    pub inference_timeout_secs: u64,

    /// Maximum chunks the retriever returns.
    pub top_k: usize,
}

impl RagSettings {
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            inference_timeout_secs: DEFAULT_INFERENCE_TIMEOUT_SECS,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Default for RagSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("MODEL_NAME must be set when MODEL_MODE=real")]
    MissingModelName,

    #[error("Model load timeout must be at least 1 second")]
    InvalidLoadTimeout,

    #[error("Inference URL must start with http:// or https://, got '{0}'")]
    InvalidInferenceUrl(String),

    #[error("Inference timeout must be at least 1 second")]
    InvalidInferenceTimeout,

    #[error("Retriever top-k must be at least 1")]
    InvalidTopK,
}

/// Validate model settings.
pub fn validate_model_settings(settings: &ModelSettings) -> Result<(), SettingsError> {
    if settings.mode == ModelMode::Real
        && settings
            .model_name
            .as_ref()
            .is_none_or(|name| name.trim().is_empty())
    {
        return Err(SettingsError::MissingModelName);
    }

    if settings.load_timeout_secs == 0 {
        return Err(SettingsError::InvalidLoadTimeout);
    }

    Ok(())
}

/// Validate RAG settings.
pub fn validate_rag_settings(settings: &RagSettings) -> Result<(), SettingsError> {
    let url = settings.inference_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SettingsError::InvalidInferenceUrl(
            settings.inference_url.clone(),
        ));
    }

    if settings.inference_timeout_secs == 0 {
        return Err(SettingsError::InvalidInferenceTimeout);
    }

    if settings.top_k == 0 {
        return Err(SettingsError::InvalidTopK);
    }

    Ok(())
}
