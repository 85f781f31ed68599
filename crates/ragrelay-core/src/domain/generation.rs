//! Generation request and response types for the inference service.
//!
//! `GenerationRequest` is also the wire body the RAG service sends to the
//! inference service, so its serialized form is the contract between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, Validate, ValidationError};

/// Default number of new tokens when the request omits `max_new_tokens`.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 200;

/// Upper bound (inclusive) for `max_new_tokens`.
pub const MAX_NEW_TOKENS_LIMIT: u32 = 512;

/// Default sampling temperature when the request omits `temperature`.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Upper bound (inclusive) for `temperature`.
pub const MAX_TEMPERATURE: f32 = 2.0;

const fn default_max_new_tokens() -> u32 {
    DEFAULT_MAX_NEW_TOKENS
}

const fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt to send to the model. Must not be empty.
    pub prompt: String,

    /// Number of tokens to generate, 1-512.
    #[serde(default = "default_max_new_tokens", alias = "maxNewTokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature, 0.0-2.0. Zero means greedy decoding.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl GenerationRequest {
    /// Create a request with default token budget and temperature.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub const fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Collect field errors for the shared generation parameters.
    ///
    /// Chat and reason requests reuse this so all three endpoints agree on
    /// the bounds.
    pub(crate) fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.prompt.is_empty() {
            errors.push(FieldError::too_short("prompt", 1));
        }

        if !(1..=MAX_NEW_TOKENS_LIMIT).contains(&self.max_new_tokens) {
            errors.push(FieldError::out_of_range(
                "max_new_tokens",
                1,
                MAX_NEW_TOKENS_LIMIT,
            ));
        }

        // NaN fails the range check as well
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            errors.push(FieldError::out_of_range("temperature", 0.0, MAX_TEMPERATURE));
        }

        errors
    }
}

impl Validate for GenerationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::from_fields(self.field_errors())
    }
}

/// Operating mode of a model client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelMode {
    /// Deterministic echo backend, no external dependency.
    Mock,
    /// A real model served by a llama-server child process.
    Real,
}

impl ModelMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Real => "real",
        }
    }
}

impl fmt::Display for ModelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "real" => Ok(Self::Real),
            other => Err(format!(
                "unknown model mode '{other}' (expected 'mock' or 'real')"
            )),
        }
    }
}

/// Body returned by `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text.
    pub text: String,
    /// Identifier of the model that produced the text.
    pub model: String,
    /// Mode of the model client.
    pub mode: ModelMode,
}
