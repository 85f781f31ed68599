//! Chat and reason request/response types for the RAG service.

use serde::{Deserialize, Serialize};

use super::generation::GenerationRequest;
use crate::validation::{FieldError, Validate, ValidationError};

/// Provenance tag attached to every RAG response.
pub const INFERENCE_SOURCE: &str = "inference";

/// Upper bound (inclusive) for the reasoning depth hint.
pub const MAX_REASON_DEPTH: u32 = 5;

/// Body of `POST /chat`. Same fields as a generation request.
pub type ChatRequest = GenerationRequest;

/// Body of `POST /reason`.
///
/// `depth` is a hint echoed back to the caller; it does not change
/// retrieval or generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonRequest {
    #[serde(flatten)]
    pub chat: ChatRequest,

    /// Reasoning depth hint, 1-5.
    #[serde(default)]
    pub depth: Option<u32>,
}

impl ReasonRequest {
    pub fn new(prompt: impl Into<String>, depth: Option<u32>) -> Self {
        Self {
            chat: ChatRequest::new(prompt),
            depth,
        }
    }
}

impl Validate for ReasonRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = self.chat.field_errors();
        if let Some(depth) = self.depth {
            if !(1..=MAX_REASON_DEPTH).contains(&depth) {
                errors.push(FieldError::out_of_range("depth", 1, MAX_REASON_DEPTH));
            }
        }
        ValidationError::from_fields(errors)
    }
}

/// Body returned by `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    pub source: String,
}

impl ChatResponse {
    /// A response whose text came from the inference service.
    pub fn from_inference(text: String) -> Self {
        Self {
            text,
            source: INFERENCE_SOURCE.to_string(),
        }
    }
}

/// Body returned by `POST /reason`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonResponse {
    #[serde(flatten)]
    pub chat: ChatResponse,
    /// The request's depth hint, unchanged. Serialized as `null` when absent.
    pub depth: Option<u32>,
}
