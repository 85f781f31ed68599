//! Shared application state types.
//!
//! Each service has its own context, built once by the composition root and
//! handed to handlers through axum's `State`. Everything inside is read-only
//! after construction, so handlers share it without locking.

use std::sync::Arc;

use ragrelay_core::ports::{InferenceClient, ModelClient, Retriever};

/// Services available to inference handlers.
#[derive(Clone)]
pub struct InferenceContext {
    /// The model client selected at startup.
    pub model: Arc<dyn ModelClient>,
}

impl InferenceContext {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}

/// Services available to RAG handlers.
#[derive(Clone)]
pub struct RagContext {
    /// Source of context chunks.
    pub retriever: Arc<dyn Retriever>,
    /// Outbound client for the inference service.
    pub inference: Arc<dyn InferenceClient>,
}

impl RagContext {
    pub fn new(retriever: Arc<dyn Retriever>, inference: Arc<dyn InferenceClient>) -> Self {
        Self {
            retriever,
            inference,
        }
    }
}

/// State type of the inference router.
pub type InferenceState = Arc<InferenceContext>;

/// State type of the RAG router.
pub type RagState = Arc<RagContext>;
