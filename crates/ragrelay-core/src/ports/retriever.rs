//! Retriever port for the RAG service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::RetrievedChunk;

/// Errors raised by a retrieval backend.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Retrieval backend error: {0}")]
    Backend(String),
}

/// Port for fetching context relevant to a query.
///
/// Contract for implementations:
/// - chunks are returned most relevant first, and callers keep that order;
/// - the result is non-empty unless nothing matched;
/// - every chunk carries its source and a numeric score.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<RetrievedChunk>, RetrievalError>;
}
