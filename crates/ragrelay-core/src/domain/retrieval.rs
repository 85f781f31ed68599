//! Retrieved context chunks.

use serde::{Deserialize, Serialize};

/// One piece of retrieved context with provenance and a relevance score.
///
/// Retrievers return chunks in relevance order; consumers keep that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub content: String,
    /// Where the chunk came from (document id, index name, ...).
    pub source: String,
    pub score: f64,
}

impl RetrievedChunk {
    pub fn new(content: impl Into<String>, source: impl Into<String>, score: f64) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            score,
        }
    }
}
