//! Placeholder retriever.
//!
//! Returns one synthetic chunk per query so the RAG flow can run end to end
//! before a real index is wired in. A vector store adapter replaces this by
//! implementing the same `Retriever` port.

use async_trait::async_trait;
use ragrelay_core::ports::{RetrievalError, Retriever};
use ragrelay_core::{DEFAULT_TOP_K, RetrievedChunk};

/// Source tag on every chunk the stub returns.
pub const STUB_SOURCE: &str = "stub";

/// Retriever that echoes the query back as context.
#[derive(Debug, Clone, Copy)]
pub struct StubRetriever {
    top_k: usize,
}

impl StubRetriever {
    pub const fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub const fn top_k(&self) -> usize {
        self.top_k
    }
}

impl Default for StubRetriever {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn fetch(&self, query: &str) -> Result<Vec<RetrievedChunk>, RetrievalError> {
        let chunks = vec![RetrievedChunk::new(
            format!("Context for: {query}"),
            STUB_SOURCE,
            1.0,
        )];
        Ok(chunks.into_iter().take(self.top_k).collect())
    }
}
