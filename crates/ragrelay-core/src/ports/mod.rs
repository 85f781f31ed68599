//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the services expect from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod inference_client;
pub mod model_client;
pub mod retriever;

pub use inference_client::{InferenceClient, UpstreamError};
pub use model_client::{GenerationError, ModelClient, ModelConstructionError};
pub use retriever::{RetrievalError, Retriever};
