//! Domain types shared by both services.

pub mod chat;
pub mod generation;
pub mod retrieval;

pub use chat::{
    ChatRequest, ChatResponse, INFERENCE_SOURCE, MAX_REASON_DEPTH, ReasonRequest, ReasonResponse,
};
pub use generation::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE, GenerationRequest, GenerationResponse,
    MAX_NEW_TOKENS_LIMIT, MAX_TEMPERATURE, ModelMode,
};
pub use retrieval::RetrievedChunk;
