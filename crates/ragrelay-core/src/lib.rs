#![doc = include_str!("../README.md")]

pub mod domain;
pub mod ports;
pub mod prompt;
pub mod settings;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    ChatRequest, ChatResponse, GenerationRequest, GenerationResponse, ModelMode, ReasonRequest,
    ReasonResponse, RetrievedChunk,
};
pub use ports::{
    GenerationError, InferenceClient, ModelClient, ModelConstructionError, RetrievalError,
    Retriever, UpstreamError,
};
pub use prompt::build_prompt;
pub use settings::{
    DEFAULT_INFERENCE_PORT, DEFAULT_INFERENCE_TIMEOUT_SECS, DEFAULT_INFERENCE_URL,
    DEFAULT_MODEL_LOAD_TIMEOUT_SECS, DEFAULT_RAG_PORT, DEFAULT_TOP_K, ModelSettings, RagSettings,
    SettingsError, validate_model_settings, validate_rag_settings,
};
pub use validation::{FieldError, Validate, ValidationError};
