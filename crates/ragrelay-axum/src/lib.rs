#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{
    InferenceServerConfig, RagServerConfig, bootstrap_inference, bootstrap_rag,
    start_inference_server, start_rag_server,
};
pub use error::HttpError;
pub use routes::{create_inference_router, create_rag_router};
pub use state::{InferenceContext, RagContext};
