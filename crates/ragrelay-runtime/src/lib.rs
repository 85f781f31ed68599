#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod inference_client;
pub mod llama;
pub mod model;
mod retrieval;
pub mod system;

pub use inference_client::HttpInferenceClient;
pub use model::{LlamaModelClient, MockModelClient, build_model_client};
pub use retrieval::{STUB_SOURCE, StubRetriever};
