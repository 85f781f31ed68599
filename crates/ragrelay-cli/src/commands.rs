//! Subcommands and their arguments.
//!
//! Each argument struct converts into the server config the composition
//! root expects, so nothing past this module knows about flags or env vars.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use ragrelay_axum::{InferenceServerConfig, RagServerConfig};
use ragrelay_core::{
    DEFAULT_INFERENCE_PORT, DEFAULT_INFERENCE_TIMEOUT_SECS, DEFAULT_INFERENCE_URL,
    DEFAULT_MODEL_LOAD_TIMEOUT_SECS, DEFAULT_RAG_PORT, DEFAULT_TOP_K, ModelMode, ModelSettings,
    RagSettings,
};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve /generate on top of a mock or real model
    Inference(InferenceArgs),
    /// Serve /chat and /reason, forwarding to the inference service
    Rag(RagArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InferenceArgs {
    /// Interface to bind
    #[arg(long, env = "INFERENCE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "INFERENCE_PORT", default_value_t = DEFAULT_INFERENCE_PORT)]
    pub port: u16,

    /// Model client variant: mock or real
    #[arg(long, env = "MODEL_MODE", default_value = "mock")]
    pub model_mode: ModelMode,

    /// Hugging Face repo or local GGUF path (required in real mode)
    #[arg(long, env = "MODEL_NAME")]
    pub model_name: Option<String>,

    /// llama-server binary to use instead of searching PATH
    #[arg(long, env = "LLAMA_SERVER_PATH")]
    pub llama_server_path: Option<PathBuf>,

    /// Seconds to wait for a real model to become ready
    #[arg(long, env = "MODEL_LOAD_TIMEOUT_SECS", default_value_t = DEFAULT_MODEL_LOAD_TIMEOUT_SECS)]
    pub load_timeout_secs: u64,
}

impl From<InferenceArgs> for InferenceServerConfig {
    fn from(args: InferenceArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            model: ModelSettings {
                mode: args.model_mode,
                model_name: args.model_name,
                llama_server_path: args.llama_server_path,
                load_timeout_secs: args.load_timeout_secs,
            },
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RagArgs {
    /// Interface to bind
    #[arg(long, env = "RAG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "RAG_PORT", default_value_t = DEFAULT_RAG_PORT)]
    pub port: u16,

    /// Full URL of the inference service's /generate endpoint
    #[arg(long, env = "INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    pub inference_url: String,

    /// Timeout for one inference call, in seconds
    #[arg(long, env = "INFERENCE_TIMEOUT_SECS", default_value_t = DEFAULT_INFERENCE_TIMEOUT_SECS)]
    pub inference_timeout_secs: u64,

    /// Maximum number of context chunks per request
    #[arg(long, env = "RETRIEVER_TOP_K", default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

impl From<RagArgs> for RagServerConfig {
    fn from(args: RagArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            rag: RagSettings {
                inference_url: args.inference_url,
                inference_timeout_secs: args.inference_timeout_secs,
                top_k: args.top_k,
            },
        }
    }
}
