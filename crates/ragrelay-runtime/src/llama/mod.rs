//! llama.cpp server integration: binary resolution, spawning, health.

mod command;
mod health;
mod server_availability;

pub use command::{LlamaServerArgs, ModelSource, spawn_llama_server, spawn_log_readers};
pub use health::{HealthWaitError, check_http_health, wait_for_http_health};
pub use server_availability::{
    LLAMA_SERVER_BINARY, LlamaServerError, LlamaServerResult, resolve_llama_server,
    validate_binary,
};
