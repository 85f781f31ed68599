//! Real model client backed by a llama-server child process.
//!
//! Loading happens once, at construction: the binary is checked, the
//! compute device is chosen, the server is spawned and polled until healthy.
//! Every later `generate` call is a plain HTTP request to that server.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::process::Child;
use tracing::{debug, info};

use ragrelay_core::ports::{GenerationError, ModelClient, ModelConstructionError};
use ragrelay_core::{ModelMode, ModelSettings};

use crate::llama::{
    LlamaServerArgs, ModelSource, resolve_llama_server, spawn_llama_server, spawn_log_readers,
    wait_for_http_health,
};
use crate::system::{ComputeDevice, detect_compute_device};

/// Upper bound for a single completion request.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for each health probe during loading.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Body of llama-server's `POST /completion`.
#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    /// Stop at end-of-sequence instead of padding past it.
    ignore_eos: bool,
}

impl<'a> CompletionBody<'a> {
    fn new(prompt: &'a str, max_new_tokens: u32, temperature: f32) -> Self {
        // Zero temperature means no sampling: always take the top token
        let top_k = (temperature <= 0.0).then_some(1);
        Self {
            prompt,
            n_predict: max_new_tokens,
            temperature,
            top_k,
            ignore_eos: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    content: String,
}

/// Model client that drives a dedicated llama-server instance.
#[derive(Debug)]
pub struct LlamaModelClient {
    model_name: String,
    base_url: String,
    device: ComputeDevice,
    http: Client,
    /// Held for its lifetime only; dropping it kills the server.
    _server: Mutex<Child>,
}

impl LlamaModelClient {
    /// Check dependencies, spawn llama-server and wait until the model is loaded.
    pub async fn load(settings: &ModelSettings) -> Result<Self, ModelConstructionError> {
        let model_name = settings
            .model_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ModelConstructionError::Configuration(
                    "MODEL_NAME must be set when MODEL_MODE=real".to_string(),
                )
            })?
            .to_string();

        let binary = resolve_llama_server(settings.llama_server_path.as_deref())
            .map_err(|e| ModelConstructionError::BackendUnavailable(e.to_string()))?;

        let device = detect_compute_device();
        let port = reserve_local_port()?;
        let args = LlamaServerArgs {
            model: ModelSource::from_identifier(&model_name),
            port,
            gpu_layers: device.gpu_layers(),
        };

        let mut child = spawn_llama_server(&binary, &args).map_err(|e| {
            ModelConstructionError::BackendUnavailable(format!(
                "Failed to spawn {}: {e}",
                binary.display()
            ))
        })?;
        spawn_log_readers(&mut child, port);

        let base_url = format!("http://127.0.0.1:{port}");
        let probe = build_client(PROBE_TIMEOUT)?;
        wait_for_http_health(&probe, &base_url, &mut child, settings.load_timeout_secs)
            .await
            .map_err(|e| ModelConstructionError::LoadFailed(e.to_string()))?;

        info!(model = %model_name, device = %device, port = port, "Loaded llama.cpp model");

        Ok(Self {
            model_name,
            base_url,
            device,
            http: build_client(GENERATION_TIMEOUT)?,
            _server: Mutex::new(child),
        })
    }

    /// Device chosen at load time.
    pub const fn device(&self) -> ComputeDevice {
        self.device
    }
}

fn build_client(timeout: Duration) -> Result<Client, ModelConstructionError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ModelConstructionError::Configuration(format!("HTTP client: {e}")))
}

/// Ask the OS for a free loopback port.
fn reserve_local_port() -> Result<u16, ModelConstructionError> {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .map_err(|e| ModelConstructionError::LoadFailed(format!("No free local port: {e}")))
}

#[async_trait]
impl ModelClient for LlamaModelClient {
    fn mode(&self) -> ModelMode {
        ModelMode::Real
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let body = CompletionBody::new(prompt, max_new_tokens, temperature);
        debug!(n_predict = body.n_predict, top_k = ?body.top_k, "POST /completion");

        let response = self
            .http
            .post(format!("{}/completion", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        // Same shape as a causal LM decode: prompt followed by the continuation
        Ok(format!("{prompt}{}", reply.content))
    }
}
