//! Command builder and log streaming for llama-server.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::debug;

/// Where llama-server loads the model from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A GGUF file on disk (`-m`).
    LocalFile(PathBuf),
    /// A Hugging Face repository, downloaded by llama-server (`-hf`).
    HuggingFace(String),
}

impl ModelSource {
    /// Existing files are loaded directly; anything else is a repo id.
    pub fn from_identifier(identifier: &str) -> Self {
        let path = Path::new(identifier);
        if path.is_file() {
            Self::LocalFile(path.to_path_buf())
        } else {
            Self::HuggingFace(identifier.to_string())
        }
    }
}

/// Arguments for one llama-server instance.
#[derive(Debug, Clone)]
pub struct LlamaServerArgs {
    pub model: ModelSource,
    pub port: u16,
    pub gpu_layers: u32,
}

impl LlamaServerArgs {
    /// Render the command-line arguments.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        match &self.model {
            ModelSource::LocalFile(path) => {
                args.push("-m".to_string());
                args.push(path.display().to_string());
            }
            ModelSource::HuggingFace(repo) => {
                args.push("-hf".to_string());
                args.push(repo.clone());
            }
        }

        args.extend([
            "--host".to_string(),
            "127.0.0.1".to_string(),
            "--port".to_string(),
            self.port.to_string(),
            "-ngl".to_string(),
            self.gpu_layers.to_string(),
        ]);

        args
    }
}

/// Spawn a llama-server process.
///
/// The child is killed when its handle is dropped, so the server lives
/// exactly as long as the model client that owns it.
pub fn spawn_llama_server(binary: &Path, args: &LlamaServerArgs) -> std::io::Result<Child> {
    let mut cmd = Command::new(binary);
    cmd.args(args.to_args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!(binary = %binary.display(), args = ?args.to_args(), "Spawning llama-server");
    cmd.spawn()
}

/// Spawn background tasks that forward stdout/stderr lines to tracing.
///
/// The tasks exit when the streams close.
pub fn spawn_log_readers(child: &mut Child, port: u16) {
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(text)) = lines.next_line().await {
                debug!(port = %port, "stdout: {}", text);
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(text)) = lines.next_line().await {
                debug!(port = %port, "stderr: {}", text);
            }
        });
    }
}
