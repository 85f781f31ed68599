//! llama-server binary availability checking and path resolution.
//!
//! The real model client refuses to start unless this check passes, so a
//! missing llama.cpp install surfaces at startup instead of on first request.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the binary searched for on `PATH`.
pub const LLAMA_SERVER_BINARY: &str = "llama-server";

/// Errors that can occur when resolving or validating the llama-server binary.
#[derive(Debug, Error)]
pub enum LlamaServerError {
    /// The llama-server binary was not found at the expected location.
    #[error(
        "llama-server binary not found at: {}\n\nInstall llama.cpp or set LLAMA_SERVER_PATH",
        .path.display()
    )]
    NotFound {
        /// The path where the binary was expected
        path: PathBuf,
    },

    /// No llama-server on `PATH` and no explicit path configured.
    #[error("llama-server not found on PATH\n\nInstall llama.cpp or set LLAMA_SERVER_PATH")]
    NotOnPath,

    /// The binary exists but is not executable.
    #[error("llama-server binary exists but is not executable: {}", .path.display())]
    NotExecutable {
        /// The path to the non-executable binary
        path: PathBuf,
    },

    /// The binary exists but permission was denied when trying to access it.
    #[error("Permission denied accessing llama-server binary: {}", .path.display())]
    PermissionDenied {
        /// The path to the inaccessible binary
        path: PathBuf,
    },

    /// Metadata could not be read for another reason.
    #[error("Failed to inspect llama-server binary: {0}")]
    Inspect(String),
}

/// Result type for llama-server operations.
pub type LlamaServerResult<T> = Result<T, LlamaServerError>;

/// Resolve the llama-server binary path.
///
/// An explicit path wins; otherwise `PATH` is searched. Either way the
/// result is checked to exist and be executable.
pub fn resolve_llama_server(explicit: Option<&Path>) -> LlamaServerResult<PathBuf> {
    if let Some(path) = explicit {
        return validate_binary(path);
    }

    let found = which::which(LLAMA_SERVER_BINARY).map_err(|_| LlamaServerError::NotOnPath)?;
    validate_binary(&found)
}

/// Validate that a binary exists and is executable.
pub fn validate_binary(path: &Path) -> LlamaServerResult<PathBuf> {
    if !path.exists() {
        return Err(LlamaServerError::NotFound {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(path) {
            Ok(metadata) => {
                // Any execute bit (owner, group, or other)
                if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
                    return Err(LlamaServerError::NotExecutable {
                        path: path.to_path_buf(),
                    });
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(LlamaServerError::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(LlamaServerError::Inspect(format!(
                    "{}: {e}",
                    path.display()
                )));
            }
        }
    }

    Ok(path.to_path_buf())
}
