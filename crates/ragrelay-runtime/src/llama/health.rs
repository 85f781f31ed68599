//! Health polling for llama-server processes.

use std::time::Duration;

use reqwest::Client;
use tokio::process::Child;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

/// Interval between health probes while a model loads.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Why a llama-server never became healthy.
#[derive(Debug, thiserror::Error)]
pub enum HealthWaitError {
    /// The process exited before answering.
    #[error("llama-server exited during startup ({0})")]
    Exited(String),

    /// No healthy answer before the deadline.
    #[error("llama-server failed to become ready within {0}s")]
    Timeout(u64),
}

/// Make a single request to `/health`.
///
/// llama-server answers 503 while the model is still loading and 200 once
/// it can serve completions.
pub async fn check_http_health(client: &Client, base_url: &str) -> bool {
    let health_url = format!("{base_url}/health");
    match client.get(&health_url).send().await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            debug!("Health check failed: {}, retrying...", e);
            false
        }
    }
}

/// Poll `/health` until it succeeds, the child exits, or `timeout_secs` passes.
pub async fn wait_for_http_health(
    client: &Client,
    base_url: &str,
    child: &mut Child,
    timeout_secs: u64,
) -> Result<(), HealthWaitError> {
    info!("Waiting for llama-server to be ready at {}/health", base_url);
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);

    loop {
        if let Ok(Some(status)) = child.try_wait() {
            return Err(HealthWaitError::Exited(status.to_string()));
        }

        if check_http_health(client, base_url).await {
            info!("llama-server is ready at {}", base_url);
            return Ok(());
        }

        if Instant::now() >= deadline {
            return Err(HealthWaitError::Timeout(timeout_secs));
        }

        sleep(POLL_INTERVAL).await;
    }
}
