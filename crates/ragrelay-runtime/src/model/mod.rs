//! Model client implementations and variant selection.

mod llama;
mod mock;

use std::sync::Arc;

use ragrelay_core::ports::{ModelClient, ModelConstructionError};
use ragrelay_core::{ModelMode, ModelSettings, validate_model_settings};
use tracing::info;

pub use llama::LlamaModelClient;
pub use mock::{MOCK_COMPLETION_MARKER, MOCK_MODEL_NAME, MockModelClient};

/// Build the model client selected by `settings.mode`.
///
/// Called once per process. A real model is fully loaded before this
/// returns, so any failure here means the service must not start.
pub async fn build_model_client(
    settings: &ModelSettings,
) -> Result<Arc<dyn ModelClient>, ModelConstructionError> {
    validate_model_settings(settings)
        .map_err(|e| ModelConstructionError::Configuration(e.to_string()))?;

    let client: Arc<dyn ModelClient> = match settings.mode {
        ModelMode::Mock => Arc::new(MockModelClient::new()),
        ModelMode::Real => Arc::new(LlamaModelClient::load(settings).await?),
    };

    info!(
        mode = %client.mode(),
        model = %client.model_name(),
        "Model client ready"
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_default_settings_build_mock() {
        let client = build_model_client(&ModelSettings::default()).await.unwrap();
        assert_eq!(client.mode(), ModelMode::Mock);
        assert_eq!(client.model_name(), MOCK_MODEL_NAME);
    }

    #[tokio::test]
    async fn test_real_without_model_name_is_configuration_error() {
        let settings = ModelSettings {
            mode: ModelMode::Real,
            ..Default::default()
        };
        let err = build_model_client(&settings).await.err().unwrap();
        assert!(matches!(err, ModelConstructionError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_real_with_missing_binary_fails_construction() {
        let settings = ModelSettings {
            llama_server_path: Some(PathBuf::from("/nonexistent/llama-server")),
            ..ModelSettings::real("org/repo")
        };
        let err = build_model_client(&settings).await.err().unwrap();
        assert!(matches!(err, ModelConstructionError::BackendUnavailable(_)));
    }
}
