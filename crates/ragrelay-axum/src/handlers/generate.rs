//! Inference service handlers.

use axum::Json;
use axum::extract::State;
use ragrelay_core::{GenerationRequest, GenerationResponse};
use tracing::debug;

use crate::error::HttpError;
use crate::extract::ValidatedJson;
use crate::state::InferenceState;

/// Run a completion on the model client selected at startup.
pub async fn generate(
    State(state): State<InferenceState>,
    ValidatedJson(req): ValidatedJson<GenerationRequest>,
) -> Result<Json<GenerationResponse>, HttpError> {
    debug!(
        max_new_tokens = req.max_new_tokens,
        temperature = req.temperature,
        "Generating completion"
    );

    let model = &state.model;
    let text = model
        .generate(&req.prompt, req.max_new_tokens, req.temperature)
        .await?;

    Ok(Json(GenerationResponse {
        text,
        model: model.model_name().to_string(),
        mode: model.mode(),
    }))
}
