//! RAG service handlers.
//!
//! Both endpoints run the same pipeline: retrieve context for the prompt,
//! render the augmented prompt, forward it to the inference service.

use axum::Json;
use axum::extract::State;
use ragrelay_core::{ChatRequest, ChatResponse, ReasonRequest, ReasonResponse, build_prompt};
use tracing::{debug, error};

use crate::error::{HttpError, INFERENCE_BACKEND_ERROR, RETRIEVAL_BACKEND_ERROR};
use crate::extract::ValidatedJson;
use crate::state::RagState;

async fn answer(state: &RagState, req: &ChatRequest) -> Result<String, HttpError> {
    let contexts = state.retriever.fetch(&req.prompt).await.map_err(|e| {
        error!(error = %e, "Retrieval failed");
        HttpError::BadGateway(RETRIEVAL_BACKEND_ERROR.to_string())
    })?;

    let prompt = build_prompt(&req.prompt, &contexts);
    debug!(chunks = contexts.len(), prompt_len = prompt.len(), "Built augmented prompt");

    // Upstream details go to the log only
    state
        .inference
        .generate(&prompt, req.max_new_tokens, req.temperature)
        .await
        .map_err(|e| {
            error!(error = %e, "Inference call failed");
            HttpError::BadGateway(INFERENCE_BACKEND_ERROR.to_string())
        })
}

pub async fn chat(
    State(state): State<RagState>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    let text = answer(&state, &req).await?;
    Ok(Json(ChatResponse::from_inference(text)))
}

/// Same as [`chat`], echoing the caller's depth hint.
pub async fn reason(
    State(state): State<RagState>,
    ValidatedJson(req): ValidatedJson<ReasonRequest>,
) -> Result<Json<ReasonResponse>, HttpError> {
    let text = answer(&state, &req.chat).await?;
    Ok(Json(ReasonResponse {
        chat: ChatResponse::from_inference(text),
        depth: req.depth,
    }))
}
