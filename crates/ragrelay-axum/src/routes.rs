//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::{InferenceContext, RagContext};

/// Router for the inference service.
pub fn create_inference_router(ctx: InferenceContext) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route("/generate", post(handlers::generate::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(ctx))
}

/// Router for the RAG service.
pub fn create_rag_router(ctx: RagContext) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route("/chat", post(handlers::rag::chat))
        .route("/reason", post(handlers::rag::reason))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(ctx))
}
