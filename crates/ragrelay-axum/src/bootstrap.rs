//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete port implementations are
//! wired together. Handlers and routers only ever see the trait objects.

use std::sync::Arc;

use anyhow::{Context, Result};
use ragrelay_core::{ModelSettings, RagSettings, validate_rag_settings};
use ragrelay_runtime::{HttpInferenceClient, StubRetriever, build_model_client};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{create_inference_router, create_rag_router};
use crate::state::{InferenceContext, RagContext};

/// Server configuration for the inference service.
#[derive(Debug, Clone)]
pub struct InferenceServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Model selection and loading parameters.
    pub model: ModelSettings,
}

impl Default for InferenceServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: ragrelay_core::DEFAULT_INFERENCE_PORT,
            model: ModelSettings::default(),
        }
    }
}

/// Server configuration for the RAG service.
#[derive(Debug, Clone)]
pub struct RagServerConfig {
    pub host: String,
    pub port: u16,
    /// Inference endpoint, timeout and retrieval depth.
    pub rag: RagSettings,
}

impl Default for RagServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: ragrelay_core::DEFAULT_RAG_PORT,
            rag: RagSettings::default(),
        }
    }
}

/// Build the inference context.
///
/// In real mode this loads the model, which can take a while; the service
/// must not accept requests until it returns.
pub async fn bootstrap_inference(settings: &ModelSettings) -> Result<InferenceContext> {
    info!(mode = %settings.mode, "Bootstrapping inference service");

    let model = build_model_client(settings)
        .await
        .context("Failed to construct model client")?;

    Ok(InferenceContext::new(model))
}

/// Build the RAG context.
pub fn bootstrap_rag(settings: &RagSettings) -> Result<RagContext> {
    validate_rag_settings(settings).context("Invalid RAG settings")?;

    info!(
        inference_url = %settings.inference_url,
        timeout_secs = settings.inference_timeout_secs,
        top_k = settings.top_k,
        "Bootstrapping RAG service"
    );

    let inference = HttpInferenceClient::from_settings(settings)
        .context("Failed to build inference HTTP client")?;
    let retriever = StubRetriever::new(settings.top_k);

    Ok(RagContext::new(Arc::new(retriever), Arc::new(inference)))
}

/// Bootstrap and run the inference service until shutdown.
pub async fn start_inference_server(config: InferenceServerConfig) -> Result<()> {
    let ctx = bootstrap_inference(&config.model).await?;
    let app = create_inference_router(ctx);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Inference service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Inference service stopped");
    Ok(())
}

/// Bootstrap and run the RAG service until shutdown.
pub async fn start_rag_server(config: RagServerConfig) -> Result<()> {
    let ctx = bootstrap_rag(&config.rag)?;
    let app = create_rag_router(ctx);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("RAG service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("RAG service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
