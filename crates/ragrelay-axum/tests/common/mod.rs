//! Fakes and helpers shared by the router tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::Value;

use ragrelay_core::ports::{
    GenerationError, InferenceClient, ModelClient, RetrievalError, Retriever, UpstreamError,
};
use ragrelay_core::{ModelMode, RetrievedChunk};
use ragrelay_axum::RagContext;

mock! {
    pub Model {}

    #[async_trait]
    impl ModelClient for Model {
        fn mode(&self) -> ModelMode;
        fn model_name(&self) -> &str;
        async fn generate(
            &self,
            prompt: &str,
            max_new_tokens: u32,
            temperature: f32,
        ) -> Result<String, GenerationError>;
    }
}

mock! {
    pub Retrieval {}

    #[async_trait]
    impl Retriever for Retrieval {
        async fn fetch(&self, query: &str) -> Result<Vec<RetrievedChunk>, RetrievalError>;
    }
}

mock! {
    pub Inference {}

    #[async_trait]
    impl InferenceClient for Inference {
        async fn generate(
            &self,
            prompt: &str,
            max_new_tokens: u32,
            temperature: f32,
        ) -> Result<String, UpstreamError>;
    }
}

/// Retriever returning one fixed chunk.
pub struct FixedRetriever;

#[async_trait]
impl Retriever for FixedRetriever {
    async fn fetch(&self, _query: &str) -> Result<Vec<RetrievedChunk>, RetrievalError> {
        Ok(vec![RetrievedChunk::new("ctx", "stub", 0.9)])
    }
}

/// Inference client echoing the prompt it received, and remembering it.
#[derive(Default)]
pub struct EchoInference {
    pub last_prompt: Mutex<Option<String>>,
}

#[async_trait]
impl InferenceClient for EchoInference {
    async fn generate(
        &self,
        prompt: &str,
        _max_new_tokens: u32,
        _temperature: f32,
    ) -> Result<String, UpstreamError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(format!("stubbed: {prompt}"))
    }
}

/// Inference client that always fails with a revealing message.
pub struct BrokenInference;

pub const LEAKY_MESSAGE: &str = "secret upstream stack trace";

#[async_trait]
impl InferenceClient for BrokenInference {
    async fn generate(
        &self,
        _prompt: &str,
        _max_new_tokens: u32,
        _temperature: f32,
    ) -> Result<String, UpstreamError> {
        Err(UpstreamError::Status {
            status: 500,
            body: LEAKY_MESSAGE.to_string(),
        })
    }
}

pub fn rag_context(inference: Arc<dyn InferenceClient>) -> RagContext {
    RagContext::new(Arc::new(FixedRetriever), inference)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
