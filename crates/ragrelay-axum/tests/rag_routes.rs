//! Router tests for the RAG service.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{
    BrokenInference, EchoInference, FixedRetriever, LEAKY_MESSAGE, MockInference, MockRetrieval,
    get, json_body, post_json, rag_context,
};
use ragrelay_axum::{RagContext, create_rag_router};
use ragrelay_core::ports::RetrievalError;

/// Both collaborators must stay untouched.
fn untouched_app() -> axum::Router {
    let mut retriever = MockRetrieval::new();
    retriever.expect_fetch().times(0);
    let mut inference = MockInference::new();
    inference.expect_generate().times(0);
    create_rag_router(RagContext::new(Arc::new(retriever), Arc::new(inference)))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = create_rag_router(rag_context(Arc::new(EchoInference::default())));
    let response = app.oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn chat_returns_inference_text() {
    let app = create_rag_router(rag_context(Arc::new(EchoInference::default())));
    let response = app
        .oneshot(post_json("/chat", &json!({ "prompt": "What is RAG?" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["text"].as_str().unwrap().starts_with("stubbed:"));
    assert_eq!(body["source"], "inference");
}

#[tokio::test]
async fn chat_sends_augmented_prompt() {
    let inference = Arc::new(EchoInference::default());
    let app = create_rag_router(rag_context(inference.clone()));

    let response = app
        .oneshot(post_json("/chat", &json!({ "prompt": "What is RAG?" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let prompt = inference.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Source: stub\nScore: 0.9\nctx"));
    assert!(prompt.ends_with("User: What is RAG?\nAssistant:"));
}

#[tokio::test]
async fn chat_forwards_generation_parameters() {
    let mut inference = MockInference::new();
    inference
        .expect_generate()
        .withf(|_, max_new_tokens, temperature| {
            *max_new_tokens == 42 && (*temperature - 0.3).abs() < f32::EPSILON
        })
        .times(1)
        .returning(|_, _, _| Ok("answer".to_string()));
    let app = create_rag_router(RagContext::new(Arc::new(FixedRetriever), Arc::new(inference)));

    let response = app
        .oneshot(post_json(
            "/chat",
            &json!({ "prompt": "q", "max_new_tokens": 42, "temperature": 0.3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["text"], "answer");
}

#[tokio::test]
async fn reason_echoes_depth() {
    let app = create_rag_router(rag_context(Arc::new(EchoInference::default())));
    let response = app
        .oneshot(post_json("/reason", &json!({ "prompt": "Why?", "depth": 2 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["depth"], 2);
    assert_eq!(body["source"], "inference");
    assert!(body["text"].as_str().unwrap().starts_with("stubbed:"));
}

#[tokio::test]
async fn reason_without_depth_returns_null() {
    let app = create_rag_router(rag_context(Arc::new(EchoInference::default())));
    let response = app
        .oneshot(post_json("/reason", &json!({ "prompt": "Why?" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body.as_object().unwrap().contains_key("depth"));
    assert!(body["depth"].is_null());
}

#[tokio::test]
async fn invalid_requests_never_reach_collaborators() {
    let cases = [
        ("/reason", json!({ "prompt": "Why?", "depth": 6 })),
        ("/reason", json!({ "prompt": "Why?", "depth": 0 })),
        ("/chat", json!({ "prompt": "" })),
        ("/chat", json!({ "prompt": "x", "max_new_tokens": 0 })),
        ("/chat", json!({ "max_new_tokens": 10 })),
    ];

    for (uri, body) in cases {
        let response = untouched_app().oneshot(post_json(uri, &body)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "{uri} {body}"
        );
    }
}

#[tokio::test]
async fn inference_failure_is_bad_gateway_without_details() {
    let app = create_rag_router(rag_context(Arc::new(BrokenInference)));

    for uri in ["/chat", "/reason"] {
        let response = app
            .clone()
            .oneshot(post_json(uri, &json!({ "prompt": "Hello" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Inference backend error");
        assert!(!body.to_string().contains(LEAKY_MESSAGE));
    }
}

#[tokio::test]
async fn retrieval_failure_is_bad_gateway() {
    let mut retriever = MockRetrieval::new();
    retriever
        .expect_fetch()
        .returning(|_| Err(RetrievalError::Backend("index offline".to_string())));
    let mut inference = MockInference::new();
    inference.expect_generate().times(0);
    let app = create_rag_router(RagContext::new(Arc::new(retriever), Arc::new(inference)));

    let response = app
        .oneshot(post_json("/chat", &json!({ "prompt": "Hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["detail"], "Retrieval backend error");
}
