//! Router tests for the inference service.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{MockModel, get, json_body, post_json, post_raw};
use ragrelay_axum::{InferenceContext, create_inference_router};
use ragrelay_core::ports::GenerationError;
use ragrelay_core::{ModelMode, ModelSettings};
use ragrelay_runtime::build_model_client;

async fn mock_app() -> axum::Router {
    let model = build_model_client(&ModelSettings::default()).await.unwrap();
    create_inference_router(InferenceContext::new(model))
}

/// A model that must never be reached.
fn untouched_app() -> axum::Router {
    let mut model = MockModel::new();
    model.expect_generate().times(0);
    create_inference_router(InferenceContext::new(Arc::new(model)))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = mock_app().await.oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn generate_in_mock_mode_echoes_prompt() {
    let request = post_json(
        "/generate",
        &json!({ "prompt": "Hello", "max_new_tokens": 10, "temperature": 0.0 }),
    );
    let response = mock_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["mode"], "mock");
    assert_eq!(body["model"], "mock-echo");
    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("Hello"));
    assert!(text.chars().count() <= "Hello".len() + 10);
}

#[tokio::test]
async fn generate_applies_defaults_and_accepts_camel_case_alias() {
    let app = mock_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/generate", &json!({ "prompt": "Hi" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json(
            "/generate",
            &json!({ "prompt": "Hi", "maxNewTokens": 3 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["text"], "Hi [m");
}

#[tokio::test]
async fn generate_forwards_parameters_to_model() {
    let mut model = MockModel::new();
    model
        .expect_generate()
        .withf(|prompt, max_new_tokens, temperature| {
            prompt.to_string() == "Hello" && *max_new_tokens == 10 && *temperature <= 0.0
        })
        .times(1)
        .returning(|_, _, _| Ok("Hello world".to_string()));
    model.expect_mode().return_const(ModelMode::Real);
    model.expect_model_name().return_const("org/repo".to_string());
    let app = create_inference_router(InferenceContext::new(Arc::new(model)));

    let request = post_json(
        "/generate",
        &json!({ "prompt": "Hello", "max_new_tokens": 10, "temperature": 0.0 }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["text"], "Hello world");
    assert_eq!(body["mode"], "real");
    assert_eq!(body["model"], "org/repo");
}

#[tokio::test]
async fn out_of_range_fields_are_rejected_before_generation() {
    let cases = [
        (json!({ "prompt": "x", "max_new_tokens": 0 }), "max_new_tokens"),
        (json!({ "prompt": "x", "max_new_tokens": 513 }), "max_new_tokens"),
        (json!({ "prompt": "x", "temperature": 2.1 }), "temperature"),
        (json!({ "prompt": "" }), "prompt"),
    ];

    for (body, field) in cases {
        let response = untouched_app()
            .oneshot(post_json("/generate", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        let json = json_body(response).await;
        assert_eq!(json["detail"][0]["loc"], json!(["body", field]), "{body}");
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    for raw in ["{}", "not json", r#"{"prompt": 5}"#] {
        let response = untouched_app()
            .oneshot(post_raw("/generate", raw))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{raw}");
    }
}

#[tokio::test]
async fn generation_failure_is_an_internal_error() {
    let mut model = MockModel::new();
    model
        .expect_generate()
        .returning(|_, _, _| Err(GenerationError::Transport("backend went away".to_string())));
    let app = create_inference_router(InferenceContext::new(Arc::new(model)));

    let response = app
        .oneshot(post_json("/generate", &json!({ "prompt": "Hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("backend went away"));
}
