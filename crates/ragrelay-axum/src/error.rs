//! Axum-specific error types and mappings.
//!
//! Every failure leaving a handler goes through [`HttpError`], which decides
//! the status code and how much detail the caller sees.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ragrelay_core::ports::GenerationError;
use ragrelay_core::{FieldError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Detail returned when the inference service call fails.
pub const INFERENCE_BACKEND_ERROR: &str = "Inference backend error";

/// Detail returned when the retrieval backend fails.
pub const RETRIEVAL_BACKEND_ERROR: &str = "Retrieval backend error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Body parsed but one or more fields are out of bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body could not be parsed into the request type.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A collaborator behind this service failed. The message is shown to
    /// the caller as-is, so it must already be safe to expose.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// One entry of a 422 `detail` list.
#[derive(Debug, Serialize)]
struct FieldDetail {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<&FieldError> for FieldDetail {
    fn from(err: &FieldError) -> Self {
        Self {
            loc: vec!["body".to_string(), err.field.to_string()],
            msg: err.message.clone(),
            kind: err.kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldDetail>),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Detail,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Detail::Fields(err.fields().iter().map(FieldDetail::from).collect()),
            ),
            Self::InvalidBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Detail::Fields(vec![FieldDetail {
                    loc: vec!["body".to_string()],
                    msg,
                    kind: "invalid_body".to_string(),
                }]),
            ),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, Detail::Message(msg)),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, Detail::Message(msg)),
        };

        let body = ErrorBody {
            detail,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<GenerationError> for HttpError {
    fn from(err: GenerationError) -> Self {
        // Local backend failures are shown to the operator verbatim
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(err: HttpError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_422_with_fields() {
        let err = ValidationError::single(FieldError::out_of_range("max_new_tokens", 1, 512));
        let (status, json) = body_json(err.into()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["status"], 422);
        assert_eq!(json["detail"][0]["loc"][1], "max_new_tokens");
        assert_eq!(json["detail"][0]["type"], "range");
    }

    #[tokio::test]
    async fn test_generation_error_keeps_message() {
        let err = GenerationError::Transport("connection reset".to_string());
        let (status, json) = body_json(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["detail"].as_str().unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_bad_gateway_detail_is_plain_string() {
        let (status, json) =
            body_json(HttpError::BadGateway(INFERENCE_BACKEND_ERROR.to_string())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["detail"], INFERENCE_BACKEND_ERROR);
    }
}
