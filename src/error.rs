use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::openai::UpstreamError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unreadable body: {0}")]
    Body(#[from] BytesRejection),
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::Misconfigured(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MISCONFIGURED", msg)
            }
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR", msg),
            AppError::Body(rejection) => (rejection.status(), "BODY_REJECTED", rejection.body_text()),
            AppError::MethodNotAllowed => {
                tracing::error!("Request failed: METHOD_NOT_ALLOWED");
                return StatusCode::METHOD_NOT_ALLOWED.into_response();
            }
        };

        tracing::error!("Request failed: {} - {}", code, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
