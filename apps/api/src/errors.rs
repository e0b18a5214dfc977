use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;
use crate::llm_client::{ErrorKind, LlmError};
use crate::sequence::generator::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps an LLM failure into the HTTP taxonomy, prefixing the operation name.
    fn from_llm(operation: &str, err: LlmError) -> Self {
        let message = format!("{operation}: {err}");
        match err.kind() {
            ErrorKind::Configuration => AppError::Configuration(message),
            ErrorKind::Transport => AppError::Llm(message),
            ErrorKind::MalformedResponse => AppError::MalformedResponse(message),
        }
    }
}

/// Unreadable request bodies get the same JSON error envelope as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::EmptyTranscript => {
                AppError::Validation("transcript cannot be empty".to_string())
            }
            ExtractionError::Llm(e) => AppError::from_llm("Failed to analyze transcript", e),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::EmptyTranscript => {
                AppError::Validation("transcript cannot be empty".to_string())
            }
            GenerationError::Llm(e) => AppError::from_llm("Failed to generate emails", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_ERROR",
                    format!("{msg}. Please check your API key."),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", msg.clone())
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed LLM response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    "The AI returned an unusable response. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
