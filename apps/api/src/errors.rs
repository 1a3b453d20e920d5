use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to exactly one status and one user-facing message.
/// Diagnostic detail only ever goes into the secondary `debug` field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("No JSON found in a {response_length}-char model response")]
    UnparsableResponse {
        response_length: usize,
        response_preview: String,
    },

    #[error("Model response is missing resume or coverLetter")]
    IncompleteResult { parsed_json: Value },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": msg }))
            }
            AppError::UnparsableResponse {
                response_length,
                response_preview,
            } => {
                tracing::error!(
                    "Could not extract JSON from model response ({response_length} chars)"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "The AI returned an invalid format. Please try again.",
                        "debug": {
                            "responseLength": response_length,
                            "responsePreview": response_preview,
                        }
                    }),
                )
            }
            AppError::IncompleteResult { parsed_json } => {
                tracing::error!("Parsed model JSON is missing required fields");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "The AI response is missing required fields (resume or coverLetter).",
                        "debug": { "parsedJson": parsed_json }
                    }),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate content. Please try again.",
                        "debug": msg
                    }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
