//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::generator::generate_documents;
use crate::generation::tone::ToneList;
use crate::models::generation::{GeneratedContent, GenerationRequest};
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the three fields, calls the model once, and returns both documents.
/// 400 on missing fields, 500 on any model or parsing failure.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GeneratedContent>, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected generate body: {e}");
        AppError::Validation(format!("Invalid request body: {}", e.body_text()))
    })?;

    let content = generate_documents(state.llm.as_ref(), &request).await?;
    Ok(Json(content))
}

/// GET /api/tones
///
/// Tone presets for the form's selector, plus the one it starts on.
/// Any other label is still accepted by `/api/generate`.
pub async fn handle_list_tones() -> Json<ToneList> {
    Json(ToneList::current())
}
