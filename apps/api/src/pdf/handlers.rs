use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::pdf::extract_pdf_text;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct PdfExtractResponse {
    pub text: String,
}

/// POST /api/pdf-extract
///
/// Multipart upload with a `file` field → `{ text }`.
pub async fn handle_pdf_extract(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PdfExtractResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::Validation(format!("Expected a multipart upload: {e}")))?;

    let mut upload: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("No PDF file uploaded".to_string()))?;

    let text = extract_pdf_text(bytes).await?;
    Ok(Json(PdfExtractResponse { text }))
}
