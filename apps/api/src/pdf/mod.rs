//! PDF → text, used by the form to pre-fill the résumé field.

pub mod handlers;

use anyhow::anyhow;
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts plain text from an in-memory PDF on the blocking pool.
///
/// Non-PDF input, unreadable documents, and parser panics all map to 422.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::UnprocessableEntity(
            "Uploaded file is not a PDF".to_string(),
        ));
    }

    let size = bytes.len();
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await;

    let text = match result {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF extraction failed ({size} bytes): {e}");
            return Err(AppError::UnprocessableEntity(format!(
                "Could not extract text from PDF: {e}"
            )));
        }
        Err(join) if join.is_panic() => {
            warn!("PDF parser panicked on a {size}-byte upload");
            return Err(AppError::UnprocessableEntity(
                "Could not extract text from PDF".to_string(),
            ));
        }
        Err(join) => return Err(AppError::Internal(anyhow!("PDF task failed: {join}"))),
    };

    let text = normalize_text(&text);
    info!("Extracted {} chars from a {size}-byte PDF", text.chars().count());
    Ok(text)
}

/// Trims trailing spaces per line and collapses runs of blank lines to one.
fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0;

    for line in raw.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim().to_string()
}
