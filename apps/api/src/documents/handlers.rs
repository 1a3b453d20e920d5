//! Axum route handlers for document display.

use axum::{
    extract::rejection::JsonRejection,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::documents::render_print_page;
use crate::errors::AppError;

const DEFAULT_TITLE: &str = "Document";

/// The page served at `/`: form, output panels, edit/copy/print controls.
const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub markdown: String,
}

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/render
///
/// Returns a print-ready HTML page for the given (possibly edited) Markdown.
pub async fn handle_render(
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    if request.markdown.trim().is_empty() {
        return Err(AppError::Validation("markdown cannot be empty".to_string()));
    }

    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);

    Ok(Html(render_print_page(title, &request.markdown)))
}
