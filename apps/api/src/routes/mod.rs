pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::generation::handlers as generation;
use crate::pdf::handlers as pdf;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(documents::handle_index))
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate", post(generation::handle_generate))
        .route("/api/tones", get(generation::handle_list_tones))
        // Display API
        .route("/api/render", post(documents::handle_render))
        // Upload API
        .route(
            "/api/pdf-extract",
            post(pdf::handle_pdf_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
