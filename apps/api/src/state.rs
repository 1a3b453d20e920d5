use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from `GEMINI_API_KEY`; lives for the process.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
