//! Document generation: validate → prompt → one model call → extract → validate.
//!
//! All-or-nothing: either both documents come back or the request fails.
//! Nothing is retried; the user resubmits.

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::extract::{extract_json, preview, validate_content, Extraction};
use crate::generation::prompts::build_generation_prompt;
use crate::generation::tone::find_preset;
use crate::llm_client::TextGenerator;
use crate::models::generation::{GeneratedContent, GenerationRequest};

/// User-facing message for a request with any empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields.";

/// Runs the generation pipeline for one request.
///
/// Steps:
/// 1. reject empty fields before any external call
/// 2. build the prompt
/// 3. call the model once
/// 4. extract JSON from the raw text
/// 5. check both documents are present
pub async fn generate_documents(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GeneratedContent, AppError> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        debug!("Rejecting generation request, missing: {missing:?}");
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let span = info_span!("generate", request_id = %Uuid::new_v4(), model = llm.model());
    run_pipeline(llm, request).instrument(span).await
}

async fn run_pipeline(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GeneratedContent, AppError> {
    info!(
        "Generating documents: jd_chars={}, resume_chars={}, tone={:?}, preset={}",
        request.job_description.chars().count(),
        request.current_resume.chars().count(),
        request.tone,
        find_preset(&request.tone).is_some()
    );

    let prompt = build_generation_prompt(request);
    debug!("Prompt built: {} chars", prompt.chars().count());

    let text = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    info!("Model responded: {} chars", text.chars().count());

    let parsed = match extract_json(&text) {
        Extraction::Parsed(value) => value,
        Extraction::NoJson => {
            warn!("No JSON found in model response");
            return Err(AppError::UnparsableResponse {
                response_length: text.chars().count(),
                response_preview: preview(&text),
            });
        }
    };

    let content = validate_content(parsed).map_err(|parsed_json| {
        warn!("Model JSON is missing resume or coverLetter");
        AppError::IncompleteResult { parsed_json }
    })?;

    info!(
        "Documents generated: resume_chars={}, cover_letter_chars={}",
        content.resume.chars().count(),
        content.cover_letter.chars().count()
    );

    Ok(content)
}
