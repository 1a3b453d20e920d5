// Résumé + cover letter generation.
// Implements: prompt template, tone presets, model call, response extraction.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
