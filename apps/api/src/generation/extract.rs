//! Response extraction: turns free-form model text into `GeneratedContent`.
//!
//! Two sequential attempts, then a separate shape check:
//! 1. parse the whole text as JSON;
//! 2. otherwise parse the greedy span from the first `{` to the last `}`;
//! 3. check that `resume` and `coverLetter` are non-empty strings.
//!
//! The greedy span can misfire when the text holds several JSON-like fragments
//! or stray braces in prose. That behavior is kept as-is for compatibility.

use serde_json::Value;

use crate::models::generation::GeneratedContent;

/// Characters of raw text echoed back when nothing parses.
pub const PREVIEW_CHARS: usize = 200;

/// Outcome of the parse attempts. Shape is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(Value),
    NoJson,
}

/// Runs the full-text parse, then the brace-span fallback.
///
/// A parsed value that is falsy (`null`, `false`, `0`, `""`) counts as no JSON.
pub fn extract_json(text: &str) -> Extraction {
    let candidate = serde_json::from_str::<Value>(text)
        .ok()
        .or_else(|| brace_span(text).and_then(|span| serde_json::from_str(span).ok()));

    match candidate {
        Some(value) if is_truthy(&value) => Extraction::Parsed(value),
        _ => Extraction::NoJson,
    }
}

/// Widest `{ ... }` span: first `{` through last `}` after it.
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Checks both documents are present. On failure the parsed value is handed
/// back for diagnostics.
pub fn validate_content(value: Value) -> Result<GeneratedContent, Value> {
    let field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("resume"), field("coverLetter")) {
        (Some(resume), Some(cover_letter)) => Ok(GeneratedContent {
            resume,
            cover_letter,
        }),
        _ => Err(value),
    }
}

/// First `PREVIEW_CHARS` characters of the raw text.
///
/// Counts Unicode scalar values, as does the `responseLength` reported next to
/// it. A UTF-16 count differs only for astral characters such as emoji, which
/// count once here and twice there.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
