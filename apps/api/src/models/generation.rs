use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/generate`.
///
/// Absent and `null` fields deserialize to empty strings so that "missing"
/// and "empty" fail the same validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub current_resume: String,
    /// Free-form label. Known presets live in `generation::tone`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tone: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerationRequest {
    /// Wire names of the fields that are empty. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("jobDescription", &self.job_description),
            ("currentResume", &self.current_resume),
            ("tone", &self.tone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Validated model output: two Markdown documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub resume: String,
    pub cover_letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"jobDescription":"JD","currentResume":"CV","tone":"friendly"}"#,
        )
        .unwrap();
        assert_eq!(req.job_description, "JD");
        assert_eq!(req.current_resume, "CV");
        assert_eq!(req.tone, "friendly");
        assert!(req.missing_fields().is_empty());
    }

    #[test]
    fn test_absent_fields_are_reported_missing() {
        let req: GenerationRequest = serde_json::from_str(r#"{"tone":"bold"}"#).unwrap();
        assert_eq!(req.missing_fields(), vec!["jobDescription", "currentResume"]);
    }

    #[test]
    fn test_null_field_is_reported_missing() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"jobDescription":"JD","currentResume":null,"tone":null}"#,
        )
        .unwrap();
        assert_eq!(req.missing_fields(), vec!["currentResume", "tone"]);
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result = serde_json::from_str::<GenerationRequest>(
            r#"{"jobDescription":"JD","currentResume":"CV","tone":3}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_only_field_is_accepted() {
        let req = GenerationRequest {
            job_description: "JD".into(),
            current_resume: "CV".into(),
            tone: "   ".into(),
        };
        assert!(req.missing_fields().is_empty());
    }

    #[test]
    fn test_generated_content_serializes_cover_letter_key() {
        let content = GeneratedContent {
            resume: "A".into(),
            cover_letter: "B".into(),
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            serde_json::json!({ "resume": "A", "coverLetter": "B" })
        );
    }
}
