use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Body limit for `POST /api/pdf-extract`.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: optional_env("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// Config for in-process tests; never reads the environment.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_reports_variable_name() {
        let err = require_env("CAREERCRAFT_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(err.to_string().contains("CAREERCRAFT_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_optional_env_falls_back_to_default() {
        assert_eq!(
            optional_env("CAREERCRAFT_TEST_UNSET_MODEL", DEFAULT_GEMINI_MODEL),
            "gemini-1.5-flash"
        );
    }
}
