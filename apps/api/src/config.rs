use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_max_attempts: u32,
    pub llm_base_delay_ms: u64,
    pub enable_llm_ats: bool,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_max_attempts: u32 = parse_env("LLM_MAX_ATTEMPTS", 3)?;
        if llm_max_attempts == 0 {
            anyhow::bail!("LLM_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            llm_max_attempts,
            llm_base_delay_ms: parse_env("LLM_BASE_DELAY_MS", 1000)?,
            enable_llm_ats: parse_env("ENABLE_LLM_ATS", true)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
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

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("CAREERFORGE_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("CAREERFORGE_TEST_DELAY_MS", " 250 ");
        let delay: u64 = parse_env("CAREERFORGE_TEST_DELAY_MS", 1000).unwrap();
        assert_eq!(delay, 250);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CAREERFORGE_TEST_BAD_FLAG", "sometimes");
        let result: Result<bool> = parse_env("CAREERFORGE_TEST_BAD_FLAG", true);
        assert!(result.is_err());
    }

    #[test]
    fn test_require_env_rejects_blank() {
        std::env::set_var("CAREERFORGE_TEST_BLANK_KEY", "   ");
        assert!(require_env("CAREERFORGE_TEST_BLANK_KEY").is_err());
    }
}
