use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing or a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub llm_model: String,
    pub llm_api_url: String,
    pub llm_timeout_secs: u64,
    pub llm_max_attempts: u32,
    pub max_resume_bytes: usize,
    pub min_job_description_chars: usize,
    /// JSON file mapping parent skills to their sub-skills. Unset disables the filter.
    pub subskill_map_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 30)?,
            llm_max_attempts: parse_env::<u32>("LLM_MAX_ATTEMPTS", 1)?.max(1),
            max_resume_bytes: parse_env("MAX_RESUME_BYTES", 5 * 1024 * 1024)?,
            min_job_description_chars: parse_env("MIN_JOB_DESCRIPTION_CHARS", 100)?,
            subskill_map_path: std::env::var("SUBSKILL_MAP_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Upper bound for a single hosted-model call.
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Upper bound for one collaborator call, retries and backoff included.
    pub fn llm_call_budget(&self) -> Duration {
        self.llm_settings().call_budget()
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_key: self.anthropic_api_key.clone(),
            model: self.llm_model.clone(),
            api_url: self.llm_api_url.clone(),
            timeout: self.llm_timeout(),
            max_attempts: self.llm_max_attempts,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
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
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler and router tests. Never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            anthropic_api_key: "test-key".to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_timeout_secs: 5,
            llm_max_attempts: 1,
            max_resume_bytes: 1024,
            min_job_description_chars: 20,
            subskill_map_path: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
