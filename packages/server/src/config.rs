use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::kernel::ai::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::kernel::deps::DEFAULT_GENERATION_TIMEOUT;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub intents_path: PathBuf,
    pub emergency_numbers_path: PathBuf,
    pub hospitals_path: PathBuf,
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    pub generation_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            intents_path: env::var("INTENTS_PATH")
                .unwrap_or_else(|_| "data/intents.json".to_string())
                .into(),
            emergency_numbers_path: env::var("EMERGENCY_NUMBERS_PATH")
                .unwrap_or_else(|_| "data/emergency_numbers_india.json".to_string())
                .into(),
            hospitals_path: env::var("HOSPITALS_PATH")
                .unwrap_or_else(|_| "data/hospitals.csv".to_string())
                .into(),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            llm_api_key: env::var("LLM_API_KEY").ok().filter(|key| !key.is_empty()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_max_tokens: env::var("LLM_MAX_TOKENS")
                .unwrap_or_else(|_| DEFAULT_MAX_TOKENS.to_string())
                .parse()
                .context("LLM_MAX_TOKENS must be a valid number")?,
            generation_timeout: generation_timeout_from(env::var("GENERATION_TIMEOUT_SECS").ok())?,
        })
    }

    /// Socket address to bind, e.g. `0.0.0.0:5000`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Whole seconds from `GENERATION_TIMEOUT_SECS`, or the default when unset
fn generation_timeout_from(value: Option<String>) -> Result<Duration> {
    match value {
        Some(secs) => Ok(Duration::from_secs(
            secs.parse()
                .context("GENERATION_TIMEOUT_SECS must be a valid number")?,
        )),
        None => Ok(DEFAULT_GENERATION_TIMEOUT),
    }
}
