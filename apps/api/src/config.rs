use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Application configuration loaded from environment variables.
/// Nothing is required: every variable has a default, and search augmentation
/// is simply disabled when its credentials are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_path: PathBuf,
    pub session_init_delay: Duration,
    pub assistant_delay: Duration,
    pub search: Option<SearchCredentials>,
}

/// Credentials for the optional roadmap search augmentation.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            storage_path: std::env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".mentor/storage.json")),
            session_init_delay: millis_env("SESSION_INIT_DELAY_MS", 1000)?,
            assistant_delay: millis_env("ASSISTANT_DELAY_MS", 2000)?,
            search: SearchCredentials::from_parts(
                optional_env("GOOGLE_API_KEY"),
                optional_env("SEARCH_ENGINE_ID"),
                optional_env("SEARCH_ENDPOINT"),
            ),
        })
    }
}

impl SearchCredentials {
    /// Both the key and the engine id must be present; otherwise search is off.
    pub fn from_parts(
        api_key: Option<String>,
        engine_id: Option<String>,
        endpoint: Option<String>,
    ) -> Option<Self> {
        Some(SearchCredentials {
            api_key: api_key?,
            engine_id: engine_id?,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
        })
    }
}

/// Reads a variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn millis_env(key: &str, default_ms: u64) -> Result<Duration> {
    let ms = match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default_ms,
    };
    Ok(Duration::from_millis(ms))
}
