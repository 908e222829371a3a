use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// All variables are optional; the built-in skill vocabulary is used unless
/// `SKILLS_FILE` points at a newline-separated replacement list.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional path to a skills file. Loading it fails fast at startup if
    /// the path is bad or the list is empty; there is no remote fallback.
    pub skills_file: Option<String>,
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
            skills_file: std::env::var("SKILLS_FILE").ok(),
        })
    }
}
