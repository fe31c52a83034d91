use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Every variable is optional: with nothing set, the page goes to stdout.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the rendered page is written to. `None` means stdout.
    pub output_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_path: std::env::var("OUTPUT_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
