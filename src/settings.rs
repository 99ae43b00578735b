use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "ORC";
const DEFAULT_BASE_URL: &str = "https://data.orc.org/public/WPub.dll/CC";
const DEFAULT_OUTPUT_DIR: &str = "JSON_certificates";
const DEFAULT_USER_AGENT: &str = concat!("orc_scraper/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: i64 = 30;

/// Runtime settings, read from `ORC_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Certificate ids are appended to this URL.
    pub base_url: String,
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(ENV_PREFIX)
    }

    fn from_env(prefix: &str) -> Result<Self> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Invalid ORC_* settings")
    }
}

// ── Tests ──
