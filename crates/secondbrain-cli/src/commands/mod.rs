//! CLI command implementations.

pub mod config;
pub mod doctor;
pub mod list;
pub mod remember;
pub mod search;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use secondbrain_core::{env, Config, ConfigError};
use secondbrain_memory::MemoryManager;

/// Parse a `YYYY-MM-DD` date, or `today`.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD or 'today', got '{}'", value))
}

/// Require a loaded, valid configuration.
pub fn validated(config: Result<Config, ConfigError>) -> anyhow::Result<Config> {
    let config = config.context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Build the memory manager for the effective configuration.
pub fn open_manager(config: &Config) -> anyhow::Result<MemoryManager> {
    let api_key = env::get_var(env::vars::OPENAI_API_KEY);
    MemoryManager::from_config(config, api_key).context("Failed to open memory store")
}
