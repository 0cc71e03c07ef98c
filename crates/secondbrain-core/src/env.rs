//! Environment variable handling.

use std::env;
use std::path::Path;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable as a boolean.
pub fn get_bool(name: &str) -> bool {
    get_var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Load environment variables from a `.env` file in the working directory.
pub fn load_dotenv() -> Result<(), std::io::Error> {
    load_dotenv_from(Path::new(".env"))
}

/// Load environment variables from a dotenv-style file.
///
/// Variables already present in the environment are left untouched.
pub fn load_dotenv_from(path: &Path) -> Result<(), std::io::Error> {
    if !path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);

            if env::var(key).is_err() {
                env::set_var(key, value);
            }
        }
    }
    Ok(())
}

/// Common environment variable names.
pub mod vars {
    /// API key for OpenAI-compatible endpoints.
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

    /// SecondBrain config file override.
    pub const CONFIG: &str = "SECONDBRAIN_CONFIG";

    /// SecondBrain data directory override.
    pub const DATA_DIR: &str = "SECONDBRAIN_DATA_DIR";

    /// Enable or disable the summarizer.
    pub const SUMMARIZER: &str = "SECONDBRAIN_SUMMARIZER";
}
