//! Configuration loading and persistence.

use super::Config;
use crate::env;
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer; plain JSON is valid JSON5
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.search.limit == 0 {
            errors.push("Search limit must be greater than 0".to_string());
        }
        if self.search.limit > 100 {
            errors.push(format!(
                "Search limit {} exceeds maximum of 100",
                self.search.limit
            ));
        }

        if self.storage.store_file.trim().is_empty() {
            errors.push("Storage store_file must not be empty".to_string());
        }
        if self.storage.images_dir.trim().is_empty() {
            errors.push("Storage images_dir must not be empty".to_string());
        }

        if self.embeddings.model.trim().is_empty() {
            errors.push("Embeddings model must not be empty".to_string());
        }
        if let Err(e) = url::Url::parse(&self.embeddings.base_url) {
            errors.push(format!(
                "Invalid embeddings base_url '{}': {}",
                self.embeddings.base_url, e
            ));
        }
        if self.embeddings.dimension == Some(0) {
            errors.push("Embeddings dimension must be greater than 0".to_string());
        }

        if self.summarizer.enabled {
            if self.summarizer.model.trim().is_empty() {
                errors.push("Summarizer is enabled but model is empty".to_string());
            }
            if let Err(e) = url::Url::parse(&self.summarizer.base_url) {
                errors.push(format!(
                    "Invalid summarizer base_url '{}': {}",
                    self.summarizer.base_url, e
                ));
            }
            if self.summarizer.max_tokens == 0 {
                errors.push("Summarizer max_tokens must be greater than 0".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Load configuration from an explicit path (if given) or the default path.
    ///
    /// A missing default file yields the defaults; a missing explicit path is
    /// an error. Environment overrides are applied either way.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::load_default() {
                Ok(config) => config,
                Err(ConfigError::NotFound(_)) => Self::default(),
                Err(e) => return Err(e),
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Honor `SECONDBRAIN_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Some(dir) = env::get_var(env::vars::DATA_DIR) {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if env::get_var(env::vars::SUMMARIZER).is_some() {
            self.summarizer.enabled = env::get_bool(env::vars::SUMMARIZER);
        }
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.data_dir {
            Some(dir) => Ok(paths::expand_tilde(&dir.to_string_lossy())),
            None => paths::data_dir(),
        }
    }

    /// Resolved vector store file path.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join(&self.storage.store_file))
    }

    /// Resolved image directory.
    pub fn images_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join(&self.storage.images_dir))
    }
}
