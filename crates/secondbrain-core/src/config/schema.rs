//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main SecondBrain configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where memories and images live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Embedding provider settings.
    #[serde(default)]
    pub embeddings: EmbeddingsConfig,

    /// Optional summarization of new memories.
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Reminder defaults.
    #[serde(default)]
    pub reminders: RemindersConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to `~/.secondbrain/data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Vector store file name, relative to the data directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Image directory name, relative to the data directory.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_store_file() -> String {
    "memories.json".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: default_store_file(),
            images_dir: default_images_dir(),
        }
    }
}

/// Embeddings configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsConfig {
    /// Embedding model name.
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Vector dimension, for models the provider does not know.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<usize>,
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

impl Default for EmbeddingsConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            base_url: default_base_url(),
            dimension: None,
        }
    }
}

/// Summarizer configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Whether a summarizer is available to `remember --summarize`.
    #[serde(default)]
    pub enabled: bool,

    /// Chat model used for summaries.
    #[serde(default = "default_summary_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum tokens per summary.
    #[serde(default = "default_summary_max_tokens")]
    pub max_tokens: usize,
}

fn default_summary_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_summary_max_tokens() -> usize {
    200
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_summary_model(),
            base_url: default_base_url(),
            max_tokens: default_summary_max_tokens(),
        }
    }
}

/// Search configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of nearest neighbours requested from the store.
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

/// Reminder configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersConfig {
    /// Days from today used when no reminder date is given.
    #[serde(default = "default_reminder_days")]
    pub default_days: u32,
}

fn default_reminder_days() -> u32 {
    7
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            default_days: default_reminder_days(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
