//! Memory capture and semantic recall for SecondBrain.
//!
//! This crate provides:
//! - Embedding generation via OpenAI-compatible APIs
//! - Vector storage and nearest-neighbour retrieval
//! - Image storage for attachments and optional note summaries
//! - [`MemoryManager`], which ties them together into `create`, `search`, and `list_all`

pub mod embeddings;
pub mod error;
pub mod images;
pub mod manager;
pub mod record;
pub mod search;
pub mod store;
pub mod summarize;

pub use embeddings::{EmbeddingProvider, OpenAIEmbeddings};
pub use error::MemoryError;
pub use images::ImageStore;
pub use manager::{MemoryManager, NewMemory};
pub use record::MemoryRecord;
pub use search::{SearchQuery, SearchResults};
pub use store::{FileVectorStore, MemoryVectorStore, VectorStore};
pub use summarize::{OpenAISummarizer, Summarizer};

use std::collections::BTreeMap;

/// Result type for memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// String metadata attached to a stored entry.
pub type Metadata = BTreeMap<String, String>;

/// A stored entry: id, document text, vector, and flat string metadata.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryEntry {
    /// Unique identifier.
    pub id: String,

    /// Text content.
    pub content: String,

    /// Vector embedding.
    pub embedding: Vec<f32>,

    /// Metadata.
    #[serde(default)]
    pub metadata: Metadata,

    /// Creation timestamp.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MemoryEntry {
    /// Create a new memory entry with a fresh id.
    pub fn new(content: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), content, embedding)
    }

    /// Create a new memory entry with a caller-chosen id.
    pub fn with_id(id: impl Into<String>, content: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            embedding,
            metadata: Metadata::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
