//! Vector storage implementations.

use crate::embeddings::cosine_similarity;
use crate::error::MemoryError;
use crate::{MemoryEntry, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Trait for vector stores.
///
/// Entries are kept in insertion order. `get_all` enumerates in that order and
/// `nearest` breaks score ties by it.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert an entry. Fails on a duplicate id or a dimension mismatch.
    async fn insert(&self, entry: MemoryEntry) -> Result<()>;

    /// Get an entry by ID.
    async fn get(&self, id: &str) -> Result<Option<MemoryEntry>>;

    /// Return up to `limit` entries most similar to `query`, best first.
    /// Fails if `query` does not match the stored dimension.
    async fn nearest(&self, query: &[f32], limit: usize) -> Result<Vec<(MemoryEntry, f32)>>;

    /// Return every entry in insertion order.
    async fn get_all(&self) -> Result<Vec<MemoryEntry>>;

    /// Count entries.
    async fn count(&self) -> Result<usize>;
}

fn check_insert(entries: &[MemoryEntry], entry: &MemoryEntry) -> Result<()> {
    if entry.id.is_empty() {
        return Err(MemoryError::Store("Entry id must not be empty".to_string()));
    }
    if entries.iter().any(|e| e.id == entry.id) {
        return Err(MemoryError::Store(format!("Duplicate entry id: {}", entry.id)));
    }
    check_dimension(entries, entry.embedding.len())
}

/// All entries share the first entry's dimension; an empty store accepts any.
fn check_dimension(entries: &[MemoryEntry], len: usize) -> Result<()> {
    if let Some(first) = entries.first() {
        if first.embedding.len() != len {
            return Err(MemoryError::Store(format!(
                "Embedding dimension mismatch: expected {}, got {}",
                first.embedding.len(),
                len
            )));
        }
    }
    Ok(())
}

fn rank(
    entries: &[MemoryEntry],
    query: &[f32],
    limit: usize,
) -> Result<Vec<(MemoryEntry, f32)>> {
    check_dimension(entries, query.len())?;

    let mut results: Vec<(MemoryEntry, f32)> = entries
        .iter()
        .map(|entry| {
            let score = cosine_similarity(query, &entry.embedding);
            (entry.clone(), score)
        })
        .collect();

    // Stable sort, so equal scores keep insertion order
    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(limit);
    Ok(results)
}

/// In-memory vector store.
pub struct MemoryVectorStore {
    entries: RwLock<Vec<MemoryEntry>>,
}

impl Default for MemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVectorStore {
    /// Create a new in-memory vector store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn insert(&self, entry: MemoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        check_insert(&entries, &entry)?;
        entries.push(entry);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn nearest(&self, query: &[f32], limit: usize) -> Result<Vec<(MemoryEntry, f32)>> {
        let entries = self.entries.read().await;
        rank(&entries, query, limit)
    }

    async fn get_all(&self) -> Result<Vec<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }

    async fn count(&self) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.len())
    }
}

/// File-backed vector store with JSON persistence.
///
/// Every insert is persisted to disk via an atomic write (write to tmp, then
/// rename). A failed write leaves both the file and the in-memory view unchanged.
pub struct FileVectorStore {
    path: PathBuf,
    entries: RwLock<Vec<MemoryEntry>>,
}

impl FileVectorStore {
    /// Create a new file-backed vector store.
    ///
    /// If the file at `path` exists, its contents are deserialized into memory.
    /// If the file does not exist, the store starts empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        let entries: Vec<MemoryEntry> = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded vector store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Atomically persist the given entries to disk.
    fn save(&self, entries: &[MemoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        let data = serde_json::to_string_pretty(entries)?;
        std::fs::write(&tmp_path, data)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl VectorStore for FileVectorStore {
    async fn insert(&self, entry: MemoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        check_insert(&entries, &entry)?;
        entries.push(entry);
        if let Err(e) = self.save(&entries) {
            entries.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn nearest(&self, query: &[f32], limit: usize) -> Result<Vec<(MemoryEntry, f32)>> {
        let entries = self.entries.read().await;
        rank(&entries, query, limit)
    }

    async fn get_all(&self) -> Result<Vec<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }

    async fn count(&self) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.len())
    }
}
