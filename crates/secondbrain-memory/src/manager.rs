//! The memory manager: creating, searching, and listing memories.

use crate::embeddings::{EmbeddingProvider, OpenAIEmbeddings};
use crate::error::MemoryError;
use crate::images::ImageStore;
use crate::record::MemoryRecord;
use crate::search::{SearchQuery, SearchResults};
use crate::store::{FileVectorStore, VectorStore};
use crate::summarize::{failure_placeholder, OpenAISummarizer, Summarizer};
use crate::{MemoryEntry, Result};
use chrono::NaiveDate;
use secondbrain_core::Config;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for [`MemoryManager::create`].
#[derive(Debug, Clone, Default)]
pub struct NewMemory {
    /// The note. Must not be empty.
    pub text: String,

    /// Raw image bytes (PNG or JPEG).
    pub image: Option<Vec<u8>>,

    /// Reminder date.
    pub reminder_date: Option<NaiveDate>,

    /// Ask the summarizer for a summary.
    pub summarize: bool,
}

impl NewMemory {
    /// Create a new memory request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Attach an image.
    pub fn with_image(mut self, bytes: Vec<u8>) -> Self {
        self.image = Some(bytes);
        self
    }

    /// Set a reminder date.
    pub fn with_reminder(mut self, date: NaiveDate) -> Self {
        self.reminder_date = Some(date);
        self
    }

    /// Request a summary.
    pub fn with_summary(mut self) -> Self {
        self.summarize = true;
        self
    }
}

/// Creates, searches, and lists memories on top of an embedding provider and a vector store.
pub struct MemoryManager {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    images: Option<ImageStore>,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl MemoryManager {
    /// Create a new manager.
    pub fn new(embeddings: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self {
            embeddings,
            store,
            images: None,
            summarizer: None,
        }
    }

    /// Enable image attachments.
    pub fn with_images(mut self, images: ImageStore) -> Self {
        self.images = Some(images);
        self
    }

    /// Enable summaries.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Build a manager from configuration, using a JSON file store, the
    /// image directory, and OpenAI-compatible providers.
    pub fn from_config(config: &Config, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.unwrap_or_default();

        let mut embeddings = OpenAIEmbeddings::new(api_key.clone())
            .with_model(&config.embeddings.model)
            .with_base_url(&config.embeddings.base_url);
        if let Some(dimension) = config.embeddings.dimension {
            embeddings = embeddings.with_dimension(dimension);
        }

        debug!(
            model = %config.embeddings.model,
            dimension = embeddings.dimension(),
            "Embedding provider configured"
        );

        let store = FileVectorStore::new(config.store_path()?)?;
        let mut manager = Self::new(Arc::new(embeddings), Arc::new(store))
            .with_images(ImageStore::new(config.images_path()?));

        if config.summarizer.enabled {
            let summarizer = OpenAISummarizer::new(api_key)
                .with_model(&config.summarizer.model)
                .with_base_url(&config.summarizer.base_url)
                .with_max_tokens(config.summarizer.max_tokens);
            manager = manager.with_summarizer(Arc::new(summarizer));
        }

        Ok(manager)
    }

    /// Store a new memory and return its id.
    ///
    /// Empty text is rejected before anything else happens. Embedding,
    /// image, and store failures abort the creation without leaving a record
    /// behind. A failed summary is stored as a visible placeholder instead.
    pub async fn create(&self, memory: NewMemory) -> Result<String> {
        if memory.text.trim().is_empty() {
            return Err(MemoryError::Validation(
                "memory text is required".to_string(),
            ));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let embedding = self.embeddings.embed_one(&memory.text).await?;

        let summary = if memory.summarize {
            Some(self.summarize(&memory.text).await)
        } else {
            None
        };

        let image_path = match &memory.image {
            Some(bytes) => {
                let images = self.images.as_ref().ok_or_else(|| {
                    MemoryError::Config("image attachments are not configured".to_string())
                })?;
                Some(images.save(&id, bytes)?)
            }
            None => None,
        };

        let record = MemoryRecord {
            id: id.clone(),
            text: memory.text,
            embedding,
            reminder_date: memory.reminder_date,
            image_path: image_path.clone(),
            summary,
            created_at: chrono::Utc::now(),
        };

        if let Err(e) = self.store.insert(record.into_entry()).await {
            if let (Some(images), Some(path)) = (&self.images, &image_path) {
                if let Err(cleanup) = images.remove(path) {
                    warn!(path = %path.display(), error = %cleanup, "Failed to remove orphaned image");
                }
            }
            return Err(e);
        }

        info!(id = %id, reminder = ?memory.reminder_date, "Memory saved");
        Ok(id)
    }

    async fn summarize(&self, text: &str) -> String {
        let result = match &self.summarizer {
            Some(summarizer) => summarizer.summarize(text).await,
            None => Err(MemoryError::Summarizer("no summarizer configured".to_string())),
        };

        match result {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "Summarization failed");
                failure_placeholder(&e)
            }
        }
    }

    /// Search memories by meaning, by reminder date, or both.
    ///
    /// With query text, the store's nearest neighbours are the candidates, in
    /// the store's order. Without query text a reminder cutoff is required and
    /// every stored memory is a candidate, in insertion order. The cutoff, when
    /// present, is applied lazily as the results are consumed.
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults> {
        if query.limit == 0 {
            return Err(MemoryError::Validation(
                "search limit must be at least 1".to_string(),
            ));
        }

        let candidates: Vec<MemoryEntry> = if query.has_text() {
            let query_embedding = self.embeddings.embed_one(&query.text).await?;
            self.store
                .nearest(&query_embedding, query.limit)
                .await?
                .into_iter()
                .map(|(entry, _score)| entry)
                .collect()
        } else if query.due_by.is_some() {
            self.store.get_all().await?
        } else {
            return Err(MemoryError::Validation(
                "a search query or a reminder date filter is required".to_string(),
            ));
        };

        debug!(
            candidates = candidates.len(),
            due_by = ?query.due_by,
            "Search candidates retrieved"
        );

        Ok(SearchResults::new(candidates, query.due_by))
    }

    /// Every stored memory, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<MemoryRecord>> {
        let entries = self.store.get_all().await?;
        Ok(entries.into_iter().map(MemoryRecord::from).collect())
    }

    /// Number of stored memories.
    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }
}
