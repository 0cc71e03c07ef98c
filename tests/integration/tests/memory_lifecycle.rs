//! End-to-end memory lifecycle tests.
//!
//! These drive `MemoryManager` with a deterministic embedder and verify the
//! create, search, and list behaviour a user relies on.

use chrono::NaiveDate;
use secondbrain_core::Config;
use secondbrain_integration_tests::{FailingSummarizer, FirstWordsSummarizer, LetterEmbedder};
use secondbrain_memory::record::keys;
use secondbrain_memory::summarize::FAILURE_PREFIX;
use secondbrain_memory::{
    EmbeddingProvider, FileVectorStore, ImageStore, MemoryEntry, MemoryError, MemoryManager,
    MemoryVectorStore, NewMemory, SearchQuery, VectorStore,
};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn in_memory() -> (MemoryManager, Arc<LetterEmbedder>, Arc<MemoryVectorStore>) {
    let embedder = Arc::new(LetterEmbedder::default());
    let store = Arc::new(MemoryVectorStore::new());
    (MemoryManager::new(embedder.clone(), store.clone()), embedder, store)
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_side_effects() {
    let (manager, embedder, store) = in_memory();

    let err = manager.create(NewMemory::new("")).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(embedder.calls(), 0);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_created_text_is_listed_verbatim() {
    let (manager, _, _) = in_memory();
    let text = "  Remember: the spare key is under the blue pot!  ";

    let id = manager.create(NewMemory::new(text)).await.unwrap();

    let all = manager.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].text, text);
    assert_eq!(all[0].embedding.len(), 26);
}

#[tokio::test]
async fn test_search_needs_query_or_date() {
    let (manager, embedder, _) = in_memory();
    manager.create(NewMemory::new("buy milk")).await.unwrap();

    let err = manager.search(SearchQuery::new("")).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(embedder.calls(), 1);
}

#[tokio::test]
async fn test_date_scenario() {
    let (manager, embedder, _) = in_memory();
    let a = manager
        .create(NewMemory::new("buy milk").with_reminder(date(2025, 1, 10)))
        .await
        .unwrap();
    manager
        .create(NewMemory::new("call mom").with_reminder(date(2025, 2, 1)))
        .await
        .unwrap();
    let calls = embedder.calls();

    let ids: Vec<_> = manager
        .search(SearchQuery::due_by(date(2025, 1, 15)))
        .await
        .unwrap()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![a]);

    let results = manager
        .search(SearchQuery::due_by(date(2025, 1, 5)))
        .await
        .unwrap();
    assert_eq!(results.candidate_count(), 2);
    assert_eq!(results.count(), 0);

    assert_eq!(embedder.calls(), calls, "date-only search must not embed");
}

#[tokio::test]
async fn test_semantic_search_caps_candidates_at_ten() {
    let (manager, _, _) = in_memory();
    for i in 0..25 {
        manager
            .create(NewMemory::new(format!("grocery list item {}", i)))
            .await
            .unwrap();
    }

    let results = manager.search(SearchQuery::new("grocery")).await.unwrap();
    assert_eq!(results.candidate_count(), 10);
    assert_eq!(results.count(), 10);
}

#[tokio::test]
async fn test_semantic_search_preserves_store_order() {
    let (manager, embedder, store) = in_memory();
    manager.create(NewMemory::new("zzzz")).await.unwrap();
    manager.create(NewMemory::new("milk")).await.unwrap();
    manager.create(NewMemory::new("mild milk")).await.unwrap();

    let query = SearchQuery::new("milk");
    let query_vector = embedder.embed_one(&query.text).await.unwrap();
    let expected: Vec<_> = store
        .nearest(&query_vector, query.limit)
        .await
        .unwrap()
        .into_iter()
        .map(|(entry, _)| entry.content)
        .collect();

    let actual: Vec<_> = manager.search(query).await.unwrap().map(|r| r.text).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual[0], "milk");
    assert_eq!(actual.len(), 3);
}

#[tokio::test]
async fn test_undated_and_unparsable_excluded_only_when_filtering() {
    let (manager, _, store) = in_memory();
    manager
        .create(NewMemory::new("dated").with_reminder(date(2025, 1, 1)))
        .await
        .unwrap();
    manager.create(NewMemory::new("undated")).await.unwrap();
    store
        .insert(
            MemoryEntry::new("garbled", vec![1.0; 26]).with_metadata(keys::REMINDER_DATE, "someday"),
        )
        .await
        .unwrap();

    let all: Vec<_> = manager
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.text)
        .collect();
    assert_eq!(all, vec!["dated", "undated", "garbled"]);

    let filtered: Vec<_> = manager
        .search(SearchQuery::due_by(date(2030, 1, 1)))
        .await
        .unwrap()
        .map(|r| r.text)
        .collect();
    assert_eq!(filtered, vec!["dated"]);
}

#[tokio::test]
async fn test_failed_summary_is_visible() {
    let embedder = Arc::new(LetterEmbedder::default());
    let store = Arc::new(MemoryVectorStore::new());
    let manager = MemoryManager::new(embedder, store)
        .with_summarizer(Arc::new(FailingSummarizer("service unavailable")));

    manager
        .create(NewMemory::new("plan the trip").with_summary())
        .await
        .unwrap();

    let record = manager.list_all().await.unwrap().remove(0);
    let summary = record.summary.expect("summary must be present");
    assert!(summary.starts_with(FAILURE_PREFIX));
    assert!(summary.contains("service unavailable"));
}

#[tokio::test]
async fn test_successful_summary_is_stored() {
    let manager = MemoryManager::new(
        Arc::new(LetterEmbedder::default()),
        Arc::new(MemoryVectorStore::new()),
    )
    .with_summarizer(Arc::new(FirstWordsSummarizer(2)));

    manager
        .create(NewMemory::new("renew passport before the summer"))
        .await
        .unwrap();
    manager
        .create(NewMemory::new("book dentist appointment").with_summary())
        .await
        .unwrap();

    let records = manager.list_all().await.unwrap();
    assert!(records[0].summary.is_none(), "summary only when requested");
    assert_eq!(records[1].summary.as_deref(), Some("book dentist"));
}

#[tokio::test]
async fn test_list_all_is_repeatable() {
    let (manager, _, _) = in_memory();
    for text in ["one", "two", "three"] {
        manager.create(NewMemory::new(text)).await.unwrap();
    }

    let first = manager.list_all().await.unwrap();
    let second = manager.list_all().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_file_backed_memories_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memories.json");

    {
        let store = Arc::new(FileVectorStore::new(path.clone()).unwrap());
        let manager = MemoryManager::new(Arc::new(LetterEmbedder::default()), store);
        manager
            .create(NewMemory::new("buy milk").with_reminder(date(2025, 1, 10)))
            .await
            .unwrap();
        manager
            .create(NewMemory::new("call mom").with_reminder(date(2025, 2, 1)))
            .await
            .unwrap();
    }

    let store = Arc::new(FileVectorStore::new(path).unwrap());
    let manager = MemoryManager::new(Arc::new(LetterEmbedder::default()), store);

    let texts: Vec<_> = manager
        .search(SearchQuery::due_by(date(2025, 1, 15)))
        .await
        .unwrap()
        .map(|r| r.text)
        .collect();
    assert_eq!(texts, vec!["buy milk"]);
}

#[tokio::test]
async fn test_image_attachment_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(dir.path().join("images"));
    let manager = MemoryManager::new(
        Arc::new(LetterEmbedder::default()),
        Arc::new(MemoryVectorStore::new()),
    )
    .with_images(images.clone());

    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(8, 8, image::Rgb([10, 120, 200])))
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageOutputFormat::Png)
        .unwrap();

    let id = manager
        .create(NewMemory::new("photo of the parking spot").with_image(png))
        .await
        .unwrap();

    let record = manager.list_all().await.unwrap().remove(0);
    assert_eq!(record.image_path.as_deref(), Some(images.path_for(&id).as_path()));
    assert!(record.image().is_some());

    std::fs::remove_file(images.path_for(&id)).unwrap();
    let record = manager.list_all().await.unwrap().remove(0);
    assert!(record.image_path.is_some(), "reference is kept");
    assert!(record.image().is_none(), "missing file degrades to no image");
}

#[tokio::test]
async fn test_manager_from_config_uses_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.storage.data_dir = Some(dir.path().to_path_buf());

    let manager = MemoryManager::from_config(&config, None).unwrap();
    assert_eq!(manager.count().await.unwrap(), 0);

    // No API key: creating fails at the embedding step and stores nothing
    let err = manager.create(NewMemory::new("note")).await.unwrap_err();
    assert!(!err.is_validation());
    assert!(!dir.path().join("memories.json").exists());
}

/// Stands in for a different embedding model with a smaller vector size.
struct SmallModel;

#[async_trait::async_trait]
impl EmbeddingProvider for SmallModel {
    fn dimension(&self) -> usize {
        3
    }

    async fn embed(&self, texts: &[String]) -> secondbrain_memory::Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![0.5, 0.5, 0.5]).collect())
    }
}

#[tokio::test]
async fn test_switching_embedding_model_fails_semantic_search() {
    let (manager, _, store) = in_memory();
    manager.create(NewMemory::new("buy milk")).await.unwrap();
    manager.create(NewMemory::new("call mom")).await.unwrap();

    let switched = MemoryManager::new(Arc::new(SmallModel), store);
    let err = switched.search(SearchQuery::new("milk")).await.unwrap_err();
    assert!(matches!(err, MemoryError::Store(_)));

    // Date-only search does not embed, so it still works
    let results = switched
        .search(SearchQuery::due_by(date(2099, 1, 1)))
        .await
        .unwrap();
    assert_eq!(results.candidate_count(), 2);
}
