//! Test doubles shared by the integration tests.

use async_trait::async_trait;
use secondbrain_memory::{EmbeddingProvider, MemoryError, Result, Summarizer};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic bag-of-letters embedder that counts how often it is called.
#[derive(Default)]
pub struct LetterEmbedder {
    calls: AtomicUsize,
}

impl LetterEmbedder {
    /// Number of `embed` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn vector(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; 26];
        for c in text.to_ascii_lowercase().chars() {
            if c.is_ascii_lowercase() {
                vector[(c as u8 - b'a') as usize] += 1.0;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for LetterEmbedder {
    fn dimension(&self) -> usize {
        26
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| Self::vector(t)).collect())
    }
}

/// Summarizer that always fails with the given reason.
pub struct FailingSummarizer(pub &'static str);

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        Err(MemoryError::Summarizer(self.0.to_string()))
    }
}

/// Summarizer that returns the first few words of the note.
pub struct FirstWordsSummarizer(pub usize);

#[async_trait]
impl Summarizer for FirstWordsSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        Ok(text
            .split_whitespace()
            .take(self.0)
            .collect::<Vec<_>>()
            .join(" "))
    }
}
