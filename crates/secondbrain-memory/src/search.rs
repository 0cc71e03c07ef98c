//! Search queries and their results.

use crate::record::MemoryRecord;
use crate::MemoryEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Search query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Query text. May be empty when `due_by` is set.
    #[serde(default)]
    pub text: String,

    /// Only keep memories with a reminder on or before this date.
    #[serde(default)]
    pub due_by: Option<NaiveDate>,

    /// Number of nearest neighbours to request.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            due_by: None,
            limit: default_limit(),
        }
    }

    /// Browse by reminder date alone, without a semantic query.
    pub fn due_by(date: NaiveDate) -> Self {
        Self::new("").with_due_by(date)
    }

    /// Set the reminder cutoff.
    pub fn with_due_by(mut self, date: NaiveDate) -> Self {
        self.due_by = Some(date);
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether there is query text to embed.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Lazily filtered search results.
///
/// Yields candidates in the order the store returned them, dropping those that
/// fail the reminder-date cutoff. Consumed once.
#[derive(Debug)]
pub struct SearchResults {
    candidates: std::vec::IntoIter<MemoryEntry>,
    candidate_count: usize,
    due_by: Option<NaiveDate>,
}

impl SearchResults {
    pub(crate) fn new(candidates: Vec<MemoryEntry>, due_by: Option<NaiveDate>) -> Self {
        Self {
            candidate_count: candidates.len(),
            candidates: candidates.into_iter(),
            due_by,
        }
    }

    /// Number of candidates the store returned before filtering.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}

impl Iterator for SearchResults {
    type Item = MemoryRecord;

    fn next(&mut self) -> Option<MemoryRecord> {
        for entry in self.candidates.by_ref() {
            let record = MemoryRecord::from(entry);
            match self.due_by {
                Some(cutoff) if !record.is_due_by(cutoff) => continue,
                _ => return Some(record),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.candidates.len();
        match self.due_by {
            Some(_) => (0, Some(remaining)),
            None => (remaining, Some(remaining)),
        }
    }
}
