//! Typed view of a stored memory.

use crate::{MemoryEntry, Metadata};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};

/// Metadata keys used on stored entries.
pub mod keys {
    /// Reminder date as `YYYY-MM-DD`.
    pub const REMINDER_DATE: &str = "reminder_date";

    /// Path of the attached image.
    pub const IMAGE_PATH: &str = "image_path";

    /// Generated summary or failure placeholder.
    pub const SUMMARY: &str = "summary";
}

/// Format used to store reminder dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored reminder date. Anything unparsable is treated as absent.
pub fn parse_reminder_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "Ignoring unparsable reminder date");
            None
        }
    }
}

/// A memory as seen by callers: the note, its vector, and optional extras.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRecord {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
    pub reminder_date: Option<NaiveDate>,
    pub image_path: Option<PathBuf>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MemoryRecord {
    /// Build the metadata map stored alongside the entry. Absent fields are omitted.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        if let Some(date) = self.reminder_date {
            metadata.insert(
                keys::REMINDER_DATE.to_string(),
                date.format(DATE_FORMAT).to_string(),
            );
        }
        if let Some(path) = &self.image_path {
            metadata.insert(
                keys::IMAGE_PATH.to_string(),
                path.to_string_lossy().into_owned(),
            );
        }
        if let Some(summary) = &self.summary {
            metadata.insert(keys::SUMMARY.to_string(), summary.clone());
        }
        metadata
    }

    /// Convert into a store entry.
    pub fn into_entry(self) -> MemoryEntry {
        let metadata = self.metadata();
        MemoryEntry {
            id: self.id,
            content: self.text,
            embedding: self.embedding,
            metadata,
            created_at: self.created_at,
        }
    }

    /// Whether the reminder date is on or before `cutoff`.
    ///
    /// Records without a usable date never match.
    pub fn is_due_by(&self, cutoff: NaiveDate) -> bool {
        matches!(self.reminder_date, Some(date) if date <= cutoff)
    }

    /// The attached image, if one was recorded and still exists on disk.
    pub fn image(&self) -> Option<&Path> {
        self.image_path
            .as_deref()
            .filter(|path| path.exists())
    }
}

impl From<MemoryEntry> for MemoryRecord {
    fn from(mut entry: MemoryEntry) -> Self {
        let mut take = |key: &str| entry.metadata.remove(key).filter(|v| !v.is_empty());

        let reminder_date = take(keys::REMINDER_DATE)
            .as_deref()
            .and_then(parse_reminder_date);
        let image_path = take(keys::IMAGE_PATH).map(PathBuf::from);
        let summary = take(keys::SUMMARY);

        Self {
            id: entry.id,
            text: entry.content,
            embedding: entry.embedding,
            reminder_date,
            image_path,
            summary,
            created_at: entry.created_at,
        }
    }
}
