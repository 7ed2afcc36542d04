//! Local filesystem sinks.
//!
//! Output files land in one flat directory and are overwritten on each run.
//! Writes are atomic (write to temp, then rename) so a failed run never
//! leaves a half-written file behind.

use std::path::PathBuf;

use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::TopicSummary;

/// Fixed column set for the topics CSV file.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: Option<u64>,
    title: Option<&'a str>,
    posts_count: Option<i64>,
    views: Option<i64>,
    like_count: Option<i64>,
    created_at: Option<&'a str>,
}

impl<'a> From<&'a TopicSummary> for CsvRow<'a> {
    fn from(topic: &'a TopicSummary) -> Self {
        Self {
            id: topic.id,
            title: topic.title.as_deref(),
            posts_count: topic.posts_count,
            views: topic.views,
            like_count: topic.like_count,
            created_at: topic.created_at.as_deref(),
        }
    }
}

/// Local filesystem storage rooted at the output directory.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Write JSON data with 2-space indentation, non-ASCII preserved.
    pub async fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(name, &bytes).await
    }

    /// Write topics as CSV with the fixed six-column header.
    ///
    /// An empty slice is a no-op: nothing is created or overwritten.
    pub async fn write_topics_csv(&self, name: &str, topics: &[TopicSummary]) -> Result<()> {
        if topics.is_empty() {
            log::warn!("No topics to save, skipping {name}");
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        for topic in topics {
            writer.serialize(CsvRow::from(topic))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;

        self.write_bytes(name, &bytes).await
    }

    /// Get the full path for an output file name.
    fn path(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
