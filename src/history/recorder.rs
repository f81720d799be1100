use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::{preview, HistoryEntry};
use crate::splitter::SplitResult;

/// Source of unique history entry ids
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Source of entry timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Wall clock, truncated to the millisecond precision entries are stored with
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// Builds history entries for finished splits
pub struct HistoryRecorder {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    preview_len: usize,
}

impl HistoryRecorder {
    /// Recorder with UUID ids and the system clock
    pub fn new(preview_len: usize) -> Self {
        Self::with_sources(UuidSource, SystemClock, preview_len)
    }

    /// Recorder with caller-supplied id and time sources
    pub fn with_sources(
        ids: impl IdSource + 'static,
        clock: impl Clock + 'static,
        preview_len: usize,
    ) -> Self {
        Self {
            ids: Box::new(ids),
            clock: Box::new(clock),
            preview_len,
        }
    }

    /// Archive `chunks`, produced from the trimmed input `text`
    pub fn record(&self, text: &str, chunks: &[SplitResult]) -> HistoryEntry {
        HistoryEntry {
            id: self.ids.next_id(),
            timestamp: self.clock.now(),
            preview: preview(text, self.preview_len),
            chunks: chunks.to_vec(),
            total_chunks: chunks.len(),
            original_text: text.to_string(),
        }
    }
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new(100)
    }
}
