use std::collections::HashMap;

use super::{HistoryEntry, HistoryError};

/// Append-only log of past splits.
///
/// Entries are stored in insertion order with an id index; iteration yields
/// the newest entry first. Nothing is evicted unless the owner calls
/// [`HistoryLog::clear`] or [`HistoryLog::retain`].
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    /// Oldest first
    entries: Vec<HistoryEntry>,
    /// Entry id -> position in `entries`
    positions: HashMap<String, usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from entries listed newest first
    pub fn from_newest_first(entries: Vec<HistoryEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries.into_iter().rev() {
            log.push(entry);
        }
        log
    }

    /// Add an entry as the newest one, replacing any entry with the same id
    pub fn push(&mut self, entry: HistoryEntry) {
        if let Some(pos) = self.positions.remove(&entry.id) {
            self.take_at(pos);
        }
        self.positions.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Delete an entry, returning it
    pub fn remove(&mut self, id: &str) -> Result<HistoryEntry, HistoryError> {
        let pos = self
            .positions
            .remove(id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;

        Ok(self.take_at(pos))
    }

    /// Remove the entry at `pos` and shift the positions after it
    fn take_at(&mut self, pos: usize) -> HistoryEntry {
        let entry = self.entries.remove(pos);
        for later in &self.entries[pos..] {
            if let Some(slot) = self.positions.get_mut(&later.id) {
                *slot -= 1;
            }
        }
        entry
    }

    /// Keep only the entries matching `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&HistoryEntry) -> bool) {
        self.entries.retain(|entry| keep(entry));
        self.reindex();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Up to `count` entries starting `offset` places from the newest
    pub fn window(&self, offset: usize, count: usize) -> Vec<&HistoryEntry> {
        self.iter().skip(offset).take(count).collect()
    }

    fn reindex(&mut self) {
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.id.clone(), pos))
            .collect();
    }
}
