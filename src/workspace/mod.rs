mod page;


pub use page::Pager;

use tracing::{debug, info};

use crate::config::ConfigError;
use crate::history::{HistoryEntry, HistoryError, HistoryLog, HistoryRecorder};
use crate::splitter::{
    split_text_with, text_len, PunctuationSegmenter, Segmenter, SplitOptions, SplitResult,
};

/// Working state around the splitter: the current input and results, the
/// history log, the history page cursor and the selected entry.
///
/// Only the history log outlives a session; everything else starts empty.
pub struct Workspace {
    options: SplitOptions,
    segmenter: Box<dyn Segmenter>,
    recorder: HistoryRecorder,
    input_text: String,
    results: Vec<SplitResult>,
    history: HistoryLog,
    pager: Pager,
    selected_id: Option<String>,
}

impl Workspace {
    /// Empty workspace with the default segmenter, UUID ids and the system clock.
    ///
    /// Fails when the options are out of range.
    pub fn new(options: SplitOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: SplitOptions) -> Self {
        let recorder = HistoryRecorder::new(options.preview_len);
        Self {
            options,
            segmenter: Box::new(PunctuationSegmenter),
            recorder,
            input_text: String::new(),
            results: Vec::new(),
            history: HistoryLog::new(),
            pager: Pager::default(),
            selected_id: None,
        }
    }

    /// Replace the sentence segmenter
    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    /// Replace the history recorder (id and time sources)
    pub fn with_recorder(mut self, recorder: HistoryRecorder) -> Self {
        self.recorder = recorder;
        self
    }

    /// Set the history page size
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.pager = Pager::new(items_per_page);
        self
    }

    /// Start from a persisted log; working state stays empty
    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = history;
        self.pager.reset();
        self
    }

    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Length of the current input
    pub fn character_count(&self) -> usize {
        text_len(&self.input_text)
    }

    pub fn results(&self) -> &[SplitResult] {
        &self.results
    }

    pub fn total_chunks(&self) -> usize {
        self.results.len()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Drop the working results and input
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.input_text.clear();
    }

    /// Split the current input.
    ///
    /// The previous results and input are cleared first, so blank input
    /// leaves an empty workspace and records nothing. Otherwise the new
    /// results become current and the new history entry is selected.
    pub fn split(&mut self) -> Option<&HistoryEntry> {
        let text = self.input_text.trim().to_string();
        self.clear_results();

        if text.is_empty() {
            debug!("blank input, nothing to split");
            return None;
        }

        let results = split_text_with(self.segmenter.as_ref(), &text, &self.options);
        let entry = self.recorder.record(&text, &results);
        info!(
            id = %entry.id,
            chunks = entry.total_chunks,
            chars = text_len(&text),
            "recorded split"
        );

        let id = entry.id.clone();
        self.results = results;
        self.history.push(entry);
        self.selected_id = Some(id.clone());
        self.history.get(&id)
    }

    /// Set the input and split it
    pub fn split_text(&mut self, text: impl Into<String>) -> Option<&HistoryEntry> {
        self.set_input_text(text);
        self.split()
    }

    /// Make a stored split current again.
    ///
    /// The working state receives copies; the stored entry is left untouched.
    pub fn load_from_history(
        &mut self,
        id: &str,
    ) -> Result<(&[SplitResult], &str), HistoryError> {
        let entry = self
            .history
            .get(id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;

        self.results = entry.chunks.clone();
        self.input_text = entry.original_text.clone();
        self.selected_id = Some(id.to_string());
        debug!(id, chunks = self.results.len(), "loaded split from history");

        Ok((self.results.as_slice(), self.input_text.as_str()))
    }

    /// Flag the working result with this 1-based index as copied.
    ///
    /// Returns false when no result carries that index.
    pub fn mark_as_copied(&mut self, index: usize) -> bool {
        match self.results.iter_mut().find(|r| r.index == index) {
            Some(result) => {
                result.copied = true;
                true
            }
            None => false,
        }
    }

    /// Delete a history entry, clearing the working state if it was selected
    pub fn remove_from_history(&mut self, id: &str) -> Result<HistoryEntry, HistoryError> {
        let removed = self.delete_entry(id)?;
        self.clear_if_selected(id);
        Ok(removed)
    }

    /// Delete an entry from the log and keep the page cursor in range.
    ///
    /// Working state and selection are not touched.
    pub fn delete_entry(&mut self, id: &str) -> Result<HistoryEntry, HistoryError> {
        let removed = self.history.remove(id)?;
        self.pager.clamp(self.history.len());
        debug!(id, remaining = self.history.len(), "removed history entry");
        Ok(removed)
    }

    /// Clear working state and selection if `id` is the selected entry.
    ///
    /// Returns whether anything was cleared.
    pub fn clear_if_selected(&mut self, id: &str) -> bool {
        if self.selected_id.as_deref() != Some(id) {
            return false;
        }
        self.clear_results();
        self.selected_id = None;
        true
    }

    /// Drop every history entry along with the working state
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.pager.reset();
        self.clear_results();
        self.selected_id = None;
    }

    /// Entries on the current history page, newest first
    pub fn paginated_history(&self) -> Vec<&HistoryEntry> {
        self.history
            .window(self.pager.offset(), self.pager.items_per_page())
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.pager.items_per_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.history.len())
    }

    pub fn has_next_page(&self) -> bool {
        self.pager.has_next_page(self.history.len())
    }

    pub fn has_previous_page(&self) -> bool {
        self.pager.has_previous_page()
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next_page(self.history.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous_page()
    }

    /// Jump to a history page, clamped to the last one
    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.history.len());
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::from_valid_options(SplitOptions::default())
    }
}
