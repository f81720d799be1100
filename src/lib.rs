// Public API exports
pub mod config;
pub mod db;
pub mod history;
pub mod splitter;
pub mod workspace;

// Re-export main types for convenience
pub use config::{Config, ConfigError};
pub use db::HistoryStore;

pub use splitter::{
    split_text, split_text_with, PunctuationSegmenter, Segmenter, SplitOptions, SplitResult,
    DEFAULT_MAX_LEN, DEFAULT_SOFT_FLUSH, SPLIT_MARKER,
};

pub use history::{
    Clock, HistoryEntry, HistoryError, HistoryLog, HistoryRecorder, IdSource, SystemClock,
    UuidSource,
};

pub use workspace::{Pager, Workspace};
