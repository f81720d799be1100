mod entry;
mod error;
mod log;
mod recorder;


pub use entry::{preview, HistoryEntry};
pub use error::HistoryError;
pub use log::HistoryLog;
pub use recorder::{Clock, HistoryRecorder, IdSource, SystemClock, UuidSource};
