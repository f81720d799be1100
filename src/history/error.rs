use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History entry not found: {0}")]
    NotFound(String),
}
