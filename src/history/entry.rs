use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::splitter::SplitResult;

/// Archived result of one split operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Leading characters of the input, for listings
    pub preview: String,
    pub chunks: Vec<SplitResult>,
    pub total_chunks: usize,
    /// The trimmed input the chunks were produced from
    pub original_text: String,
}

/// First `max_chars` characters of `text`, with "..." appended when cut short
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod entry_tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview(&"a".repeat(100), 100), "a".repeat(100));
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let text = "b".repeat(101);
        assert_eq!(preview(&text, 100), format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn test_preview_counts_characters() {
        let text = "é".repeat(120);
        let result = preview(&text, 100);
        assert_eq!(result.chars().count(), 103);
        assert!(result.ends_with("é..."));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let entry = HistoryEntry {
            id: "abc".to_string(),
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
            preview: "Hi.".to_string(),
            chunks: vec![SplitResult {
                text: "Hi.".to_string(),
                copied: false,
                index: 1,
            }],
            total_chunks: 1,
            original_text: "Hi.".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["totalChunks"], 1);
        assert_eq!(json["originalText"], "Hi.");
        assert_eq!(json["timestamp"], 1_700_000_000_123i64);

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
