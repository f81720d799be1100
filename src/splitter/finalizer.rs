use serde::{Deserialize, Serialize};

/// A finished, numbered chunk ready to be posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Chunk text, including the "(i/N)" suffix when there are several chunks
    pub text: String,
    /// Whether the user has copied this chunk
    pub copied: bool,
    /// 1-based position within its split
    pub index: usize,
}

/// Label raw chunks with their position.
///
/// A lone chunk is left unsuffixed; otherwise every chunk gets " (i/N)" using
/// the actual chunk count.
pub fn finalize(raw_chunks: Vec<String>) -> Vec<SplitResult> {
    let total = raw_chunks.len();

    raw_chunks
        .into_iter()
        .enumerate()
        .map(|(position, chunk)| {
            let index = position + 1;
            let text = if total > 1 {
                format!("{} ({}/{})", chunk.trim(), index, total)
            } else {
                chunk.trim().to_string()
            };

            SplitResult {
                text,
                copied: false,
                index,
            }
        })
        .collect()
}
