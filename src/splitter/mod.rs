mod finalizer;
mod options;
mod packer;
mod segmenter;


pub use finalizer::{finalize, SplitResult};
pub use options::SplitOptions;
pub use packer::pack;
pub use segmenter::{PunctuationSegmenter, Segmenter};

/// Hard ceiling for a finished, suffixed chunk
pub const DEFAULT_MAX_LEN: usize = 280;

/// Length at which an in-progress chunk is flushed early
pub const DEFAULT_SOFT_FLUSH: usize = 200;

/// Characters per chunk assumed when forecasting the chunk count
pub const DEFAULT_ESTIMATE_DIVISOR: usize = 200;

/// Explicit section boundary marker
pub const SPLIT_MARKER: &str = "[SPLIT]";

/// Length of text as counted by the splitter
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text into labelled chunks using the default sentence segmenter.
///
/// Returns an empty vector when the trimmed input is empty.
pub fn split_text(input: &str, options: &SplitOptions) -> Vec<SplitResult> {
    split_text_with(&PunctuationSegmenter, input, options)
}

/// Split text into labelled chunks with a caller-supplied segmenter
pub fn split_text_with(
    segmenter: &dyn Segmenter,
    input: &str,
    options: &SplitOptions,
) -> Vec<SplitResult> {
    let text = input.trim();
    if text.is_empty() {
        return vec![];
    }

    // An empty delimiter would cut between every character
    let sections: Vec<&str> = if options.delimiter.is_empty() {
        vec![text]
    } else {
        text.split(options.delimiter.as_str()).collect()
    };

    let sections: Vec<Vec<String>> = sections
        .into_iter()
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(|section| segmenter.segment(section))
        .collect();

    let raw_chunks = pack(&sections, text_len(text), options);
    finalize(raw_chunks)
}
