use regex::Regex;
use std::sync::LazyLock;

/// A run of text closed by one or more sentence-terminal marks
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]*[.!?]+").expect("sentence pattern is valid"));

/// Strategy for breaking a section into sentence-like units
pub trait Segmenter: Send + Sync {
    /// Break a trimmed, non-empty section into trimmed, non-empty units
    ///
    /// # Arguments
    /// * `section` - Text between two delimiter markers
    ///
    /// # Returns
    /// Units in reading order; joined with single spaces they reproduce the
    /// section's content
    fn segment(&self, section: &str) -> Vec<String>;
}

/// Sentence segmentation by `.`, `!` and `?` runs
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, section: &str) -> Vec<String> {
        let mut units = Vec::new();
        let mut consumed = 0;

        for sentence in SENTENCE.find_iter(section) {
            push_trimmed(&mut units, sentence.as_str());
            consumed = sentence.end();
        }

        // Unterminated tail (or the whole section when nothing matched)
        push_trimmed(&mut units, &section[consumed..]);

        units
    }
}

fn push_trimmed(units: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        units.push(text.to_string());
    }
}

#[cfg(test)]
mod segmenter_tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        PunctuationSegmenter.segment(text)
    }

    #[test]
    fn test_terminated_sentences() {
        assert_eq!(
            segment("One. Two! Three?"),
            vec!["One.", "Two!", "Three?"]
        );
    }

    #[test]
    fn test_repeated_marks_stay_attached() {
        assert_eq!(segment("Really?! Yes..."), vec!["Really?!", "Yes..."]);
    }

    #[test]
    fn test_unterminated_section_is_one_unit() {
        assert_eq!(segment("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_trailing_fragment_kept_after_sentences() {
        assert_eq!(
            segment("First sentence. And a tail"),
            vec!["First sentence.", "And a tail"]
        );
    }

    #[test]
    fn test_leading_marks_are_not_dropped() {
        assert_eq!(segment("...and then. Done"), vec!["...", "and then.", "Done"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            segment("Café ouvert. Ça va? Très bien"),
            vec!["Café ouvert.", "Ça va?", "Très bien"]
        );
    }
}
