use tracing::{debug, warn};

use super::{text_len, SplitOptions};

/// Greedily pack sentence units into raw (unsuffixed) chunks.
///
/// Rules, applied per unit in order:
/// - Append the unit if the chunk plus a forecast suffix stays within `max_len`
/// - Otherwise fall back to comma-separated parts, appending each part that fits
/// - A part or unit that does not fit closes the chunk and starts the next one,
///   even if it alone exceeds the ceiling
/// - Close the chunk as soon as it reaches `soft_flush`
///
/// Chunks never span two sections.
///
/// # Arguments
/// * `sections` - Units of each delimiter-bounded section
/// * `original_len` - Length of the whole trimmed input, used for the suffix forecast
/// * `options` - Length limits
pub fn pack(sections: &[Vec<String>], original_len: usize, options: &SplitOptions) -> Vec<String> {
    let mut packer = Packer::new(original_len, options);

    for (section_idx, units) in sections.iter().enumerate() {
        debug!(section = section_idx, units = units.len(), "packing section");
        for unit in units {
            packer.push_unit(unit);
        }
        packer.flush();
    }

    packer.chunks
}

struct Packer<'a> {
    options: &'a SplitOptions,
    /// Forecast of the final chunk count, fixed for the whole input
    estimated_total: usize,
    chunks: Vec<String>,
    current: String,
    current_len: usize,
}

impl<'a> Packer<'a> {
    fn new(original_len: usize, options: &'a SplitOptions) -> Self {
        Self {
            options,
            estimated_total: original_len.div_ceil(options.estimate_divisor.max(1)),
            chunks: Vec::new(),
            current: String::new(),
            current_len: 0,
        }
    }

    fn push_unit(&mut self, unit: &str) {
        let unit = unit.trim();
        let budget = self.suffix_budget();

        if self.fits(unit, budget) {
            self.append(unit);
        } else if unit.contains(',') {
            for part in unit.split_inclusive(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                if self.fits(part, budget) {
                    self.append(part);
                } else {
                    self.restart_with(part, budget);
                }
            }
        } else {
            self.restart_with(unit, budget);
        }

        if self.current_len >= self.options.soft_flush {
            self.flush();
        }
    }

    /// Length of the " (k/m)" suffix the next chunk is expected to carry.
    ///
    /// `m` is a forecast from the input length, not the final count.
    fn suffix_budget(&self) -> usize {
        text_len(&format!(
            " ({}/{})",
            self.chunks.len() + 1,
            self.estimated_total
        ))
    }

    fn fits(&self, piece: &str, budget: usize) -> bool {
        let separator = usize::from(!self.current.is_empty());
        self.current_len + separator + text_len(piece) + budget <= self.options.max_len
    }

    fn append(&mut self, piece: &str) {
        if !self.current.is_empty() {
            self.current.push(' ');
            self.current_len += 1;
        }
        self.current.push_str(piece);
        self.current_len += text_len(piece);
    }

    /// Close the current chunk and start a new one holding `piece` as is
    fn restart_with(&mut self, piece: &str, budget: usize) {
        self.flush();
        let piece_len = text_len(piece);
        if piece_len + budget > self.options.max_len {
            warn!(
                len = piece_len,
                max_len = self.options.max_len,
                "piece exceeds chunk budget, emitting oversized chunk"
            );
        }
        self.current.push_str(piece);
        self.current_len = piece_len;
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.chunks.push(std::mem::take(&mut self.current));
        }
        self.current_len = 0;
    }
}

#[cfg(test)]
mod packer_tests {
    use super::*;

    fn units(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sections() {
        let chunks = pack(&[], 0, &SplitOptions::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_small_units_merge() {
        let sections = vec![units(&["One.", "Two.", "Three."])];
        let chunks = pack(&sections, 15, &SplitOptions::default());
        assert_eq!(chunks, vec!["One. Two. Three."]);
    }

    #[test]
    fn test_sections_never_merge() {
        let sections = vec![units(&["A."]), units(&["B."])];
        let chunks = pack(&sections, 13, &SplitOptions::default());
        assert_eq!(chunks, vec!["A.", "B."]);
    }

    #[test]
    fn test_soft_flush_closes_chunk() {
        // 150 + 1 + 60 = 211 >= 200, so the chunk closes after the second unit
        let first = format!("{}.", "a".repeat(149));
        let second = format!("{}.", "b".repeat(59));
        let third = "c.".to_string();
        let sections = vec![vec![first.clone(), second.clone(), third.clone()]];

        let chunks = pack(&sections, 300, &SplitOptions::default());

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{} {}", first, second));
        assert_eq!(chunks[1], third);
    }

    #[test]
    fn test_suffix_budget_reserved() {
        // Forecast is ceil(400 / 200) = 2, so " (1/2)" reserves 6 characters.
        // 190 + 1 + 85 + 6 = 282 > 280 forces a new chunk.
        let first = format!("{}.", "a".repeat(189));
        let second = format!("{}.", "b".repeat(84));
        let sections = vec![vec![first.clone(), second.clone()]];

        let chunks = pack(&sections, 400, &SplitOptions::default());

        assert_eq!(chunks, vec![first, second]);
    }

    #[test]
    fn test_budget_uses_forecast_not_final_count() {
        // A short input forecasts a single chunk: " (1/1)" is 6 characters,
        // so 150 + 1 + 123 + 6 = 280 still fits.
        let first = format!("{}.", "a".repeat(149));
        let second = format!("{}.", "b".repeat(122));
        let sections = vec![vec![first.clone(), second.clone()]];

        let chunks = pack(&sections, 180, &SplitOptions::default());

        assert_eq!(chunks, vec![format!("{} {}", first, second)]);
    }

    #[test]
    fn test_joining_space_counts_toward_fit() {
        // 150 + 1 + 124 + 6 = 281, one over the ceiling because of the space
        let first = format!("{}.", "a".repeat(149));
        let second = format!("{}.", "b".repeat(123));
        let sections = vec![vec![first.clone(), second.clone()]];

        let chunks = pack(&sections, 180, &SplitOptions::default());

        assert_eq!(chunks, vec![first, second]);
    }

    #[test]
    fn test_oversized_unit_without_commas_kept_whole() {
        let long = "x".repeat(400);
        let sections = vec![units(&["Hi.", &long])];

        let chunks = pack(&sections, 404, &SplitOptions::default());

        assert_eq!(chunks, vec!["Hi.".to_string(), long]);
    }

    #[test]
    fn test_oversized_comma_part_kept_whole() {
        let long = "z".repeat(320);
        let unit = format!("Lead in, {long}, tail part.");
        let sections = vec![vec![unit.clone()]];

        let chunks = pack(&sections, text_len(&unit), &SplitOptions::default());

        assert_eq!(
            chunks,
            vec!["Lead in,".to_string(), format!("{long},"), "tail part.".to_string()]
        );
        assert!(text_len(&chunks[1]) > 280);
        assert_eq!(chunks.join(" "), unit);
    }

    #[test]
    fn test_zero_estimate_divisor_does_not_panic() {
        let mut options = SplitOptions::default();
        options.estimate_divisor = 0;
        let sections = vec![units(&["Hi."])];

        let chunks = pack(&sections, 3, &options);

        assert_eq!(chunks, vec!["Hi."]);
    }

    #[test]
    fn test_comma_fallback_keeps_commas() {
        let part = "y".repeat(100);
        let unit = format!("{part}, {part}, {part}, {part}.");
        let sections = vec![vec![unit]];

        let chunks = pack(&sections, 410, &SplitOptions::default());

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(text_len(chunk) <= 280, "chunk too long: {}", chunk.len());
        }
        let rejoined = chunks.join(" ");
        assert_eq!(rejoined, format!("{part}, {part}, {part}, {part}."));
    }
}
