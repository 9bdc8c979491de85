use super::Measure;
use crate::units::Px;
use log::{trace, warn};

/// Characters that end a sentence: Western full stop, exclamation and question marks, and the
/// Devanagari danda and double danda.
pub const STRONG_TERMINATORS: [char; 5] = ['.', '!', '?', '।', '॥'];

/// How full a line must be before a sentence end is allowed to close it early
pub const EAGER_BREAK_FILL: f32 = 0.70;

/// True if `text` ends with a sentence terminator, ignoring trailing whitespace
pub fn ends_sentence(text: &str) -> bool {
    text.trim_end().ends_with(STRONG_TERMINATORS)
}

/// Greedily wraps a paragraph into lines no wider than `max_width`.
///
/// Words are whitespace-delimited and are kept whole. Each line takes as many words as fit,
/// except that once a line is more than 70% full, a word that ends a sentence also ends the
/// line. This lets lines (and so pages) end with whole sentences more often than a strict
/// greedy fill would.
///
/// A single word wider than `max_width` is not split: it is emitted on its own line and will
/// overflow when drawn.
///
/// ```
/// use textpages::layout::{wrap, MonospaceMeasure};
/// use textpages::Px;
///
/// let lines = wrap("aaa bbb ccc", Px(100.0), &MonospaceMeasure::new(Px(10.0)));
/// assert_eq!(lines, vec!["aaa bbb", "ccc"]);
/// ```
pub fn wrap<M: Measure + ?Sized>(text: &str, max_width: Px, measure: &M) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let eager_width = max_width * EAGER_BREAK_FILL;

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let width = measure.measure(&candidate);

        if width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
            if measure.measure(word) > max_width {
                warn!("word wider than the line ({word:?}, max {max_width}) will overflow");
            }
            continue;
        }

        if width > max_width {
            warn!("word wider than the line ({word:?}, max {max_width}) will overflow");
        }

        current = candidate;
        if word.ends_with(STRONG_TERMINATORS) && width > eager_width {
            lines.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    trace!("wrapped paragraph into {} lines", lines.len());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMeasure;

    fn mono() -> MonospaceMeasure {
        MonospaceMeasure::new(Px(10.0))
    }

    #[test]
    fn packs_greedily_to_width() {
        let lines = wrap("one two three four five", Px(100.0), &mono());
        assert_eq!(lines, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        // "aaaa bbbbb" is exactly 100px
        let lines = wrap("aaaa bbbbb c", Px(100.0), &mono());
        assert_eq!(lines, vec!["aaaa bbbbb", "c"]);
    }

    #[test]
    fn sentence_end_closes_a_full_enough_line() {
        // "Hello world." is 120px, past 70% of 150px
        let lines = wrap("Hello world. Next", Px(150.0), &mono());
        assert_eq!(lines, vec!["Hello world.", "Next"]);
    }

    #[test]
    fn sentence_end_on_a_short_line_keeps_packing() {
        // 120px is not past 70% of 200px
        let lines = wrap("Hello world. Next", Px(200.0), &mono());
        assert_eq!(lines, vec!["Hello world. Next"]);
    }

    #[test]
    fn devanagari_danda_counts_as_a_sentence_end() {
        // "नमस्ते दुनिया।" is 14 chars
        let lines = wrap("नमस्ते दुनिया। फिर", Px(160.0), &mono());
        assert_eq!(lines, vec!["नमस्ते दुनिया।", "फिर"]);
    }

    #[test]
    fn clause_punctuation_does_not_break_early() {
        let lines = wrap("Hello world, Next", Px(200.0), &mono());
        assert_eq!(lines, vec!["Hello world, Next"]);
    }

    #[test]
    fn over_wide_word_is_emitted_alone() {
        let lines = wrap("a supercalifragilistic b", Px(100.0), &mono());
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);

        let lines = wrap("supercalifragilistic", Px(100.0), &mono());
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn whitespace_is_normalised() {
        let lines = wrap("  spaced\tout\n words  ", Px(1000.0), &mono());
        assert_eq!(lines, vec!["spaced out words"]);
        assert!(wrap(" \n\t ", Px(100.0), &mono()).is_empty());
    }

    #[test]
    fn ends_sentence_ignores_trailing_space() {
        assert!(ends_sentence("Done. "));
        assert!(ends_sentence("क्या?"));
        assert!(ends_sentence("इति॥"));
        assert!(!ends_sentence("Done,"));
        assert!(!ends_sentence(""));
    }
}
