use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::clean;

/// Minimum cleaned length (exclusive) for a sentence to be kept.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// One or more non-terminators followed by one or more terminators.
static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Split text into sentences, keeping those longer than ten characters.
pub fn segment(text: &str) -> Vec<String> {
    segment_sentences(text, MIN_SENTENCE_CHARS)
}

/// Split text into sentences, keeping those whose cleaned length exceeds `min_chars`.
///
/// Text with no terminator at all is a single segment. Otherwise only
/// terminated runs count; a trailing unterminated tail is not a sentence.
pub fn segment_sentences(text: &str, min_chars: usize) -> Vec<String> {
    let mut raw: Vec<&str> = SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect();
    if raw.is_empty() {
        raw.push(text);
    }
    raw.into_iter()
        .map(clean)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_on_terminators() {
        let text = "The first sentence is here. Is this the second one? Yes it certainly is!";
        assert_eq!(
            segment(text),
            vec![
                "The first sentence is here.",
                "Is this the second one?",
                "Yes it certainly is!"
            ]
        );
    }

    #[test]
    fn test_terminator_runs_stay_together() {
        assert_eq!(
            segment("Are you serious?!! I really am..."),
            vec!["Are you serious?!!", "I really am..."]
        );
    }

    #[test]
    fn test_no_terminator_is_one_segment() {
        assert_eq!(
            segment("a heading without any punctuation"),
            vec!["a heading without any punctuation"]
        );
    }

    #[test]
    fn test_unterminated_tail_is_dropped() {
        assert_eq!(
            segment("This one is complete. this tail is not"),
            vec!["This one is complete."]
        );
    }

    #[test]
    fn test_short_fragments_filtered() {
        // "Too short." is exactly 10 characters and dropped.
        assert_eq!(
            segment("Too short. But this one is long enough."),
            vec!["But this one is long enough."]
        );
    }

    #[test]
    fn test_length_boundary() {
        let ten = "abcdefghi.";
        let eleven = "abcdefghij.";
        assert_eq!(ten.len(), 10);
        assert_eq!(eleven.len(), 11);
        assert!(segment(ten).is_empty());
        assert_eq!(segment(eleven), vec![eleven]);
    }

    #[test]
    fn test_segments_are_cleaned() {
        assert_eq!(
            segment("  First   sentence here. \n Second  sentence here."),
            vec!["First sentence here.", "Second sentence here."]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("...").is_empty());
    }

    #[test]
    fn test_custom_minimum() {
        assert_eq!(segment_sentences("Tiny. Bits.", 4), vec!["Tiny.", "Bits."]);
        assert!(segment_sentences("Tiny. Bits.", 5).is_empty());
    }
}
