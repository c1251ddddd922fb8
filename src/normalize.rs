use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DOUBLE_QUOTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[\u{201C}\u{201D}]").unwrap());
static SINGLE_QUOTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[\u{2018}\u{2019}]").unwrap());

/// Anything that is not an ASCII word character, whitespace, or `. , ! ?`.
///
/// Word characters are ASCII only: accented letters and non-Latin scripts are
/// stripped along with emoji and symbols.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s.,!?]").unwrap());

/// Clean raw block text.
///
/// Steps, in order: collapse whitespace runs to one space, straighten curly
/// double and single quotes, strip disallowed characters, collapse again, trim.
/// The output is idempotent under `clean`.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = DOUBLE_QUOTES_RE.replace_all(&text, "\"");
    let text = SINGLE_QUOTES_RE.replace_all(&text, "'");
    let text = DISALLOWED_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean(" \n\t "), "");
    }

    #[test]
    fn test_collapse_whitespace_and_newlines() {
        assert_eq!(clean("  one \r\n\n two\tthree  "), "one two three");
    }

    #[test]
    fn test_curly_quotes_are_straightened_then_stripped() {
        // Straight quotes are not in the allowed set, so both kinds end up removed.
        assert_eq!(clean("\u{201C}Hi,\u{201D} she said"), "Hi, she said");
        assert_eq!(clean("it\u{2019}s fine"), "its fine");
    }

    #[test]
    fn test_keeps_basic_punctuation() {
        assert_eq!(clean("Wait. What, really?! Yes."), "Wait. What, really?! Yes.");
    }

    #[test]
    fn test_strips_symbols_and_emoji() {
        assert_eq!(clean("Price: $5 (approx) \u{1F600} #deal"), "Price 5 approx deal");
    }

    #[test]
    fn test_strip_then_recollapse() {
        assert_eq!(clean("left — right"), "left right");
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        assert_eq!(clean("café naïve"), "caf nave");
        assert_eq!(clean("\u{4E2D}\u{6587} text"), "text");
    }

    #[test]
    fn test_underscore_and_digits_survive() {
        assert_eq!(clean("snake_case 42"), "snake_case 42");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  Hello,   world!  ",
            "\u{201C}Quoted\u{201D} \u{2018}text\u{2019} — with dashes… and emoji \u{1F389}",
            "Line one.\nLine two?\r\nLine three!",
            "###",
            "café ☕ au lait, s'il vous plaît.",
        ];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {s:?}");
        }
    }
}
