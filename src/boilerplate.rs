use std::sync::LazyLock;

/// Phrases that mark a block as site boilerplate.
pub const DEFAULT_PHRASES: &[&str] = &[
    "subscribe now",
    "all rights reserved",
    "cookie policy",
    "terms of service",
    "follow us",
    "sign up for our newsletter",
];

static DEFAULT_FILTER: LazyLock<BoilerplateFilter> =
    LazyLock::new(|| BoilerplateFilter::new(DEFAULT_PHRASES));

/// Case-insensitive substring matcher over a fixed phrase set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateFilter {
    /// Lowercased, non-empty phrases.
    phrases: Vec<String>,
}

impl BoilerplateFilter {
    /// Build a filter. Blank phrases are ignored; they would match everything.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Returns `true` if `text` contains any phrase, ignoring case.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Default for BoilerplateFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

/// Check `text` against the default phrase set.
pub fn is_boilerplate(text: &str) -> bool {
    DEFAULT_FILTER.is_boilerplate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phrases_match_any_case() {
        assert!(is_boilerplate("Subscribe Now to get the latest stories"));
        assert!(is_boilerplate("2024 Example Corp. ALL RIGHTS RESERVED."));
        assert!(is_boilerplate("Read our cookie policy before continuing"));
        assert!(is_boilerplate("please Follow Us on every platform"));
    }

    #[test]
    fn test_plain_text_is_not_boilerplate() {
        assert!(!is_boilerplate("The council voted on the budget last night."));
        assert!(!is_boilerplate(""));
    }

    #[test]
    fn test_phrase_must_be_contiguous() {
        assert!(!is_boilerplate("subscribe to our feed now"));
    }

    #[test]
    fn test_custom_phrases() {
        let filter = BoilerplateFilter::new(["Advertisement", "  "]);
        assert_eq!(filter.phrases(), ["advertisement"]);
        assert!(filter.is_boilerplate("advertisement continue reading below"));
        assert!(!filter.is_boilerplate("subscribe now"));
    }

    #[test]
    fn test_empty_filter_never_matches() {
        let filter = BoilerplateFilter::new(Vec::<String>::new());
        assert!(!filter.is_boilerplate("subscribe now"));
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(BoilerplateFilter::default().phrases().len(), DEFAULT_PHRASES.len());
    }
}
