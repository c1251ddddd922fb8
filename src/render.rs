//! Plain-text rendering of extraction results.

use url::Url;

use crate::assemble::{ContentItem, ContentKind};
use crate::ExtractionResult;

/// Titles longer than this are truncated for display.
const MAX_TITLE_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Line prefix marking an item's kind.
pub fn item_prefix(item: &ContentItem) -> &'static str {
    match item.kind {
        ContentKind::Heading { .. } => "# ",
        ContentKind::ListItem => "• ",
        ContentKind::Paragraph => "",
    }
}

/// Render a result as a header, a metadata block and the content items.
///
/// ```text
/// URL: https://example.com/post
/// Title: Example
///
/// === METADATA ===
/// Word Count: 12
/// ...
/// === CONTENT ===
///
/// # Heading text
///
/// Paragraph text.
/// ```
pub fn render_text(result: &ExtractionResult) -> String {
    let m = &result.metadata;
    let mut out = String::new();
    out.push_str(&format!("URL: {}\n", result.url));
    out.push_str(&format!("Title: {}\n\n", result.title));
    out.push_str("=== METADATA ===\n");
    out.push_str(&format!("Word Count: {}\n", m.word_count));
    out.push_str(&format!("Sentence Count: {}\n", m.sentence_count));
    out.push_str(&format!(
        "Average Sentence Length: {:.1} words\n",
        m.avg_sentence_length
    ));
    out.push_str(&format!("Quality Score: {:.2}\n\n", m.quality_score));
    out.push_str("=== CONTENT ===\n\n");
    for item in &result.content {
        out.push_str(item_prefix(item));
        out.push_str(&item.text);
        out.push_str("\n\n");
    }
    out
}

/// Short human-readable label for a page.
///
/// Trims the title and truncates it past 50 characters. An empty title falls
/// back to the URL host without `www.`, then to `"Current Page"`.
pub fn display_title(title: &str, url: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.replacen("www.", "", 1)))
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "Current Page".to_string());
    }
    if title.chars().count() <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let keep = MAX_TITLE_CHARS - ELLIPSIS.len();
    let mut short: String = title.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::QualityMetrics;
    use pretty_assertions::assert_eq;

    fn result() -> ExtractionResult {
        ExtractionResult {
            url: "https://example.com/a".to_string(),
            title: "Example".to_string(),
            content: vec![
                ContentItem {
                    kind: ContentKind::Heading { level: 1 },
                    text: "A heading that is long enough.".to_string(),
                },
                ContentItem {
                    kind: ContentKind::Paragraph,
                    text: "Body text of the article.".to_string(),
                },
                ContentItem {
                    kind: ContentKind::ListItem,
                    text: "One list entry here.".to_string(),
                },
            ],
            metadata: QualityMetrics {
                word_count: 15,
                sentence_count: 3,
                avg_sentence_length: 5.0,
                punctuation_ratio: 0.2,
                quality_score: 1.0,
            },
        }
    }

    #[test]
    fn test_render_text() {
        let expected = "URL: https://example.com/a\n\
                        Title: Example\n\
                        \n\
                        === METADATA ===\n\
                        Word Count: 15\n\
                        Sentence Count: 3\n\
                        Average Sentence Length: 5.0 words\n\
                        Quality Score: 1.00\n\
                        \n\
                        === CONTENT ===\n\
                        \n\
                        # A heading that is long enough.\n\
                        \n\
                        Body text of the article.\n\
                        \n\
                        • One list entry here.\n\
                        \n";
        assert_eq!(render_text(&result()), expected);
    }

    #[test]
    fn test_render_empty_content() {
        let mut r = result();
        r.content.clear();
        assert!(render_text(&r).ends_with("=== CONTENT ===\n\n"));
    }

    #[test]
    fn test_display_title_short() {
        assert_eq!(display_title("  Hello  ", "https://x.org"), "Hello");
    }

    #[test]
    fn test_display_title_truncates() {
        let long = "x".repeat(51);
        let shown = display_title(&long, "https://x.org");
        assert_eq!(shown, format!("{}...", "x".repeat(47)));
        assert_eq!(shown.chars().count(), 50);
        assert_eq!(display_title(&"y".repeat(50), ""), "y".repeat(50));
    }

    #[test]
    fn test_display_title_falls_back_to_host() {
        assert_eq!(display_title("", "https://www.example.com/page"), "example.com");
        assert_eq!(display_title("   ", "http://news.site.org"), "news.site.org");
    }

    #[test]
    fn test_display_title_falls_back_to_placeholder() {
        assert_eq!(display_title("", "not a url"), "Current Page");
        assert_eq!(display_title("", "about:blank"), "Current Page");
    }
}
