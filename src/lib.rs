//! Heuristic main-content extraction for rendered pages.
//!
//! `mainline` scores candidate blocks of a page by length, structure and
//! link density, keeps the best ones, cleans and segments their text, drops
//! boilerplate, and reports quality metrics for what remains.
//!
//! The pipeline runs over any [`CandidateElement`] implementation, so the
//! same scoring applies to a live browser binding or a parsed HTML tree. A
//! static-HTML provider ships in [`html`].
//!
//! # Quick start
//!
//! ```rust
//! use mainline::{extract_html, Config};
//!
//! let html = "<html><head><title>Example</title></head><body><article>\
//!             <p>This is the main content of the page. It has two sentences.</p>\
//!             </article></body></html>";
//! let result = extract_html(html, "https://example.com/post", &Config::default());
//! assert!(!result.is_empty());
//! assert_eq!(result.title, "Example");
//! println!("{}", mainline::render::render_text(&result));
//! ```
//!
//! # Pipeline
//!
//! 1. [`is_visible`] filters out candidates that are not rendered.
//! 2. [`score`] assigns each candidate a relevance score.
//! 3. [`select`] ranks positive-scoring candidates and caps their number.
//! 4. [`clean`] and [`segment`] normalize text into sentences.
//! 5. [`is_boilerplate`] rejects site chrome such as subscription prompts.
//! 6. [`assemble`] builds ordered [`ContentItem`]s.
//! 7. [`compute_metrics`] derives [`QualityMetrics`].

mod assemble;
mod boilerplate;
mod element;
mod error;
pub mod html;
mod metrics;
mod normalize;
pub mod render;
mod score;
mod segment;
mod select;
mod visibility;

pub use assemble::{assemble, ContentItem, ContentKind};
pub use boilerplate::{is_boilerplate, BoilerplateFilter, DEFAULT_PHRASES};
pub use element::{CandidateElement, ElementSnapshot, Region, Style, TagCategory};
pub use error::MainlineError;
pub use metrics::{compute_metrics, QualityMetrics};
pub use normalize::clean;
pub use score::{score, score_with, ScoreWeights};
pub use segment::{segment, segment_sentences, MIN_SENTENCE_CHARS};
pub use select::{rank, select, ScoredBlock};
pub use visibility::is_visible;

use scraper::Html;

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Config {
    /// Maximum number of ranked blocks kept.
    pub max_blocks: usize,
    /// Minimum cleaned length of a block.
    pub min_block_chars: usize,
    /// Sentences must be longer than this once cleaned.
    pub min_sentence_chars: usize,
    /// Case-insensitive phrases that reject a whole block.
    pub boilerplate_phrases: Vec<String>,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_blocks: 50,
            min_block_chars: 30,
            min_sentence_chars: MIN_SENTENCE_CHARS,
            boilerplate_phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    pub fn with_max_blocks(mut self, n: usize) -> Self {
        self.max_blocks = n;
        self
    }
    pub fn with_min_block_chars(mut self, n: usize) -> Self {
        self.min_block_chars = n;
        self
    }
    pub fn with_min_sentence_chars(mut self, n: usize) -> Self {
        self.min_sentence_chars = n;
        self
    }
    pub fn with_boilerplate_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boilerplate_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Check that every setting yields a well-defined pipeline.
    pub fn validate(&self) -> Result<(), MainlineError> {
        if self.max_blocks == 0 {
            return Err(MainlineError::InvalidConfig(
                "max_blocks must be at least 1".to_string(),
            ));
        }
        let divisors = [
            ("length_divisor", self.weights.length_divisor),
            ("link_chars_per_link", self.weights.link_chars_per_link),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(MainlineError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let bonuses = [
            ("main_region_bonus", self.weights.main_region_bonus),
            ("text_tag_bonus", self.weights.text_tag_bonus),
            ("link_penalty", self.weights.link_penalty),
            ("image_penalty", self.weights.image_penalty),
            (
                "boilerplate_region_penalty",
                self.weights.boilerplate_region_penalty,
            ),
        ];
        if let Some((name, _)) = bonuses.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MainlineError::InvalidConfig(format!(
                "{name} must be finite"
            )));
        }
        Ok(())
    }

    pub(crate) fn boilerplate_filter(&self) -> BoilerplateFilter {
        BoilerplateFilter::new(&self.boilerplate_phrases)
    }
}

/// Everything extracted from one page. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    /// Ranked content items, at most `max_blocks` of them.
    pub content: Vec<ContentItem>,
    pub metadata: QualityMetrics,
}

impl ExtractionResult {
    /// Returns `true` when no block qualified as content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Run the full pipeline over a set of candidates in document order.
///
/// Never fails: a page with no qualifying block yields empty content and
/// the corresponding metrics.
pub fn extract<E: CandidateElement>(
    url: &str,
    title: &str,
    candidates: &[E],
    config: &Config,
) -> ExtractionResult {
    let ranked = select(candidates, config);
    let content = assemble(&ranked, config);
    let metadata = compute_metrics(&content, config);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        url,
        candidates = candidates.len(),
        ranked = ranked.len(),
        items = content.len(),
        quality = metadata.quality_score,
        "extracted content"
    );

    ExtractionResult {
        url: url.to_string(),
        title: clean(title),
        content,
        metadata,
    }
}

/// Parse static HTML and extract its main content.
///
/// Equivalent to building candidates with [`html::candidates`] and calling
/// [`extract`] with the document `<title>`.
///
/// # Example
///
/// ```rust
/// let result = mainline::extract_html("<html><body></body></html>", "about:blank", &mainline::Config::default());
/// assert!(result.is_empty());
/// ```
pub fn extract_html(html: &str, url: &str, config: &Config) -> ExtractionResult {
    let doc = Html::parse_document(html);
    let candidates = html::candidates(&doc);
    extract(url, &html::title(&doc), &candidates, config)
}

/// A validated, reusable pipeline.
///
/// Holds no per-document state; one instance can serve concurrent
/// extractions.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: Config,
}

impl Extractor {
    /// Validate `config` and build an extractor.
    pub fn new(config: Config) -> Result<Self, MainlineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extract<E: CandidateElement>(
        &self,
        url: &str,
        title: &str,
        candidates: &[E],
    ) -> ExtractionResult {
        extract(url, title, candidates, &self.config)
    }

    pub fn extract_html(&self, html: &str, url: &str) -> ExtractionResult {
        extract_html(html, url, &self.config)
    }
}
