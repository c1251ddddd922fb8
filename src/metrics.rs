use crate::assemble::ContentItem;
use crate::segment::segment_sentences;
use crate::Config;

/// Average sentence lengths (in words) outside this range are penalized.
const SENTENCE_LENGTH_RANGE: (f64, f64) = (5.0, 50.0);
/// Punctuation-per-word ratios outside this range are penalized.
const PUNCTUATION_RATIO_RANGE: (f64, f64) = (0.05, 0.5);
/// Content with fewer items than this is penalized.
const MIN_ITEMS: usize = 3;

const SENTENCE_LENGTH_PENALTY: f64 = 0.3;
const PUNCTUATION_PENALTY: f64 = 0.2;
const SHORT_CONTENT_PENALTY: f64 = 0.2;

/// Aggregate statistics over extracted content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct QualityMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Words per sentence; 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// `. , ! ?` characters per word; 0 when there are no words.
    pub punctuation_ratio: f64,
    /// Heuristic confidence in `[0, 1]`, rounded to two decimals.
    pub quality_score: f64,
}

/// Compute metrics over the joined text of all items.
pub fn compute_metrics(content: &[ContentItem], config: &Config) -> QualityMetrics {
    let all_text = content
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let word_count = all_text.split_whitespace().count();
    let sentence_count = segment_sentences(&all_text, config.min_sentence_chars).len();
    let punctuation = all_text
        .chars()
        .filter(|c| matches!(c, '.' | ',' | '!' | '?'))
        .count();

    let avg_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };
    let punctuation_ratio = if word_count == 0 {
        0.0
    } else {
        punctuation as f64 / word_count as f64
    };

    let mut score: f64 = 1.0;
    if avg_sentence_length < SENTENCE_LENGTH_RANGE.0 || avg_sentence_length > SENTENCE_LENGTH_RANGE.1 {
        score -= SENTENCE_LENGTH_PENALTY;
    }
    if punctuation_ratio < PUNCTUATION_RATIO_RANGE.0 || punctuation_ratio > PUNCTUATION_RATIO_RANGE.1 {
        score -= PUNCTUATION_PENALTY;
    }
    if content.len() < MIN_ITEMS {
        score -= SHORT_CONTENT_PENALTY;
    }

    let metrics = QualityMetrics {
        word_count,
        sentence_count,
        avg_sentence_length,
        punctuation_ratio,
        quality_score: round2(score.clamp(0.0, 1.0)),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(?metrics, "computed quality metrics");

    metrics
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
