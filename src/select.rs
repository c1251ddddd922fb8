use crate::element::CandidateElement;
use crate::score::score_with;
use crate::visibility::is_visible;
use crate::Config;

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredBlock<'a, E: ?Sized> {
    pub element: &'a E,
    pub score: f64,
}

/// Score, filter and rank candidates.
///
/// Keeps visible candidates with non-empty text and a positive score, orders
/// them by descending score and caps the result at `config.max_blocks`.
/// Equal scores keep document order.
pub fn rank<'a, E: CandidateElement>(candidates: &'a [E], config: &Config) -> Vec<ScoredBlock<'a, E>> {
    let mut blocks: Vec<ScoredBlock<'a, E>> = candidates
        .iter()
        .filter(|el| is_visible(*el) && !el.inner_text().is_empty())
        .map(|element| ScoredBlock {
            element,
            score: score_with(element, &config.weights),
        })
        .filter(|block| block.score > 0.0)
        .collect();

    #[cfg(feature = "tracing")]
    for block in &blocks {
        tracing::trace!(tag = %block.element.tag(), score = block.score, "scored candidate");
    }

    // sort_by is stable: ties stay in document order.
    blocks.sort_by(|a, b| b.score.total_cmp(&a.score));
    blocks.truncate(config.max_blocks);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        candidates = candidates.len(),
        selected = blocks.len(),
        "ranked candidates"
    );

    blocks
}

/// Ranked candidate elements, best first. Empty when nothing qualifies.
pub fn select<'a, E: CandidateElement>(candidates: &'a [E], config: &Config) -> Vec<&'a E> {
    rank(candidates, config)
        .into_iter()
        .map(|block| block.element)
        .collect()
}
