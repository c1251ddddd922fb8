use crate::element::{CandidateElement, Region};

/// Weights of the block-scoring heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct ScoreWeights {
    /// Characters of text worth one point.
    pub length_divisor: f64,
    /// Bonus inside `main` / `article` / `role="main"`.
    pub main_region_bonus: f64,
    /// Bonus for paragraphs and h1-h3 headings.
    pub text_tag_bonus: f64,
    /// Penalty once links exceed one per `link_chars_per_link` characters.
    pub link_penalty: f64,
    pub link_chars_per_link: f64,
    /// Penalty when the block embeds any image.
    pub image_penalty: f64,
    /// Penalty inside nav / footer / aside / ad / cookie / banner regions.
    pub boilerplate_region_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            length_divisor: 100.0,
            main_region_bonus: 2.0,
            text_tag_bonus: 1.0,
            link_penalty: 2.0,
            link_chars_per_link: 50.0,
            image_penalty: 1.0,
            boilerplate_region_penalty: 3.0,
        }
    }
}

/// Relevance score of a block with the default weights. Higher is better;
/// the result may be negative.
pub fn score<E: CandidateElement + ?Sized>(element: &E) -> f64 {
    score_with(element, &ScoreWeights::default())
}

/// Relevance score of a block.
///
/// Length is counted in characters, not bytes. With empty text the link
/// threshold is zero, so a single link already triggers the link penalty.
pub fn score_with<E: CandidateElement + ?Sized>(element: &E, weights: &ScoreWeights) -> f64 {
    let text_length = element.inner_text().chars().count() as f64;

    let mut score = text_length / weights.length_divisor;
    if element.within(Region::Main) {
        score += weights.main_region_bonus;
    }
    if element.tag().is_text_tag() {
        score += weights.text_tag_bonus;
    }
    if element.link_count() as f64 > text_length / weights.link_chars_per_link {
        score -= weights.link_penalty;
    }
    if element.image_count() > 0 {
        score -= weights.image_penalty;
    }
    if element.within(Region::Boilerplate) {
        score -= weights.boilerplate_region_penalty;
    }
    score
}
