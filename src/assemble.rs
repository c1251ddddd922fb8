use crate::boilerplate::BoilerplateFilter;
use crate::element::{CandidateElement, TagCategory};
use crate::normalize::clean;
use crate::segment::segment_sentences;
use crate::Config;

/// Kind of an extracted content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum ContentKind {
    /// Heading with level 1-3.
    Heading { level: u8 },
    Paragraph,
    ListItem,
}

impl ContentKind {
    /// Heading level, present only for headings.
    pub fn level(self) -> Option<u8> {
        match self {
            Self::Heading { level } => Some(level),
            Self::Paragraph | Self::ListItem => None,
        }
    }
}

impl From<TagCategory> for ContentKind {
    fn from(tag: TagCategory) -> Self {
        if tag == TagCategory::ListItem {
            return Self::ListItem;
        }
        match tag.heading_level() {
            Some(level) => Self::Heading { level },
            None => Self::Paragraph,
        }
    }
}

/// One block of extracted content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentItem {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ContentKind,
    /// Surviving sentences joined by single spaces.
    pub text: String,
}

impl ContentItem {
    pub fn level(&self) -> Option<u8> {
        self.kind.level()
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ContentKind::Heading { .. })
    }
}

/// Why a ranked block produced no content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skip {
    Short,
    Boilerplate,
    NoSentences,
}

/// Turn one ranked element into a content item.
pub(crate) fn assemble_block<E: CandidateElement + ?Sized>(
    element: &E,
    filter: &BoilerplateFilter,
    config: &Config,
) -> Result<ContentItem, Skip> {
    let text = clean(element.inner_text());
    if text.chars().count() < config.min_block_chars {
        return Err(Skip::Short);
    }
    if filter.is_boilerplate(&text) {
        return Err(Skip::Boilerplate);
    }
    let sentences = segment_sentences(&text, config.min_sentence_chars);
    if sentences.is_empty() {
        return Err(Skip::NoSentences);
    }
    Ok(ContentItem {
        kind: ContentKind::from(element.tag()),
        text: sentences.join(" "),
    })
}

/// Build content items from ranked elements, preserving their order.
///
/// A block is skipped when its cleaned text is shorter than
/// `config.min_block_chars`, matches a boilerplate phrase, or yields no
/// sentence. A boilerplate match drops the whole block.
pub fn assemble<E: CandidateElement + ?Sized>(ranked: &[&E], config: &Config) -> Vec<ContentItem> {
    let filter = config.boilerplate_filter();
    ranked
        .iter()
        .filter_map(|element| match assemble_block(*element, &filter, config) {
            Ok(item) => Some(item),
            Err(_reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(reason = ?_reason, tag = %element.tag(), "skipped block");
                None
            }
        })
        .collect()
}
