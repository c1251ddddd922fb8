use std::fmt;
use std::str::FromStr;

use crate::error::MainlineError;

/// Structural category of a candidate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// `<p>`
    Paragraph,
    /// `<h1>`..`<h3>`. Any other level is treated as a plain container.
    Heading(u8),
    /// `<li>`
    ListItem,
    /// `<article>`, `<section>`, `<div>`
    Container,
}

impl TagCategory {
    /// Heading level, or `None` for non-headings and levels outside `1..=3`.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::Heading(level @ 1..=3) => Some(level),
            _ => None,
        }
    }

    /// Paragraphs and h1-h3 headings receive the text-tag bonus when scored.
    pub fn is_text_tag(self) -> bool {
        self == Self::Paragraph || self.heading_level().is_some()
    }
}

impl FromStr for TagCategory {
    type Err = MainlineError;

    /// Parse an HTML tag name (case-insensitive).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "p" => Ok(Self::Paragraph),
            "h1" => Ok(Self::Heading(1)),
            "h2" => Ok(Self::Heading(2)),
            "h3" => Ok(Self::Heading(3)),
            "li" => Ok(Self::ListItem),
            "article" | "section" | "div" => Ok(Self::Container),
            _ => Err(MainlineError::UnknownTag(tag.to_string())),
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => f.write_str("p"),
            Self::Heading(level) => write!(f, "h{level}"),
            Self::ListItem => f.write_str("li"),
            Self::Container => f.write_str("div"),
        }
    }
}

/// Ancestry regions a candidate can be tested against. Membership includes
/// the element itself, like DOM `closest()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `main`, `article` or `role="main"`.
    Main,
    /// `nav`, `footer`, `aside`, or an ad / cookie / banner container.
    Boilerplate,
}

/// Resolved rendering attributes of a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Computed `display` value.
    pub display: String,
    /// Computed `visibility` value.
    pub visibility: String,
    /// Whether the element carries an `aria-hidden` attribute.
    pub aria_hidden: bool,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl Style {
    /// A displayed, visible style with the given rendered height.
    pub fn shown(height: f64) -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            aria_hidden: false,
            height,
        }
    }
}

/// Read-only view of a rendered node, supplied by the document collaborator.
///
/// Implement this once per environment (browser binding, parsed HTML tree,
/// recorded snapshot). The pipeline never mutates a candidate.
pub trait CandidateElement {
    /// Structural category of the node.
    fn tag(&self) -> TagCategory;

    /// Raw rendered inner text.
    fn inner_text(&self) -> &str;

    /// Resolved style, or `None` when no style information is available.
    fn style(&self) -> Option<&Style>;

    /// Number of descendant links.
    fn link_count(&self) -> usize;

    /// Number of descendant images.
    fn image_count(&self) -> usize;

    /// Whether the node lies within `region` (itself included).
    fn within(&self, region: Region) -> bool;
}

impl<T: CandidateElement + ?Sized> CandidateElement for &T {
    fn tag(&self) -> TagCategory {
        (**self).tag()
    }
    fn inner_text(&self) -> &str {
        (**self).inner_text()
    }
    fn style(&self) -> Option<&Style> {
        (**self).style()
    }
    fn link_count(&self) -> usize {
        (**self).link_count()
    }
    fn image_count(&self) -> usize {
        (**self).image_count()
    }
    fn within(&self, region: Region) -> bool {
        (**self).within(region)
    }
}

/// Owned, already-resolved candidate.
///
/// Produced by the HTML collaborator and convenient for callers that
/// serialize page state out of a live browser.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ElementSnapshot {
    pub tag: TagCategory,
    pub text: String,
    pub style: Option<Style>,
    pub links: usize,
    pub images: usize,
    pub in_main: bool,
    pub in_boilerplate: bool,
}

impl ElementSnapshot {
    /// A visible snapshot (unit height) outside any region, with no links or images.
    pub fn new(tag: TagCategory, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            style: Some(Style::shown(1.0)),
            links: 0,
            images: 0,
            in_main: false,
            in_boilerplate: false,
        }
    }

    pub fn with_style(mut self, style: Option<Style>) -> Self {
        self.style = style;
        self
    }
    pub fn with_links(mut self, n: usize) -> Self {
        self.links = n;
        self
    }
    pub fn with_images(mut self, n: usize) -> Self {
        self.images = n;
        self
    }
    pub fn in_region(mut self, region: Region) -> Self {
        match region {
            Region::Main => self.in_main = true,
            Region::Boilerplate => self.in_boilerplate = true,
        }
        self
    }
}

impl CandidateElement for ElementSnapshot {
    fn tag(&self) -> TagCategory {
        self.tag
    }

    fn inner_text(&self) -> &str {
        &self.text
    }

    fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn link_count(&self) -> usize {
        self.links
    }

    fn image_count(&self) -> usize {
        self.images
    }

    fn within(&self, region: Region) -> bool {
        match region {
            Region::Main => self.in_main,
            Region::Boilerplate => self.in_boilerplate,
        }
    }
}
