// Candidate provider over a static, parsed HTML document.

use std::sync::LazyLock;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::element::{ElementSnapshot, Style, TagCategory};
use crate::normalize::clean;

/// Candidate blocks, in document order.
static CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "body p, body h1, body h2, body h3, body li, body article, body section, body div",
    )
    .unwrap()
});

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Elements whose text never renders.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "head", "iframe", "object", "embed", "select",
    "textarea",
];

/// Elements that start and end a line of rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "caption",
    "dd",
    "details",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

const BOILERPLATE_TAGS: &[&str] = &["nav", "footer", "aside"];
const BOILERPLATE_CLASSES: &[&str] = &["ad", "cookie", "banner"];

/// Builds rendered inner text the way a browser lays out `white-space: normal`:
/// whitespace runs collapse to one space and block boundaries become newlines.
#[derive(Default)]
struct InnerText {
    out: String,
    pending_space: bool,
}

impl InnerText {
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = true;
                continue;
            }
            if self.pending_space && !self.out.is_empty() && !self.out.ends_with('\n') {
                self.out.push(' ');
            }
            self.pending_space = false;
            self.out.push(ch);
        }
    }

    fn line_break(&mut self) {
        self.pending_space = false;
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// `invisible` is the inherited `visibility: hidden` state of `node`.
    /// Text is dropped while it holds; a descendant declaring another
    /// visibility shows again.
    fn visit(&mut self, node: NodeRef<Node>, invisible: bool) {
        for child in node.children() {
            match child.value() {
                Node::Text(text) => {
                    if !invisible {
                        self.push_text(text);
                    }
                }
                Node::Element(el) => {
                    let tag = el.name();
                    if SKIP_TAGS.contains(&tag) || is_hidden(el) {
                        continue;
                    }
                    if tag == "br" {
                        self.line_break();
                        continue;
                    }
                    let invisible = inline_style(el, "visibility")
                        .map_or(invisible, is_visibility_hidden);
                    let block = BLOCK_TAGS.contains(&tag);
                    if block {
                        self.line_break();
                    }
                    self.visit(child, invisible);
                    if block {
                        self.line_break();
                    }
                }
                // Skip comments, doctypes, processing instructions
                _ => {}
            }
        }
    }

    fn finish(self) -> String {
        self.out.trim_end_matches('\n').to_string()
    }
}

/// Rendered inner text of an element.
pub(crate) fn inner_text(element: ElementRef) -> String {
    let mut text = InnerText::default();
    text.visit(*element, is_visibility_hidden(&inherited_visibility(element)));
    text.finish()
}

/// Look up one declaration in an inline `style` attribute.
fn inline_style<'a>(el: &'a scraper::node::Element, property: &str) -> Option<&'a str> {
    el.attr("style")?.split(';').rev().find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        name.trim().eq_ignore_ascii_case(property).then(|| {
            let value = value.trim();
            value
                .strip_suffix("!important")
                .map_or(value, str::trim_end)
        })
    })
}

/// `hidden` attribute or inline `display: none`.
fn is_hidden(el: &scraper::node::Element) -> bool {
    el.attr("hidden").is_some()
        || inline_style(el, "display").is_some_and(|v| v.eq_ignore_ascii_case("none"))
}

fn is_visibility_hidden(value: &str) -> bool {
    value.eq_ignore_ascii_case("hidden")
}

/// Nearest inline `visibility` declaration on the element or an ancestor.
fn inherited_visibility(element: ElementRef) -> String {
    self_and_ancestors(element)
        .find_map(|e| inline_style(e.value(), "visibility"))
        .unwrap_or("visible")
        .to_ascii_lowercase()
}

/// The element itself followed by its element ancestors, nearest first.
fn self_and_ancestors<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::once(element).chain(element.ancestors().filter_map(ElementRef::wrap))
}

fn is_main_region(el: &scraper::node::Element) -> bool {
    matches!(el.name(), "main" | "article")
        || el.attr("role").is_some_and(|r| r.eq_ignore_ascii_case("main"))
}

fn is_boilerplate_region(el: &scraper::node::Element) -> bool {
    BOILERPLATE_TAGS.contains(&el.name())
        || el.classes().any(|c| BOILERPLATE_CLASSES.contains(&c))
}

/// Resolve visibility attributes from markup.
///
/// Static documents carry no layout, so non-blank text stands in for a
/// positive rendered height.
fn resolve_style(element: ElementRef, text: &str) -> Style {
    let rendered = !self_and_ancestors(element).any(|e| is_hidden(e.value()));
    let visibility = inherited_visibility(element);
    let display = if rendered {
        inline_style(element.value(), "display")
            .unwrap_or("block")
            .to_ascii_lowercase()
    } else {
        "none".to_string()
    };
    let has_text = text.chars().any(|c| !c.is_whitespace());

    Style {
        display,
        visibility,
        aria_hidden: element.value().attr("aria-hidden").is_some(),
        height: if rendered && has_text { 1.0 } else { 0.0 },
    }
}

fn count_descendants(element: ElementRef, tag: &str) -> usize {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == tag)
        .count()
}

/// Snapshot one element, or `None` for tags outside the candidate set.
pub fn snapshot(element: ElementRef) -> Option<ElementSnapshot> {
    let tag: TagCategory = element.value().name().parse().ok()?;
    let text = inner_text(element);
    let style = resolve_style(element, &text);

    let mut snapshot = ElementSnapshot::new(tag, text)
        .with_style(Some(style))
        .with_links(count_descendants(element, "a"))
        .with_images(count_descendants(element, "img"));
    snapshot.in_main = self_and_ancestors(element).any(|e| is_main_region(e.value()));
    snapshot.in_boilerplate = self_and_ancestors(element).any(|e| is_boilerplate_region(e.value()));
    Some(snapshot)
}

/// All candidate blocks of a document, in document order.
pub fn candidates(doc: &Html) -> Vec<ElementSnapshot> {
    doc.select(&CANDIDATE_SELECTOR).filter_map(snapshot).collect()
}

/// Cleaned document title, or an empty string.
pub fn title(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|t| clean(&t.text().collect::<String>()))
        .unwrap_or_default()
}
