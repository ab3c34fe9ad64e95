//! Text extraction from HTML pages
//!
//! Fragments are grouped by tag type rather than emitted in document order:
//! paragraphs first, then `h1`, `h2`, `h3`, then list items, then articles.
//! Within a group, document order is kept.

use scraper::{ElementRef, Html, Selector};
use serde::{Serialize, Serializer};
use std::fmt;

/// Paragraphs must be strictly longer than this (in characters)
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// List items must be strictly longer than this (in characters)
pub const MIN_LIST_ITEM_CHARS: usize = 10;

/// Structural origin of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Paragraph,
    /// Heading level, 1 to 3
    Heading(u8),
    ListItem,
    Article,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "paragraph"),
            Self::Heading(level) => write!(f, "heading{}", level),
            Self::ListItem => write!(f, "listitem"),
            Self::Article => write!(f, "article"),
        }
    }
}

impl Serialize for FragmentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One piece of page text tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    #[serde(rename = "type")]
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Parses raw HTML and extracts its fragments
///
/// Malformed markup never fails: the parser recovers, and a page with
/// nothing recognizable simply yields no fragments.
pub fn extract_fragments(html: &str) -> Vec<Fragment> {
    extract_from_document(&Html::parse_document(html))
}

/// Extracts fragments from an already parsed document
pub fn extract_from_document(document: &Html) -> Vec<Fragment> {
    let mut items = Vec::new();

    for text in select_texts(document, "p") {
        if text.chars().count() > MIN_PARAGRAPH_CHARS {
            items.push(Fragment::new(FragmentKind::Paragraph, text));
        }
    }

    for level in 1..=3u8 {
        for text in select_texts(document, &format!("h{}", level)) {
            items.push(Fragment::new(FragmentKind::Heading(level), text));
        }
    }

    for text in select_texts(document, "li") {
        if text.chars().count() > MIN_LIST_ITEM_CHARS {
            items.push(Fragment::new(FragmentKind::ListItem, text));
        }
    }

    // Nested articles are already part of their parent's text
    if let Ok(selector) = Selector::parse("article") {
        for element in document.select(&selector) {
            if !has_article_ancestor(element) {
                items.push(Fragment::new(FragmentKind::Article, stripped_text(element)));
            }
        }
    }

    items
}

/// Returns the stripped text of every element matching `css`
fn select_texts(document: &Html, css: &str) -> Vec<String> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).map(stripped_text).collect(),
        Err(_) => {
            tracing::debug!("Invalid selector: {}", css);
            Vec::new()
        }
    }
}

fn has_article_ancestor(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "article")
}

/// Elements whose text is never page content
const NON_CONTENT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Concatenates the element's text nodes, each trimmed, skipping blank ones
/// and anything inside `script`, `style` or `template`
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| {
            node.parent()
                .and_then(|parent| parent.value().as_element().map(|e| e.name()))
                .map_or(true, |name| !NON_CONTENT_TAGS.contains(&name))
        })
        .filter_map(|node| node.value().as_text().map(|text| text.trim()))
        .filter(|s| !s.is_empty())
        .collect()
}
