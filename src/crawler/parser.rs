//! HTML parser for extracting same-origin links
//!
//! Links are collected from `<a href>` tags only:
//! - an href starting with `/` is appended to the base origin as-is
//! - an absolute `http://` / `https://` href is kept when it is same-origin
//!
//! Nothing is deduplicated or normalized; document order is kept.

use crate::config::OriginMatch;
use crate::crawler::extractor::{extract_from_document, Fragment};
use scraper::{Html, Selector};
use url::Url;

/// Everything the crawler needs from one fetched page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPage {
    /// Extracted text fragments, in extraction order
    pub fragments: Vec<Fragment>,

    /// Same-origin links, in document order
    pub links: Vec<String>,
}

/// Returns the base origin of a URL: its first three `/`-separated segments
///
/// `https://www.bbc.com/news/world` gives `https://www.bbc.com`.
pub fn base_origin(url: &str) -> String {
    url.split('/').take(3).collect::<Vec<_>>().join("/")
}

/// Parses a page once and extracts both its text fragments and its links
///
/// # Example
///
/// ```
/// use topic_digest::config::OriginMatch;
/// use topic_digest::crawler::parse_page;
///
/// let html = r#"<p>A paragraph long enough to be kept.</p><a href="/next">next</a>"#;
/// let page = parse_page(html, "http://example.com", OriginMatch::Strict);
/// assert_eq!(page.fragments.len(), 1);
/// assert_eq!(page.links, vec!["http://example.com/next".to_string()]);
/// ```
pub fn parse_page(html: &str, base_origin: &str, mode: OriginMatch) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        fragments: extract_from_document(&document),
        links: collect_links(&document, base_origin, mode),
    }
}

/// Collects the same-origin links of a parsed document
pub fn collect_links(document: &Html, base_origin: &str, mode: OriginMatch) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = resolve_link(href, base_origin, mode) {
                    links.push(link);
                }
            }
        }
    }

    links
}

/// Resolves one href against the base origin
///
/// Returns None for anything that is neither root-relative nor a same-origin
/// absolute http(s) URL (fragments, `mailto:`, path-relative links, ...).
fn resolve_link(href: &str, base_origin: &str, mode: OriginMatch) -> Option<String> {
    if href.starts_with('/') {
        return Some(format!("{}{}", base_origin, href));
    }

    if (href.starts_with("http://") || href.starts_with("https://"))
        && is_same_origin(href, base_origin, mode)
    {
        return Some(href.to_string());
    }

    None
}

/// Checks whether an absolute link belongs to the base origin
///
/// In `Substring` mode, `http://evil.com/?x=example.com` matches
/// `http://example.com`; `Strict` mode compares the parsed authorities instead.
pub fn is_same_origin(link: &str, base_origin: &str, mode: OriginMatch) -> bool {
    match mode {
        OriginMatch::Substring => link.contains(base_origin),
        OriginMatch::Strict => {
            let (Ok(link), Ok(base)) = (Url::parse(link), Url::parse(base_origin)) else {
                return false;
            };
            link.scheme() == base.scheme()
                && link.host_str() == base.host_str()
                && link.port_or_known_default() == base.port_or_known_default()
        }
    }
}
