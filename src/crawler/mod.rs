//! Crawler module for topic-driven page scraping
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching with bounded fixed-delay retry
//! - Text fragment extraction from HTML
//! - Same-origin link collection
//! - Depth-limited recursive traversal
//! - The static topic → seed URL table

mod extractor;
mod fetcher;
mod parser;
mod topics;
mod traversal;

pub use extractor::{
    extract_fragments, Fragment, FragmentKind, MIN_LIST_ITEM_CHARS, MIN_PARAGRAPH_CHARS,
};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher, RetryPolicy};
pub use parser::{base_origin, collect_links, is_same_origin, parse_page, ParsedPage};
pub use topics::{known_topics, seed_urls, CrawlTarget, FALLBACK_SEED_URL};
pub use traversal::{CrawlOutput, TraversalSettings, WebScraper};

use crate::config::Config;

/// Crawls the seed URLs of a topic with an existing fetcher
///
/// It will:
/// 1. Resolve the topic through the static seed table
/// 2. Crawl every seed independently down to `depth`
/// 3. Concatenate all fragments in seed order
///
/// Page-level failures never surface here; they only shrink the output.
pub async fn scrape_topic<F: PageFetcher>(
    fetcher: F,
    settings: TraversalSettings,
    topic: &str,
    depth: i32,
) -> CrawlOutput {
    let target = CrawlTarget::resolve(topic);
    WebScraper::new(fetcher, settings)
        .crawl_target(&target, depth)
        .await
}

/// Crawls the seed URLs of a topic using the configured HTTP client
///
/// # Returns
///
/// * `Ok(CrawlOutput)` - All fragments gathered for the topic
/// * `Err(DigestError)` - The HTTP client could not be built
pub async fn scrape_the_web(
    config: &Config,
    topic: &str,
    depth: i32,
) -> crate::Result<CrawlOutput> {
    let fetcher = HttpFetcher::from_config(config)?;
    let settings = TraversalSettings::from_config(&config.crawler);
    Ok(scrape_topic(fetcher, settings, topic, depth).await)
}
