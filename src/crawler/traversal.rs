//! Depth-limited recursive crawl
//!
//! Every page is fetched once and parsed once; its fragments and links come
//! from the same parse. Requests are strictly sequential, children of a page
//! are visited depth-first in link order with a fixed pause between siblings.

use crate::config::{CrawlerConfig, OriginMatch};
use crate::crawler::extractor::Fragment;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::{base_origin, parse_page, ParsedPage};
use crate::crawler::topics::CrawlTarget;
use futures::future::BoxFuture;
use serde::Serialize;
use std::time::Duration;

/// Knobs of the traversal driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalSettings {
    /// Links followed per page
    pub max_links: usize,

    /// Pause between two sibling crawls
    pub request_delay: Duration,

    pub origin_match: OriginMatch,
}

impl TraversalSettings {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_links: config.max_links_per_page,
            request_delay: Duration::from_millis(config.request_delay_ms),
            origin_match: config.same_origin,
        }
    }
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self::from_config(&CrawlerConfig::default())
    }
}

/// All fragments gathered for one crawl target, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CrawlOutput {
    fragments: Vec<Fragment>,
}

impl CrawlOutput {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Stringified form handed to the summarizer: a JSON array of
    /// `{"type": ..., "text": ...}` objects
    pub fn to_prompt_text(&self) -> String {
        serde_json::to_string(&self.fragments).unwrap_or_default()
    }
}

/// Recursive, depth-limited scraper over a [`PageFetcher`]
pub struct WebScraper<F> {
    fetcher: F,
    settings: TraversalSettings,
}

impl<F: PageFetcher> WebScraper<F> {
    pub fn new(fetcher: F, settings: TraversalSettings) -> Self {
        Self { fetcher, settings }
    }

    pub fn settings(&self) -> &TraversalSettings {
        &self.settings
    }

    /// Scrapes a single page; any failure yields no fragments
    pub async fn scrap(&self, url: &str) -> Vec<Fragment> {
        self.fetch_page(url)
            .await
            .map(|page| page.fragments)
            .unwrap_or_default()
    }

    /// Scrapes `url` and follows its links while depth remains
    ///
    /// - `depth <= 0`: nothing is fetched, the result is empty
    /// - `depth == 1`: only `url` itself is scraped
    /// - `depth > 1`: the first `max_links` same-origin links are crawled
    ///   with `depth - 1`, each subtree fully before the next sibling
    pub fn scrap_with_depth<'a>(
        &'a self,
        url: &'a str,
        depth: i32,
    ) -> BoxFuture<'a, Vec<Fragment>> {
        Box::pin(async move {
            if depth <= 0 {
                return Vec::new();
            }

            let Some(page) = self.fetch_page(url).await else {
                return Vec::new();
            };

            let mut items = page.fragments;

            if depth > 1 {
                for (index, link) in page.links.iter().take(self.settings.max_links).enumerate() {
                    if index > 0 {
                        tokio::time::sleep(self.settings.request_delay).await;
                    }
                    items.extend(self.scrap_with_depth(link, depth - 1).await);
                }
            }

            items
        })
    }

    /// Crawls every seed of a target independently, concatenating in seed order
    pub async fn crawl_target(&self, target: &CrawlTarget, depth: i32) -> CrawlOutput {
        tracing::info!(
            "Crawling topic '{}' from {} seed URLs (depth {})",
            target.topic,
            target.seeds.len(),
            depth
        );

        let mut fragments = Vec::new();
        for seed in &target.seeds {
            fragments.extend(self.scrap_with_depth(seed, depth).await);
        }

        tracing::info!(
            "Collected {} fragments for topic '{}'",
            fragments.len(),
            target.topic
        );
        CrawlOutput::new(fragments)
    }

    /// Fetches and parses one page, logging and swallowing failures
    async fn fetch_page(&self, url: &str) -> Option<ParsedPage> {
        tracing::info!("Scraping {}", url);

        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Error while scraping {}: {}", url, e);
                return None;
            }
        };

        if html.trim().is_empty() {
            tracing::warn!("No content retrieved for {}", url);
            return None;
        }

        let page = parse_page(&html, &base_origin(url), self.settings.origin_match);
        tracing::info!(
            "Extracted {} fragments and {} links from {}",
            page.fragments.len(),
            page.links.len(),
            url
        );
        Some(page)
    }
}
