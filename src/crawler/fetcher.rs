//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler:
//! - Building HTTP clients with a descriptive user agent string
//! - GET requests with a per-request timeout
//! - Bounded retry with a fixed delay between attempts

use crate::config::{Config, CrawlerConfig, UserAgentConfig};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A source of raw HTML pages
///
/// The traversal driver only depends on this trait, so it can run against
/// the network ([`HttpFetcher`]) or any other page source.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the body of `url` as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<'a, T: PageFetcher + ?Sized> PageFetcher for &'a T {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// Bounded, fixed-delay retry settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included
    pub max_attempts: u32,

    /// Pause between two attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_attempts: config.max_retries,
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&CrawlerConfig::default())
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Total timeout applied to each request
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use topic_digest::config::UserAgentConfig;
/// use topic_digest::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Builds a fetcher from the `[crawler]` and `[user-agent]` sections
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.crawler.timeout_secs);
        let client = build_http_client(&config.user_agent, timeout)?;
        Ok(Self::new(client, RetryPolicy::from_config(&config.crawler)))
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// One GET, no retry. Redirects are followed by the client.
    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// Fetches a URL, retrying network failures and non-2xx statuses
    ///
    /// Makes at most `max_attempts` requests, sleeping `delay` between two
    /// consecutive ones. The error returned after the last attempt wraps the
    /// last underlying cause.
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt >= max_attempts => {
                    tracing::error!(
                        "Could not fetch {} after {} attempts: {}",
                        url,
                        max_attempts,
                        e
                    );
                    return Err(FetchError::RetriesExhausted {
                        url: url.to_string(),
                        attempts: attempt,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        "Error fetching {} (attempt {}/{}): {}. Retrying in {:?}",
                        url,
                        attempt,
                        max_attempts,
                        e,
                        self.policy.delay
                    );
                    tokio::time::sleep(self.policy.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
