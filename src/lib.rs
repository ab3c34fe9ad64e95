//! Topic-Digest: crawl a topic, summarize it, read it aloud
//!
//! This crate crawls a small set of news/tech/science sites for a chosen topic,
//! asks an OpenAI-compatible LLM to summarize the scraped text, optionally turns
//! the summary into speech, and serves the result through a small web UI.

pub mod config;
pub mod crawler;
pub mod digest;
pub mod output;
pub mod server;
pub mod speech;
pub mod summary;
pub mod themes;

use thiserror::Error;

/// Main error type for Topic-Digest operations
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Theme file error: {0}")]
    Themes(#[from] ThemeError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while reading or creating the theme file
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to access theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse theme file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Gave up on {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

/// Errors from the summarization call
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No completion returned by the model")]
    EmptyResponse,
}

/// Errors from the speech synthesis call
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Speech synthesis is disabled")]
    Disabled,

    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for Topic-Digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{scrape_the_web, CrawlOutput, CrawlTarget, Fragment, FragmentKind};
pub use digest::{DigestReport, DigestService};
pub use summary::Summary;
