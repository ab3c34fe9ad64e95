//! Configuration module for Topic-Digest
//!
//! This module handles loading, parsing, and validating the TOML configuration file.
//! Every section is optional and falls back to the defaults below.
//!
//! # Example
//!
//! ```no_run
//! use topic_digest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("digest.toml")).unwrap();
//! println!("Crawler will use depth: {}", config.crawler.depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OriginMatch, ServerConfig, SpeechConfig, SpeechProvider,
    SummaryConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
