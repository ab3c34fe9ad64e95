//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::time::Duration;
use topic_digest::config::UserAgentConfig;
use topic_digest::crawler::{build_http_client, HttpFetcher, RetryPolicy, TraversalSettings};

/// A fetcher with short delays so retries don't slow the suite down
pub fn fast_fetcher(max_attempts: u32) -> HttpFetcher {
    let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build HTTP client");
    HttpFetcher::new(
        client,
        RetryPolicy {
            max_attempts,
            delay: Duration::from_millis(10),
        },
    )
}

pub fn fast_traversal() -> TraversalSettings {
    TraversalSettings {
        request_delay: Duration::from_millis(1),
        ..TraversalSettings::default()
    }
}

/// Wraps paragraphs into a minimal HTML page
pub fn page(paragraphs: &[&str], links: &[&str]) -> String {
    let mut body = String::new();
    for p in paragraphs {
        body.push_str(&format!("<p>{}</p>", p));
    }
    for link in links {
        body.push_str(&format!("<a href=\"{}\">lien</a>", link));
    }
    format!("<html><head><title>t</title></head><body>{}</body></html>", body)
}

pub fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}
