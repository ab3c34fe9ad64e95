//! Static topic → seed URL table

/// Seed used for any topic missing from the table
pub const FALLBACK_SEED_URL: &str = "https://www.example.com";

const SEED_TABLE: &[(&str, &[&str])] = &[
    (
        "Actualité",
        &[
            "https://www.bbc.com/news",
            "https://www.reuters.com",
            "https://www.lemonde.fr",
        ],
    ),
    (
        "Technologie",
        &[
            "https://techcrunch.com",
            "https://www.theverge.com",
            "https://www.wired.com",
        ],
    ),
    (
        "Science",
        &[
            "https://www.sciencesetavenir.fr/",
            "https://www.sciencemag.org",
            "https://www.nature.com",
        ],
    ),
];

/// Returns the seed URLs configured for `topic`, or the fallback seed
pub fn seed_urls(topic: &str) -> &'static [&'static str] {
    SEED_TABLE
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, urls)| *urls)
        .unwrap_or(&[FALLBACK_SEED_URL])
}

/// Names of every topic with dedicated seed URLs
pub fn known_topics() -> impl Iterator<Item = &'static str> {
    SEED_TABLE.iter().map(|(name, _)| *name)
}

/// A topic together with the seed URLs the crawler starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub topic: String,
    pub seeds: Vec<String>,
}

impl CrawlTarget {
    /// Builds a target with explicit seeds
    pub fn new(topic: impl Into<String>, seeds: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            seeds,
        }
    }

    /// Resolves a topic through the static seed table
    pub fn resolve(topic: &str) -> Self {
        Self::new(
            topic,
            seed_urls(topic).iter().map(|url| url.to_string()).collect(),
        )
    }
}
