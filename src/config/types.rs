use serde::Deserialize;

/// Main configuration structure for Topic-Digest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub summary: SummaryConfig,
    pub speech: SpeechConfig,
    pub server: ServerConfig,
}

/// How links discovered on a page are matched against the seed origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginMatch {
    /// Scheme, host and port must be equal
    #[default]
    Strict,
    /// The base origin only has to appear somewhere in the link
    Substring,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Link-following depth used by the UI (1 = seed pages only)
    pub depth: i32,

    /// Maximum number of attempts per page fetch
    pub max_retries: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Delay between two attempts on the same URL (milliseconds)
    pub retry_delay_ms: u64,

    /// Delay between two sequential child crawls (milliseconds)
    pub request_delay_ms: u64,

    /// Number of discovered links followed per page
    pub max_links_per_page: usize,

    pub same_origin: OriginMatch,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            max_retries: 3,
            timeout_secs: 10,
            retry_delay_ms: 1000,
            request_delay_ms: 1000,
            max_links_per_page: 3,
            same_origin: OriginMatch::Strict,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,

    /// URL with information about the crawler
    pub contact_url: String,

    /// Email address for crawler-related contact
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "TopicDigest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `CrawlerName/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// LLM endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SummaryConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    pub model: String,

    pub temperature: f32,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "nvidia/llama-3.1-nemotron-70b-instruct:free".to_string(),
            temperature: 0.7,
            api_key_env: "OPENROUTER_API_KEY".to_string(),
        }
    }
}

/// Which text-to-speech backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    #[default]
    Elevenlabs,
    Proxy,
    Disabled,
}

/// Text-to-speech configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpeechConfig {
    pub provider: SpeechProvider,

    /// Base URL of the ElevenLabs API
    pub base_url: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    pub voice_id: String,

    pub model_id: String,

    pub output_format: String,

    /// Endpoint of the TTS proxy (required when provider = "proxy")
    pub proxy_url: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: SpeechProvider::Elevenlabs,
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            api_key_env: "ELEVEN_LABS_API_KEY".to_string(),
            voice_id: "CwhRBWXzGAHq8TQ4Fs17".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            output_format: "mp3_44100_128".to_string(),
            proxy_url: None,
        }
    }
}

/// Web UI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServerConfig {
    /// Socket address the web UI listens on
    pub bind: String,

    /// Path to the theme file (created with defaults when missing)
    pub themes_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            themes_path: "data/themes.json".to_string(),
        }
    }
}
