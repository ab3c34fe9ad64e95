//! One digest run: crawl → summarize → optional speech
//!
//! Summary failures abort the run and are shown to the user. Speech failures
//! never do: the report is returned without audio and with a notice.

use crate::config::Config;
use crate::crawler::{
    scrape_topic, CrawlOutput, CrawlTarget, HttpFetcher, TraversalSettings, WebScraper,
};
use crate::speech::{build_synthesizer, AudioClip, SpeechSynthesizer};
use crate::summary::{Summarizer, Summary};
use crate::{AudioError, SummaryError};
use std::sync::Arc;

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Message shown next to the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Outcome of one digest run
#[derive(Debug, Clone)]
pub struct DigestReport {
    pub topic: String,
    pub summary: Summary,
    pub audio: Option<AudioClip>,
    /// Number of fragments sent to the summarizer
    pub fragment_count: usize,
    pub notices: Vec<Notice>,
}

impl DigestReport {
    pub fn audio_file_name(&self) -> String {
        audio_file_name(&self.topic)
    }
}

/// `summary_<topic>.mp3`, lowercased, spaces replaced by underscores
pub fn audio_file_name(topic: &str) -> String {
    format!("summary_{}.mp3", topic.to_lowercase().replace(' ', "_"))
}

/// Runs digests; cheap to share between requests
pub struct DigestService {
    fetcher: HttpFetcher,
    traversal: TraversalSettings,
    depth: i32,
    summarizer: Summarizer,
    speech: Result<Arc<dyn SpeechSynthesizer>, AudioError>,
}

impl DigestService {
    /// Creates a service with speech synthesis disabled
    pub fn new(fetcher: HttpFetcher, traversal: TraversalSettings, summarizer: Summarizer) -> Self {
        Self {
            fetcher,
            traversal,
            depth: 1,
            summarizer,
            speech: Err(AudioError::Disabled),
        }
    }

    /// Builds every component from configuration
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let fetcher = HttpFetcher::from_config(config)?;
        let mut service = Self::new(
            fetcher,
            TraversalSettings::from_config(&config.crawler),
            Summarizer::from_config(&config.summary),
        )
        .with_depth(config.crawler.depth);

        service.speech = build_synthesizer(&config.speech);
        match &service.speech {
            Ok(synthesizer) => tracing::info!("Speech synthesis via {}", synthesizer.name()),
            Err(e) => tracing::warn!("Speech synthesis unavailable: {}", e),
        }

        Ok(service)
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.speech = Ok(synthesizer);
        self
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech.is_ok()
    }

    /// Runs a digest for a topic at the configured depth
    pub async fn run(&self, topic: &str) -> Result<DigestReport, SummaryError> {
        let output = scrape_topic(self.fetcher.clone(), self.traversal, topic, self.depth).await;
        self.digest(topic, output).await
    }

    /// Runs a digest for an explicit target and depth
    pub async fn run_target(
        &self,
        target: &CrawlTarget,
        depth: i32,
    ) -> Result<DigestReport, SummaryError> {
        let scraper = WebScraper::new(self.fetcher.clone(), self.traversal);
        let output = scraper.crawl_target(target, depth).await;
        self.digest(&target.topic, output).await
    }

    /// Summarizes a crawl and voices the summary
    async fn digest(
        &self,
        topic: &str,
        output: CrawlOutput,
    ) -> Result<DigestReport, SummaryError> {
        let summary = self
            .summarizer
            .generate_summary(topic, &output.to_prompt_text())
            .await
            .map_err(|e| {
                tracing::error!("Summary for '{}' failed: {}", topic, e);
                e
            })?;

        let mut notices = Vec::new();
        let audio = self.synthesize(&summary, &mut notices).await;

        Ok(DigestReport {
            topic: topic.to_string(),
            summary,
            audio,
            fragment_count: output.len(),
            notices,
        })
    }

    async fn synthesize(&self, summary: &Summary, notices: &mut Vec<Notice>) -> Option<AudioClip> {
        let synthesizer = match &self.speech {
            Ok(synthesizer) => synthesizer,
            Err(AudioError::Disabled) => {
                notices.push(Notice::new(
                    NoticeLevel::Info,
                    "Synthèse vocale désactivée. L'audio ne sera pas généré.",
                ));
                return None;
            }
            Err(e) => {
                notices.push(Notice::new(
                    NoticeLevel::Warning,
                    format!(
                        "Clé API de synthèse vocale non configurée. L'audio ne sera pas généré. ({})",
                        e
                    ),
                ));
                return None;
            }
        };

        match synthesizer.synthesize(summary.as_str()).await {
            Ok(clip) if !clip.is_empty() => {
                tracing::info!("Generated {} bytes of audio", clip.len());
                notices.push(Notice::new(NoticeLevel::Success, "Audio généré avec succès !"));
                Some(clip)
            }
            Ok(_) => {
                tracing::warn!("Speech backend {} returned no audio", synthesizer.name());
                notices.push(Notice::new(
                    NoticeLevel::Error,
                    "Erreur lors de la génération de l'audio : réponse vide",
                ));
                None
            }
            Err(e) => {
                tracing::warn!("Speech synthesis via {} failed: {}", synthesizer.name(), e);
                notices.push(Notice::new(
                    NoticeLevel::Error,
                    format!("Erreur lors de la génération de l'audio : {}", e),
                ));
                None
            }
        }
    }
}
