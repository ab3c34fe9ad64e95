//! Summary generation through a hosted LLM
//!
//! The scraped fragments are embedded in a French prompt together with the
//! topic; the model answers with plain explanatory text.

mod client;

pub use client::{ChatClient, ChatRequest, Message};

use crate::config::SummaryConfig;
use crate::SummaryError;
use std::fmt;

/// System prompt sent with every summary request
pub const SYSTEM_PROMPT: &str = "Tu es un assistant expert en synthèse d'informations et en analyse de données. \
Rédige un texte explicatif concis, clair et structuré en langage naturel.";

/// Builds the user prompt for a topic and its stringified crawl output
pub fn format_prompt(topic: &str, scraped_data: &str) -> String {
    format!(
        "Tu as analysé des articles pour le thème '{topic}'. Voici les informations extraites :\n\n\
         {scraped_data}\n\n\
         À partir de ces informations, rédige un résumé clair, concis et structuré destiné à un utilisateur. \
         Le résumé doit être exclusivement du texte explicatif, sans aucun formatage JSON, sans code, et sans autres balises. \
         Le résumé doit contenir les points saillants des articles, les tendances principales et un aperçu global des informations apprises. \
         Le résumé doit contenir les sources des articles analysés avec leurs liens."
    )
}

/// Human-readable summary returned by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    text: String,
}

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Turns crawl output into a [`Summary`]
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: ChatClient,
    model: String,
    temperature: f32,
}

impl Summarizer {
    pub fn new(client: ChatClient, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(
            ChatClient::from_config(config),
            config.model.clone(),
            config.temperature,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the model to summarize `scraped_data` for `topic`
    ///
    /// Single shot: failures are returned as-is, never retried.
    pub async fn generate_summary(
        &self,
        topic: &str,
        scraped_data: &str,
    ) -> Result<Summary, SummaryError> {
        tracing::info!(
            "Requesting summary for '{}' from {} ({} bytes of scraped data)",
            topic,
            self.model,
            scraped_data.len()
        );

        let request = ChatRequest::new(self.model.clone())
            .message(Message::system(SYSTEM_PROMPT))
            .message(Message::user(format_prompt(topic, scraped_data)))
            .temperature(self.temperature);

        let text = self.client.chat_completion(&request).await?;
        Ok(Summary::new(text))
    }
}
