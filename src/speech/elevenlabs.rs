//! ElevenLabs streaming text-to-speech

use crate::config::SpeechConfig;
use crate::speech::{AudioClip, SpeechSynthesizer, DEFAULT_AUDIO_MIME};
use crate::AudioError;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// Calls the ElevenLabs streaming endpoint and buffers the whole stream
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    http_client: Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    model_id: String,
    output_format: String,
}

impl ElevenLabsSynthesizer {
    pub fn from_config(config: &SpeechConfig, api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            output_format: config.output_format.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/text-to-speech/{}/stream", self.base_url, self.voice_id)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioClip, AudioError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .header("accept", DEFAULT_AUDIO_MIME)
            .json(&SpeechRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await
            .map_err(|e| AudioError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AudioError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let mut stream = response.bytes_stream();
        let mut bytes = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| AudioError::Network(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }

        tracing::debug!("Received {} bytes of audio from ElevenLabs", bytes.len());
        Ok(AudioClip::new(bytes, DEFAULT_AUDIO_MIME))
    }

    fn name(&self) -> &'static str {
        "elevenlabs"
    }
}
