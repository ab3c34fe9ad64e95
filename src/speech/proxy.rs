//! REST text-to-speech proxy returning the audio payload directly

use crate::speech::{AudioClip, SpeechSynthesizer, DEFAULT_AUDIO_MIME};
use crate::AudioError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

#[derive(Debug, Clone)]
pub struct ProxySynthesizer {
    http_client: Client,
    endpoint: String,
    voice: String,
    api_key: Option<String>,
}

impl ProxySynthesizer {
    pub fn new(
        endpoint: impl Into<String>,
        voice: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
            voice: voice.into(),
            api_key,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ProxySynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioClip, AudioError> {
        let mut request = self.http_client.post(&self.endpoint).json(&ProxyRequest {
            text,
            voice: &self.voice,
        });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
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

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("audio/"))
            .unwrap_or(DEFAULT_AUDIO_MIME)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioError::Network(e.to_string()))?;

        tracing::debug!("Received {} bytes of {} from TTS proxy", bytes.len(), mime_type);
        Ok(AudioClip::new(bytes.to_vec(), mime_type))
    }

    fn name(&self) -> &'static str {
        "proxy"
    }
}
