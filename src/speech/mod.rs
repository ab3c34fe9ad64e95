//! Text-to-speech backends
//!
//! Both backends implement [`SpeechSynthesizer`]; which one is used is decided
//! by the `[speech]` section of the configuration.

mod elevenlabs;
mod proxy;

pub use elevenlabs::ElevenLabsSynthesizer;
pub use proxy::ProxySynthesizer;

use crate::config::{SpeechConfig, SpeechProvider};
use crate::AudioError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

/// MIME type assumed when a backend does not report one
pub const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

/// Synthesized audio, held in memory only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:` URI embedding the clip, for inline players and downloads
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Converts text to audio bytes
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioClip, AudioError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Builds the synthesizer selected by configuration
///
/// # Returns
///
/// * `Ok(synthesizer)` - The configured backend
/// * `Err(AudioError::Disabled)` - Speech is turned off
/// * `Err(AudioError::MissingApiKey)` - ElevenLabs is selected but its key is unset
pub fn build_synthesizer(
    config: &SpeechConfig,
) -> Result<Arc<dyn SpeechSynthesizer>, AudioError> {
    match config.provider {
        SpeechProvider::Disabled => Err(AudioError::Disabled),
        SpeechProvider::Elevenlabs => {
            let api_key = read_key(&config.api_key_env)
                .ok_or_else(|| AudioError::MissingApiKey(config.api_key_env.clone()))?;
            Ok(Arc::new(ElevenLabsSynthesizer::from_config(config, api_key)))
        }
        SpeechProvider::Proxy => {
            let endpoint = config.proxy_url.clone().ok_or(AudioError::Disabled)?;
            Ok(Arc::new(ProxySynthesizer::new(
                endpoint,
                config.voice_id.clone(),
                read_key(&config.api_key_env),
            )))
        }
    }
}

fn read_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|key| !key.trim().is_empty())
}
