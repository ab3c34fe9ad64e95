//! Integration tests for the text-to-speech backends

use topic_digest::config::SpeechConfig;
use topic_digest::speech::{ElevenLabsSynthesizer, ProxySynthesizer, SpeechSynthesizer};
use topic_digest::AudioError;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_elevenlabs_stream_is_buffered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/text-to-speech/CwhRBWXzGAHq8TQ4Fs17/stream"))
        .and(query_param("output_format", "mp3_44100_128"))
        .and(header("xi-api-key", "tts-key"))
        .and(body_json(serde_json::json!({
            "text": "Bonjour",
            "model_id": "eleven_multilingual_v2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x49, 0x44, 0x33, 0x04]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        base_url: mock_server.uri(),
        ..SpeechConfig::default()
    };
    let clip = ElevenLabsSynthesizer::from_config(&config, "tts-key")
        .synthesize("Bonjour")
        .await
        .unwrap();

    assert_eq!(clip.bytes, vec![0x49, 0x44, 0x33, 0x04]);
    assert_eq!(clip.mime_type, "audio/mpeg");
}

#[tokio::test]
async fn test_elevenlabs_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        base_url: mock_server.uri(),
        ..SpeechConfig::default()
    };
    let err = ElevenLabsSynthesizer::from_config(&config, "bad")
        .synthesize("Bonjour")
        .await
        .unwrap_err();

    assert!(matches!(err, AudioError::Api { status: 401, .. }));
}

#[tokio::test]
async fn test_proxy_synthesizer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tts"))
        .and(header("authorization", "Bearer proxy-key"))
        .and(body_json(serde_json::json!({ "text": "Bonjour", "voice": "alloy" })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"RIFF".to_vec(), "audio/wav"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let synthesizer = ProxySynthesizer::new(
        format!("{}/tts", mock_server.uri()),
        "alloy",
        Some("proxy-key".to_string()),
    );
    let clip = synthesizer.synthesize("Bonjour").await.unwrap();

    assert_eq!(clip.bytes, b"RIFF".to_vec());
    assert_eq!(clip.mime_type, "audio/wav");
    assert_eq!(synthesizer.name(), "proxy");
}

#[tokio::test]
async fn test_proxy_unreachable() {
    let synthesizer = ProxySynthesizer::new("http://127.0.0.1:9/tts", "alloy", None);
    let err = synthesizer.synthesize("Bonjour").await.unwrap_err();
    assert!(matches!(err, AudioError::Network(_)));
}
