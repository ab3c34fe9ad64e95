//! End-to-end digest runs against mocked sites, LLM and TTS

mod common;

use common::{chat_response, fast_fetcher, fast_traversal, page};
use std::sync::Arc;
use topic_digest::crawler::CrawlTarget;
use topic_digest::digest::{DigestService, NoticeLevel};
use topic_digest::speech::ProxySynthesizer;
use topic_digest::summary::{ChatClient, Summarizer};
use topic_digest::SummaryError;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&["Une découverte majeure annoncée aujourd'hui."], &[])),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn service(server: &MockServer) -> DigestService {
    DigestService::new(
        fast_fetcher(1),
        fast_traversal(),
        Summarizer::new(
            ChatClient::new("sk-test").with_base_url(server.uri()),
            "test-model",
            0.7,
        ),
    )
}

#[tokio::test]
async fn test_full_digest_with_audio() {
    let mock_server = MockServer::start().await;
    mock_site(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Une découverte majeure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Résumé du jour.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/tts"))
        .and(body_string_contains("Résumé du jour."))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1, 2, 3], "audio/mpeg"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let synthesizer = ProxySynthesizer::new(format!("{}/tts", mock_server.uri()), "v", None);
    let service = service(&mock_server).with_synthesizer(Arc::new(synthesizer));
    let target = CrawlTarget::new("Science", vec![format!("{}/news", mock_server.uri())]);

    let report = service.run_target(&target, 1).await.unwrap();

    assert_eq!(report.topic, "Science");
    assert_eq!(report.summary.as_str(), "Résumé du jour.");
    assert_eq!(report.fragment_count, 1);
    assert_eq!(report.audio.as_ref().map(|clip| clip.len()), Some(3));
    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_speech_failure_keeps_summary() {
    let mock_server = MockServer::start().await;
    mock_site(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Résumé du jour.")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/tts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let synthesizer = ProxySynthesizer::new(format!("{}/tts", mock_server.uri()), "v", None);
    let service = service(&mock_server).with_synthesizer(Arc::new(synthesizer));
    let target = CrawlTarget::new("Science", vec![format!("{}/news", mock_server.uri())]);

    let report = service.run_target(&target, 1).await.unwrap();

    assert_eq!(report.summary.as_str(), "Résumé du jour.");
    assert!(report.audio.is_none());
    assert_eq!(report.notices[0].level, NoticeLevel::Error);
    assert!(report.notices[0].message.contains("quota exceeded"));
}

#[tokio::test]
async fn test_speech_disabled_notice() {
    let mock_server = MockServer::start().await;
    mock_site(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Résumé.")))
        .mount(&mock_server)
        .await;

    let target = CrawlTarget::new("Science", vec![format!("{}/news", mock_server.uri())]);
    let report = service(&mock_server).run_target(&target, 1).await.unwrap();

    assert!(report.audio.is_none());
    assert_eq!(report.notices[0].level, NoticeLevel::Info);
}

#[tokio::test]
async fn test_summary_failure_aborts_digest() {
    let mock_server = MockServer::start().await;
    mock_site(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let target = CrawlTarget::new("Science", vec![format!("{}/news", mock_server.uri())]);
    let err = service(&mock_server).run_target(&target, 1).await.unwrap_err();

    assert!(matches!(err, SummaryError::Api { status: 429, .. }));
}

#[tokio::test]
async fn test_empty_crawl_still_summarizes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Voici les informations extraites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Rien à signaler.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = service(&mock_server)
        .with_depth(0)
        .run("Science")
        .await
        .unwrap();

    assert_eq!(report.fragment_count, 0);
    assert_eq!(report.summary.as_str(), "Rien à signaler.");
}
