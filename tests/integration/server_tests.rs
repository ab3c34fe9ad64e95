//! Tests for the web UI router

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{chat_response, fast_fetcher, fast_traversal};
use topic_digest::digest::DigestService;
use topic_digest::server::{build_app, AppState};
use topic_digest::summary::{ChatClient, Summarizer};
use topic_digest::themes::ThemeFile;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Depth 0 keeps the crawler off the network; only the LLM mock is hit
fn state(llm_url: &str) -> AppState {
    let service = DigestService::new(
        fast_fetcher(1),
        fast_traversal(),
        Summarizer::new(ChatClient::new("sk-test").with_base_url(llm_url), "m", 0.7),
    )
    .with_depth(0);
    AppState::new(service, ThemeFile::defaults())
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/digest")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_index_lists_themes() {
    let app = build_app(state("http://127.0.0.1:9"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<option value=\"Technologie\">Technologie</option>"));
    assert!(html.contains("Lancer le scraping"));
}

#[tokio::test]
async fn test_empty_topic_is_rejected() {
    let app = build_app(state("http://127.0.0.1:9"));

    let response = app.oneshot(form("topic=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Veuillez sélectionner un thème pour continuer"));
}

#[tokio::test]
async fn test_digest_renders_summary() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response("Un résumé.\n\nSuite.")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = build_app(state(&mock_server.uri()));
    let response = app.oneshot(form("topic=Science")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Résultats de l'analyse"));
    assert!(html.contains("<p>Un résumé.</p>"));
    assert!(html.contains("<p>Suite.</p>"));
    assert!(html.contains("<option value=\"Science\" selected>"));
    assert!(html.contains("notice info"));
    assert!(!html.contains("<audio"));
}

#[tokio::test]
async fn test_digest_failure_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let app = build_app(state(&mock_server.uri()));
    let response = app.oneshot(form("topic=Science")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("<p class=\"notice error\">Erreur lors de l'analyse"));
}

#[tokio::test]
async fn test_api_themes_and_health() {
    let app = build_app(state("http://127.0.0.1:9"));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/themes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["themes"][2]["name"], "Science");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["speech"], false);
}
