//! Integration tests for the crawler
//!
//! These tests use wiremock to serve small sites and check the traversal
//! order, depth limits and link filtering end-to-end.

mod common;

use common::{fast_fetcher, fast_traversal, page};
use topic_digest::crawler::{CrawlTarget, FragmentKind, TraversalSettings, WebScraper};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, html: String, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_depth_two_follows_first_links_in_order() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        page(
            &["Le paragraphe de la page d'accueil."],
            &["/a", "/b", "http://other.invalid/x", "/c", "/d"],
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", page(&["Premier article de la liste."], &["/"]), 1).await;
    mount_page(&mock_server, "/b", page(&["Deuxième article de la liste."], &[]), 1).await;
    mount_page(&mock_server, "/c", page(&["Troisième article de la liste."], &[]), 1).await;
    mount_page(&mock_server, "/d", page(&["Jamais visité par le crawler."], &[]), 0).await;

    let scraper = WebScraper::new(fast_fetcher(1), fast_traversal());
    let fragments = scraper.scrap_with_depth(&mock_server.uri(), 2).await;

    let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Le paragraphe de la page d'accueil.",
            "Premier article de la liste.",
            "Deuxième article de la liste.",
            "Troisième article de la liste.",
        ]
    );
    assert!(fragments.iter().all(|f| f.kind == FragmentKind::Paragraph));
}

#[tokio::test]
async fn test_depth_one_fetches_seed_only() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/seed",
        page(&["Un paragraphe assez long pour compter."], &["/child"]),
        1,
    )
    .await;
    mount_page(&mock_server, "/child", page(&["Ne doit pas être visité."], &[]), 0).await;

    let scraper = WebScraper::new(fast_fetcher(1), fast_traversal());
    let fragments = scraper
        .scrap_with_depth(&format!("{}/seed", mock_server.uri()), 1)
        .await;

    assert_eq!(fragments.len(), 1);
}

#[tokio::test]
async fn test_depth_zero_fetches_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let scraper = WebScraper::new(fast_fetcher(1), fast_traversal());
    assert!(scraper.scrap_with_depth(&mock_server.uri(), 0).await.is_empty());
}

#[tokio::test]
async fn test_max_links_setting() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", page(&[], &["/one", "/two"]), 1).await;
    mount_page(&mock_server, "/one", page(&["Seul lien suivi par le crawler."], &[]), 1).await;
    mount_page(&mock_server, "/two", page(&["Lien ignoré par le crawler."], &[]), 0).await;

    let settings = TraversalSettings {
        max_links: 1,
        ..fast_traversal()
    };
    let scraper = WebScraper::new(fast_fetcher(1), settings);
    let fragments = scraper.scrap_with_depth(&mock_server.uri(), 2).await;

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].text, "Seul lien suivi par le crawler.");
}

#[tokio::test]
async fn test_failed_seed_does_not_stop_other_seeds() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/one", page(&["Fragment de la première source."], &[]), 1).await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/three", page(&["Fragment de la troisième source."], &[]), 1).await;

    let target = CrawlTarget::new(
        "Science",
        vec![
            format!("{}/one", base),
            format!("{}/down", base),
            format!("{}/three", base),
        ],
    );

    let scraper = WebScraper::new(fast_fetcher(2), fast_traversal());
    let output = scraper.crawl_target(&target, 1).await;

    let texts: Vec<&str> = output.fragments().iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Fragment de la première source.",
            "Fragment de la troisième source."
        ]
    );
}

#[tokio::test]
async fn test_crawl_output_prompt_text() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        "<html><body><h2>Un titre</h2><p>Un paragraphe assez long pour compter.</p></body></html>"
            .to_string(),
        1,
    )
    .await;

    let scraper = WebScraper::new(fast_fetcher(1), fast_traversal());
    let target = CrawlTarget::new("Science", vec![mock_server.uri()]);
    let output = scraper.crawl_target(&target, 1).await;

    assert_eq!(
        output.to_prompt_text(),
        r#"[{"type":"paragraph","text":"Un paragraphe assez long pour compter."},{"type":"heading2","text":"Un titre"}]"#
    );
}
