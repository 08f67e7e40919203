// ABOUTME: Integration tests for the library pipeline over HTML fixtures and a mock server.
// ABOUTME: Covers article extraction, rendering, charset handling, and error categories.

use extractor::{Client, ContentType, ErrorCode};
use httpmock::prelude::*;
use std::fs;

/// Load an HTML snapshot from the fixtures directory.
fn load_html_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.html", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path, e))
}

#[test]
fn fixture_article_keeps_body_and_drops_chrome() {
    let html = load_html_fixture("article");
    let client = Client::builder().build().unwrap();
    let article = client
        .extract_html(&html, "https://breadnotes.example/posts/sourdough")
        .expect("fixture should extract");

    assert!(article.content.contains("lactic acid bacteria"));
    assert!(article.content.contains("more than a century old"));
    assert!(!article.content.contains("Weeknight focaccia"));
    assert!(!article.content.contains("window.analytics"));
    assert!(!article.text_content.contains("Privacy"));
    assert!(article.title.contains("Sourdough"));
    assert_eq!(article.length, article.text_content.chars().count());
}

#[test]
fn fixture_renders_in_every_format() {
    let html = load_html_fixture("article");
    let client = Client::builder().build().unwrap();
    let article = client
        .extract_html(&html, "https://breadnotes.example/posts/sourdough")
        .unwrap();

    let as_html = article.render(ContentType::Html);
    assert_eq!(as_html, article.content);

    let as_text = article.render(ContentType::Text);
    assert!(as_text.contains("carbon dioxide"));
    assert!(!as_text.contains("<p"));

    let as_md = article.render(ContentType::Markdown);
    assert!(as_md.contains("carbon dioxide"));
    assert!(as_md.contains("(https://breadnotes.example/guides/feeding)"), "markdown: {}", as_md);
}

#[tokio::test]
async fn windows_1252_page_is_decoded() {
    let mut body = load_html_fixture("article").into_bytes();
    // Swap "flavour." for "flavour\xe9." to carry one non-UTF-8 byte.
    let needle = b"flavour.";
    let pos = body
        .windows(needle.len())
        .position(|w| w == needle)
        .expect("needle present");
    body.splice(pos + 7..pos + 7, [0xe9u8]);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latin1");
        then.status(200)
            .header("content-type", "text/html; charset=windows-1252")
            .body(body.clone());
    });

    let client = Client::builder().build().unwrap();
    let article = client.extract(&server.url("/latin1")).await.unwrap();
    assert!(article.text_content.contains("flavouré."), "text: {}", article.text_content);
}

#[tokio::test]
async fn error_status_fails_only_when_strict() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404)
            .header("content-type", "text/html")
            .body(load_html_fixture("article"));
    });
    let url = server.url("/missing");

    let lenient = Client::builder().build().unwrap();
    assert!(lenient.extract(&url).await.is_ok());

    let strict = Client::builder().accept_error_status(false).build().unwrap();
    let err = strict.extract(&url).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Fetch);
}

#[tokio::test]
async fn custom_headers_reach_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth")
            .header("authorization", "Bearer token")
            .header("user-agent", "reader-test/1.0");
        then.status(200)
            .header("content-type", "text/html")
            .body(load_html_fixture("article"));
    });

    let client = Client::builder()
        .user_agent("reader-test/1.0")
        .header("Authorization", "Bearer token")
        .build()
        .unwrap();
    client.extract(&server.url("/auth")).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn invalid_url_never_hits_network() {
    let client = Client::builder().build().unwrap();
    let err = client.extract("example.com/no-scheme").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidUrl);
}
