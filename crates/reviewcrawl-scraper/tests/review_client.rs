//! Integration tests for `ReviewClient::fetch_page` and
//! `ReviewClient::collect_reviews`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use reviewcrawl_core::MalformedReviewPolicy;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reviewcrawl_scraper::{ReviewClient, ScraperError};

const PRODUCT_PATH: &str = "/reviews/product/47055697";

/// Builds a `ReviewClient` suitable for tests: 5-second timeout, no page delay.
fn test_client() -> ReviewClient {
    ReviewClient::new(5, "reviewcrawl-test/0.1", 0).expect("failed to build test ReviewClient")
}

fn review_page(names: &[&str]) -> String {
    let blocks: String = names
        .iter()
        .map(|name| {
            format!(
                r#"<div class="customer-review-body">
  <h3 class="visuallyhidden">Customer review by {name}</h3>
  <div class="customer-stars"><span class="visuallyhidden">5.0 out of 5 stars</span></div>
  <span class="customer-review-date">4/4/2018</span>
  <div class="customer-review-title">Review from {name}</div>
  <div class="customer-review-text">Text from {name}</div>
</div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div class="js-review-list">{blocks}</div></body></html>"#)
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

// ---------------------------------------------------------------------------
// fetch_page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_page_returns_markup_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(html(review_page(&["Frank"])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let markup = test_client().fetch_page(&url).await;

    assert!(markup.is_ok(), "expected Ok, got: {markup:?}");
    assert!(markup.unwrap().contains("Customer review by Frank"));
}

#[tokio::test]
async fn fetch_page_maps_non_success_status_to_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let err = test_client().fetch_page(&url).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, ref url } if url.ends_with(PRODUCT_PATH)),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_page_treats_other_2xx_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(203).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    assert!(test_client().fetch_page(&url).await.is_ok());
}

#[tokio::test]
async fn fetch_page_reports_connection_failure() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}{PRODUCT_PATH}");

    let err = test_client().fetch_page(&url).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::Connection { .. }),
        "expected Connection, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// collect_reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collect_reviews_requests_every_page_even_when_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(html(review_page(&[])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let records = test_client()
        .collect_reviews(&url, 5, MalformedReviewPolicy::Skip)
        .await;

    assert!(records.is_empty());
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 5, "expected exactly 5 page fetches");
}

#[tokio::test]
async fn collect_reviews_uses_listing_query_for_later_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(html(review_page(&[])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let _ = test_client()
        .collect_reviews(&url, 3, MalformedReviewPolicy::Skip)
        .await;

    let requests = server.received_requests().await.expect("recording enabled");
    let queries: Vec<Option<String>> = requests
        .iter()
        .map(|r| r.url.query().map(str::to_owned))
        .collect();
    assert_eq!(
        queries,
        vec![
            None,
            Some("limit=20&page=2&sort=relevancy".to_owned()),
            Some("limit=20&page=3&sort=relevancy".to_owned()),
        ]
    );
}

#[tokio::test]
async fn collect_reviews_keeps_page_then_on_page_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param_is_missing("page"))
        .respond_with(html(review_page(&["Ann", "Ben"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param("page", "2"))
        .respond_with(html(review_page(&["Cat", "Dan"])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let records = test_client()
        .collect_reviews(&url, 2, MalformedReviewPolicy::Skip)
        .await;

    let names: Vec<&str> = records.iter().map(|r| r.customer_name.as_str()).collect();
    assert_eq!(names, ["Ann", "Ben", "Cat", "Dan"]);
}

#[tokio::test]
async fn collect_reviews_skips_failed_pages_and_continues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param_is_missing("page"))
        .respond_with(html(review_page(&["Ann"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param("page", "3"))
        .respond_with(html(review_page(&["Cat"])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let records = test_client()
        .collect_reviews(&url, 3, MalformedReviewPolicy::Skip)
        .await;

    let names: Vec<&str> = records.iter().map(|r| r.customer_name.as_str()).collect();
    assert_eq!(names, ["Ann", "Cat"]);
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn collect_reviews_discards_page_with_malformed_review_under_abort_policy() {
    let server = MockServer::start().await;
    let broken = r#"<html><body><div class="js-review-list">
<div class="customer-review-body"><h3 class="visuallyhidden">Customer review by X</h3></div>
</div></body></html>"#;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param_is_missing("page"))
        .respond_with(html(broken.to_owned()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(query_param("page", "2"))
        .respond_with(html(review_page(&["Ben"])))
        .mount(&server)
        .await;

    let url = format!("{}{PRODUCT_PATH}", server.uri());
    let records = test_client()
        .collect_reviews(&url, 2, MalformedReviewPolicy::AbortPage)
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].customer_name, "Ben");
}

#[tokio::test]
async fn collect_reviews_with_zero_pages_makes_no_requests() {
    let server = MockServer::start().await;
    let url = format!("{}{PRODUCT_PATH}", server.uri());

    let records = test_client()
        .collect_reviews(&url, 0, MalformedReviewPolicy::Skip)
        .await;

    assert!(records.is_empty());
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
