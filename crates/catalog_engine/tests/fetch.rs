use std::time::Duration;

use catalog_engine::{
    FailureKind, FetchSettings, GameRecord, PageFetcher, PageQuery, ReqwestPageFetcher,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> ReqwestPageFetcher {
    ReqwestPageFetcher::new(FetchSettings::with_base_url(format!(
        "{}/api/games",
        server.uri()
    )))
}

#[tokio::test]
async fn bulk_query_sends_only_the_size_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page_size", "100"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"slug": "gta-v", "background_image": "https://img/gta.jpg",
                 "genres": [{"name": "Action"}], "rating": 4.47},
                {"slug": "portal-2", "genres": [], "rating": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = fetcher_for(&server)
        .fetch_page(PageQuery::bulk(100))
        .await
        .expect("fetch ok");

    assert_eq!(
        records,
        vec![
            GameRecord {
                slug: Some("gta-v".to_string()),
                background_image: Some("https://img/gta.jpg".to_string()),
                genres: vec!["Action".to_string()],
                rating: Some(4.47),
            },
            GameRecord::new("portal-2"),
        ]
    );
}

#[tokio::test]
async fn paged_query_sends_page_and_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page", "3"))
        .and(query_param("page_size", "50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"slug": "celeste"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = fetcher_for(&server)
        .fetch_page(PageQuery::page(3, 50))
        .await
        .expect("fetch ok");
    assert_eq!(records, vec![GameRecord::new("celeste")]);
}

#[tokio::test]
async fn unexpected_json_shape_is_empty_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"detail": "ok"})),
        )
        .mount(&server)
        .await;

    let records = fetcher_for(&server)
        .fetch_page(PageQuery::bulk(100))
        .await
        .expect("fetch ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>502</html>", "text/html"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_page(PageQuery::bulk(100))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn non_success_status_fails_the_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_page(PageQuery::page(9, 50))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::with_base_url(server.uri())
    };
    let err = ReqwestPageFetcher::new(settings)
        .fetch_page(PageQuery::bulk(100))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("[\"0123456\"]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::with_base_url(server.uri())
    };
    let err = ReqwestPageFetcher::new(settings)
        .fetch_page(PageQuery::bulk(100))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn invalid_base_url_is_reported() {
    let fetcher = ReqwestPageFetcher::new(FetchSettings::with_base_url("not a url"));
    let err = fetcher.fetch_page(PageQuery::bulk(100)).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
