//! Integration tests for the HTTP fetchers against a mock server.
//!
//! The mock endpoints serve the fixture payloads from `test-data/`, so the
//! whole fetch → strip → parse → extract path runs without the network.
//! Live endpoint tests are marked `#[ignore]`.

use relkw_suggest::{
    aggregate, suggest, Engine, HttpFetcher, SuggestConfig, SuggestError, SuggestionFetcher,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NAVER_FIXTURE: &str = include_str!("../test-data/naver.jsonp");
const DAUM_FIXTURE: &str = include_str!("../test-data/daum.jsonp");

fn mock_config(server: &MockServer) -> SuggestConfig {
    SuggestConfig {
        naver_endpoint: format!("{}/nx/ac", server.uri()),
        daum_endpoint: format!("{}/v2/sushi/pc/get", server.uri()),
        timeout_seconds: Some(5),
        ..Default::default()
    }
}

#[tokio::test]
async fn naver_request_carries_keyword_flags_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nx/ac"))
        .and(query_param("q", "날씨"))
        .and(query_param("_callback", "_jsonp_4"))
        .and(query_param("st", "100"))
        .and(header("referer", "https://www.naver.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NAVER_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let record = suggest(&fetcher, Engine::Naver, "날씨").await.expect("suggest");

    assert_eq!(record.engine, Engine::Naver);
    assert_eq!(record.keywords.len(), 8);
    assert_eq!(record.keywords[1], "날씨예보");
}

#[tokio::test]
async fn daum_request_uses_timestamp_callback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sushi/pc/get"))
        .and(query_param("q", "날씨"))
        .and(header("referer", "https://www.daum.net/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DAUM_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let record = suggest(&fetcher, Engine::Daum, "날씨").await.expect("suggest");
    assert_eq!(record.keywords.len(), 6);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let callback = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "callback")
        .map(|(_, v)| v.into_owned())
        .expect("callback parameter");
    let digits = callback.strip_prefix("jsonp").expect("jsonp prefix");
    assert!(digits.len() >= 13, "callback {callback} lacks a millisecond timestamp");
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn user_agent_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nx/ac"))
        .and(header("user-agent", "RelkwTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"_jsonp_4({"items":[]})"#))
        .expect(1)
        .mount(&server)
        .await;

    let config = SuggestConfig {
        user_agent: "RelkwTest/1.0".into(),
        ..mock_config(&server)
    };
    let fetcher = HttpFetcher::new(config).expect("fetcher");
    let record = suggest(&fetcher, Engine::Naver, "x").await.expect("suggest");
    assert!(record.keywords.is_empty());
}

#[tokio::test]
async fn error_status_rejected_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string(DAUM_FIXTURE))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let err = fetcher.fetch(Engine::Daum, "x").await.unwrap_err();
    assert!(matches!(err, SuggestError::Transport(_)));
    assert!(err.to_string().contains("Daum HTTP error"));
}

#[tokio::test]
async fn error_status_passed_through_when_allowed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string(DAUM_FIXTURE))
        .mount(&server)
        .await;

    let config = SuggestConfig {
        reject_error_status: false,
        ..mock_config(&server)
    };
    let fetcher = HttpFetcher::new(config).expect("fetcher");
    let record = suggest(&fetcher, Engine::Daum, "x").await.expect("body decoded");
    assert_eq!(record.keywords.len(), 6);
}

#[tokio::test]
async fn html_block_page_is_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let err = suggest(&fetcher, Engine::Naver, "x").await.unwrap_err();
    assert!(matches!(err, SuggestError::MalformedEnvelope(_)));
}

#[tokio::test]
async fn wrong_schema_is_schema_mismatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sushi/pc/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NAVER_FIXTURE))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let err = suggest(&fetcher, Engine::Daum, "x").await.unwrap_err();
    assert!(matches!(
        err,
        SuggestError::SchemaMismatch {
            engine: Engine::Daum,
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let config = SuggestConfig {
        naver_endpoint: "http://127.0.0.1:9/nx/ac".into(),
        timeout_seconds: Some(2),
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(config).expect("fetcher");
    let err = fetcher.fetch(Engine::Naver, "x").await.unwrap_err();
    assert!(matches!(err, SuggestError::Transport(_)));
    assert!(!err.to_string().contains("q=x"), "keyword leaked: {err}");
}

#[tokio::test]
async fn fixtures_from_both_engines_aggregate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nx/ac"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NAVER_FIXTURE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/sushi/pc/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DAUM_FIXTURE))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(mock_config(&server)).expect("fetcher");
    let mut records = Vec::new();
    for engine in Engine::all() {
        records.push(suggest(&fetcher, *engine, "날씨").await.expect("suggest"));
    }

    let result = aggregate(&records);
    // 8 Naver + 6 Daum, of which "날씨" and "날씨예보" overlap → 12 distinct.
    // "daum 날씨" is the only marked suggestion; the other 11 go to both.
    assert_eq!(result.naver.len(), 11);
    assert_eq!(result.daum.len(), 12);
    assert!(!result.naver.contains(&"daum 날씨".to_string()));
    assert!(result.daum.contains(&"daum 날씨".to_string()));
}

#[tokio::test]
#[ignore] // Live test — run with `cargo test -- --ignored`
async fn live_naver_and_daum_suggestions() {
    let fetcher = HttpFetcher::new(SuggestConfig::default()).expect("fetcher");
    for engine in Engine::all() {
        let record = suggest(&fetcher, *engine, "날씨").await.expect("live suggest");
        assert!(!record.keywords.is_empty(), "{engine} returned nothing");
    }
}
