//! Integration tests for the traffic client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_traffic::{HttpTrafficClient, TrafficClient, TrafficConfig, TrafficError};

const ORIGIN: &str = "12.9715987,77.594566";
const DESTINATION: &str = "28.6139391,77.2090212";

fn config_for_mock(server: &MockServer) -> TrafficConfig {
    TrafficConfig::for_testing(&format!("{}/data", server.uri()))
}

const fn sample_routes_json() -> &'static str {
    r#"{
        "routes": [
            { "id": "r1", "summary": "NH44", "duration_min": 1980 },
            { "id": "r2", "summary": "NH48", "duration_min": 2040 },
            { "id": "r3", "summary": "Expressway", "duration_min": 1890 }
        ]
    }"#
}

#[tokio::test]
async fn test_fetch_routes_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_routes_json()))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let routes = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap();

    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].label().as_deref(), Some("NH44"));
    assert_eq!(routes[2].label().as_deref(), Some("Expressway"));
}

#[tokio::test]
async fn test_fetch_routes_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("origin", ORIGIN))
        .and(query_param("destination", DESTINATION))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "routes": [] }"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let routes = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap();

    assert!(routes.is_empty());
}

#[tokio::test]
async fn test_fetch_routes_missing_routes_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let routes = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap();

    assert!(routes.is_empty());
}

#[tokio::test]
async fn test_fetch_routes_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let err = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap_err();

    assert!(matches!(
        err,
        TrafficError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_fetch_routes_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let err = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap_err();

    assert!(matches!(err, TrafficError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_routes_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let result = client.fetch_routes(ORIGIN, DESTINATION).await;

    assert!(matches!(result, Err(TrafficError::RequestFailed(_))));
}

#[tokio::test]
async fn test_fetch_routes_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpTrafficClient::new(&config_for_mock(&server)).unwrap();
    let result = client.fetch_routes(ORIGIN, DESTINATION).await;

    assert!(matches!(result, Err(TrafficError::ParseError(_))));
}

#[tokio::test]
async fn test_fetch_routes_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_routes_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = TrafficConfig {
        timeout_secs: 1,
        ..config_for_mock(&server)
    };
    let client = HttpTrafficClient::new(&config).unwrap();
    let err = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap_err();

    assert!(matches!(err, TrafficError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_fetch_routes_connection_refused() {
    // Nothing listens on port 1
    let config = TrafficConfig::for_testing("http://127.0.0.1:1/data");

    let client = HttpTrafficClient::new(&config).unwrap();
    let result = client.fetch_routes(ORIGIN, DESTINATION).await;

    assert!(matches!(result, Err(TrafficError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_connection_error_does_not_expose_api_key() {
    let config = TrafficConfig {
        api_key: "SUPER-SECRET-KEY".to_string(),
        ..TrafficConfig::for_testing("http://127.0.0.1:1/data")
    };

    let client = HttpTrafficClient::new(&config).unwrap();
    let err = client.fetch_routes(ORIGIN, DESTINATION).await.unwrap_err();

    assert!(matches!(err, TrafficError::ConnectionFailed(_)));
    assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
    assert!(!err.to_string().contains("key="));
}
