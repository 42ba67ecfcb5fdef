//! Integration tests for the Nominatim client (wiremock-based)

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};

fn create_test_client(server: &MockServer) -> NominatimClient {
    NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap()
}

fn linz_response() -> serde_json::Value {
    serde_json::json!([{
        "place_id": 123_456,
        "lat": "48.3",
        "lon": "14.3",
        "display_name": "Linz, Oberösterreich, 4020, Österreich",
        "address": {
            "city": "Linz",
            "state": "Oberösterreich",
            "country": "Österreich",
            "postcode": "4020",
            "country_code": "at"
        }
    }])
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_resolve_city_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("q", "Linz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(linz_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let location = client.resolve("Linz", "").await.unwrap();

    assert_eq!(location.latitude(), Some(48.3));
    assert_eq!(location.longitude(), Some(14.3));
    assert_eq!(location.city_name(), Some("Linz"));
    assert_eq!(location.state_name(), Some("Oberösterreich"));
    assert_eq!(location.country_name(), Some("Österreich"));
    assert_eq!(location.postal_code(), Some("4020"));
}

#[tokio::test]
async fn test_resolve_postal_code_combines_with_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "4020 Linz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(linz_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let location = client.resolve("Linz", "4020").await.unwrap();
    assert_eq!(location.city_name(), Some("Linz"));
}

#[tokio::test]
async fn test_resolve_postal_code_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "4020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "lat": "48.3",
            "lon": "14.3",
            "address": { "city": "Linz", "country": "Österreich" }
        }])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let location = client.resolve("", " 4020 ").await.unwrap();

    // Postal code missing from the breakdown falls back to the request
    assert_eq!(location.postal_code(), Some("4020"));
    assert_eq!(location.state_name(), None);
}

#[tokio::test]
async fn test_sends_user_agent_and_language() {
    let server = MockServer::start().await;

    let config = NominatimConfig {
        user_agent: "wetterblick-test/1.0 (test@example.com)".to_string(),
        accept_language: "de".to_string(),
        ..NominatimConfig::for_testing(server.uri())
    };

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "wetterblick-test/1.0 (test@example.com)"))
        .and(query_param("accept-language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(linz_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config).unwrap();
    assert!(client.resolve("Linz", "").await.is_ok());
}

#[tokio::test]
async fn test_only_first_candidate_is_used() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "48.3", "lon": "14.3", "address": { "town": "Erste" } },
            { "lat": "10.0", "lon": "10.0", "address": { "town": "Zweite" } }
        ])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let location = client.resolve("Irgendwo", "").await.unwrap();
    assert_eq!(location.city_name(), Some("Erste"));
    assert_eq!(location.latitude(), Some(48.3));
}

#[tokio::test]
async fn test_candidate_without_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "address": { "city": "Nirgendwo" } }
        ])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let location = client.resolve("Nirgendwo", "").await.unwrap();
    assert_eq!(location.latitude(), None);
    assert_eq!(location.longitude(), None);
    assert!(location.coordinates().is_err());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_blank_input_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(linz_response()))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("", "").await;
    assert!(matches!(result, Err(GeocodingError::InvalidInput)));
}

#[tokio::test]
async fn test_numeric_postcode_does_not_fail_resolve() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "lat": "48.3",
            "lon": "14.3",
            "address": {"city": "Linz", "postcode": 4020}
        }])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let record = client.resolve("Linz", "").await.unwrap();
    assert_eq!(record.city_name(), Some("Linz"));
    assert_eq!(record.postal_code(), Some("4020"));
    assert_eq!(record.latitude(), Some(48.3));
}

#[tokio::test]
async fn test_null_candidate_has_no_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([null])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let record = client.resolve("Linz", "").await.unwrap();
    assert_eq!(record.latitude(), None);
    assert_eq!(record.longitude(), None);
    assert_eq!(record.city_name(), None);
}

#[tokio::test]
async fn test_empty_array_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("Atlantis", "").await;
    assert!(
        matches!(result, Err(GeocodingError::NotFound(ref q)) if q == "Atlantis"),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_non_array_body_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "nope"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("Linz", "").await;
    assert!(matches!(result, Err(GeocodingError::NotFound(_))));
}

#[tokio::test]
async fn test_server_error_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("Linz", "").await;
    assert!(
        matches!(result, Err(GeocodingError::UpstreamError { status: 503 })),
        "Expected UpstreamError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_forbidden_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("Linz", "").await;
    assert!(matches!(
        result,
        Err(GeocodingError::UpstreamError { status: 403 })
    ));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.resolve("Linz", "").await;
    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(linz_response())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = NominatimConfig {
        timeout_secs: 1,
        ..NominatimConfig::for_testing(server.uri())
    };
    let client = NominatimClient::new(&config).unwrap();
    let result = client.resolve("Linz", "").await;
    assert!(
        matches!(result, Err(GeocodingError::Timeout)),
        "Expected Timeout, got: {result:?}"
    );
}
