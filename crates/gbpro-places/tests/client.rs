//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use gbpro_audit::{PlacesLookup, UpstreamError};
use gbpro_places::{PlacesClient, PlacesError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, base_url)
        .expect("client construction should not fail")
}

fn places_body() -> serde_json::Value {
    serde_json::json!({
        "places": [
            {
                "id": "p1",
                "displayName": { "text": "Joe's Cafe" },
                "formattedAddress": "1 Main St, Springfield, IL, USA",
                "rating": 4.5,
                "userRatingCount": 120,
                "types": ["cafe", "food"],
                "websiteUri": "https://joes.example",
                "photos": [{}, {}, {}]
            },
            {
                "id": "p2",
                "displayName": { "text": "Joe's Diner" }
            }
        ]
    })
}

#[tokio::test]
async fn search_text_posts_query_with_key_and_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "textQuery": "Joe's Cafe",
            "languageCode": "en",
            "maxResultCount": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .expect(1)
        .mount(&server)
        .await;

    let listings = test_client(&server.uri())
        .search_text("Joe's Cafe")
        .await
        .expect("search should succeed");

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, "p1");
    assert_eq!(listings[0].name, "Joe's Cafe");
    assert_eq!(listings[0].photo_count, 3);
    assert_eq!(listings[0].review_count, 120);
    assert_eq!(listings[1].review_count, 0);
    assert!(listings[1].rating.is_none());
}

#[tokio::test]
async fn nearby_search_uses_category_query_and_ten_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(body_partial_json(serde_json::json!({
            "textQuery": "cafe near 1 Main St, Springfield",
            "maxResultCount": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listings = client
        .search_nearby("cafe", "1 Main St, Springfield")
        .await
        .expect("nearby search should succeed");
    assert_eq!(listings.len(), 2);
}

#[tokio::test]
async fn empty_body_yields_no_listings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let listings = test_client(&server.uri())
        .search_text("nothing here")
        .await
        .expect("empty result is not an error");
    assert!(listings.is_empty());
}

#[tokio::test]
async fn api_error_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_text("Joe's Cafe")
        .await
        .unwrap_err();

    match err {
        PlacesError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_invalid_response_for_the_engine() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search("Joe's Cafe")
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::InvalidResponse(_)));
}

#[tokio::test]
async fn server_error_is_unavailable_for_the_engine() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search("Joe's Cafe")
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Unavailable(_)));
}
