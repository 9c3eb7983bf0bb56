use places_core::error::location_service::LocationServiceError;
use places_core::location_service::{HttpLocationService, LocationService};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the HTTP fetch client against a mock feed server.
// These exercise the real request/decode path from a consumer's perspective.
// ============================================================================

const FEED_PATH: &str = "/abnamrocoesd/assignment-ios/main/locations.json";

const FIXTURE: &str = r#"{
  "locations": [
    { "name": "Amsterdam", "lat": 52.3547498, "long": 4.8339215 },
    { "name": "Mumbai", "lat": 19.0823998, "long": 72.8111468 },
    { "name": "Copenhagen", "lat": 55.6713442, "long": 12.523785 },
    { "lat": 40.4380638, "long": -3.7495758 }
  ]
}"#;

async fn feed_server(template: ResponseTemplate) -> (MockServer, HttpLocationService) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(template)
        .mount(&server)
        .await;

    let service = HttpLocationService::new(&format!("{}{FEED_PATH}", server.uri()))
        .expect("mock server URI should parse");
    (server, service)
}

/// **VALUE**: Verifies the happy path end to end: GET, decode, feed order, null name kept.
///
/// **WHY THIS MATTERS**: This is the only network operation in the pipeline.
/// Everything the interactor owns starts as this function's return value.
///
/// **BUG THIS CATCHES**: Would catch a broken wire rename, a dropped
/// null-named entry, or order loss anywhere between the socket and the
/// decoded collection.
#[tokio::test]
async fn given_valid_feed_when_fetched_then_locations_in_feed_order_with_null_name_kept() {
    // GIVEN: A feed serving the 4-entry fixture
    let (_server, service) =
        feed_server(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json")).await;

    // WHEN: Fetching
    let locations = service.fetch_locations().await.expect("fetch should succeed");

    // THEN: 4 entries in feed order, nameless entry preserved
    assert_eq!(locations.len(), 4);
    assert_eq!(locations[0].name.as_deref(), Some("Amsterdam"));
    assert_eq!(locations[0].latitude, Some(52.3547498));
    assert_eq!(locations[1].name.as_deref(), Some("Mumbai"));
    assert_eq!(locations[2].name.as_deref(), Some("Copenhagen"));
    assert_eq!(locations[3].name, None);
    assert_eq!(locations[3].longitude, Some(-3.7495758));
}

/// **VALUE**: Verifies every fetch assigns fresh local identifiers.
///
/// **WHY THIS MATTERS**: The wire carries no id. Two fetches of the same feed
/// must produce records with distinct identities, because ids never
/// round-trip and are only stable within one in-memory lifetime.
///
/// **BUG THIS CATCHES**: Would catch id assignment becoming deterministic or
/// shared across decode passes.
#[tokio::test]
async fn given_same_feed_when_fetched_twice_then_ids_are_fresh_each_time() {
    let (_server, service) =
        feed_server(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json")).await;

    let first = service.fetch_locations().await.unwrap();
    let second = service.fetch_locations().await.unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_ne!(a.id, b.id, "ids must not survive a refetch");
    }
}

/// **VALUE**: Verifies a non-2xx response surfaces as a Server error with the status attached.
///
/// **WHY THIS MATTERS**: The interactor turns this into the single
/// user-visible fetch failure. Status and body text are what ends up in the
/// logs when the feed host misbehaves.
///
/// **BUG THIS CATCHES**: Would catch a 500 body being fed to the decoder and
/// reported as a JSON problem instead of a server problem.
#[tokio::test]
async fn given_server_error_when_fetched_then_server_variant_with_status() {
    let (_server, service) =
        feed_server(ResponseTemplate::new(500).set_body_string("upstream exploded")).await;

    let error = service.fetch_locations().await.unwrap_err();

    match error {
        LocationServiceError::Server { status, message, .. } => {
            assert_eq!(status.0, 500);
            assert!(status.is_server_error());
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a malformed 200 body surfaces as a JSON error.
///
/// **WHY THIS MATTERS**: Transport and decode failures take different
/// debugging paths; conflating them sends an engineer to the wrong layer.
///
/// **BUG THIS CATCHES**: Would catch the two-step decode collapsing into
/// reqwest's combined json() path, which reports decode failures as HTTP
/// errors.
#[tokio::test]
async fn given_malformed_body_when_fetched_then_json_variant() {
    let (_server, service) = feed_server(
        ResponseTemplate::new(200).set_body_raw(r#"{"locations": "not an array"}"#, "application/json"),
    )
    .await;

    let error = service.fetch_locations().await.unwrap_err();

    assert!(
        matches!(error, LocationServiceError::Json { .. }),
        "expected Json error, got {error:?}"
    );
}

/// **VALUE**: Verifies an unreachable host surfaces as a transport (Http) error.
///
/// **BUG THIS CATCHES**: Would catch connection failures panicking instead of
/// flowing through the error enum.
#[tokio::test]
async fn given_unreachable_server_when_fetched_then_http_variant() {
    // GIVEN: A server that is gone by the time we fetch
    let (server, service) =
        feed_server(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json")).await;
    drop(server);

    let error = service.fetch_locations().await.unwrap_err();

    assert!(
        matches!(error, LocationServiceError::Http { .. }),
        "expected Http error, got {error:?}"
    );
}

/// **VALUE**: Verifies an invalid endpoint string fails at construction, not at fetch time.
///
/// **BUG THIS CATCHES**: Would catch URL validation being deferred into the
/// request path where it would masquerade as a transport failure.
#[test]
fn given_invalid_url_when_constructed_then_url_parse_variant() {
    let error = HttpLocationService::new("not a url").unwrap_err();

    assert!(
        matches!(error, LocationServiceError::UrlParse { .. }),
        "expected UrlParse error, got {error:?}"
    );
}
