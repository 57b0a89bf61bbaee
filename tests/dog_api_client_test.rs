//! Integration tests for the dog.ceo client
//!
//! Every test runs against a mockito server; no real network access.

use breed_catalog::domain::models::CatalogConfig;
use breed_catalog::{BreedError, BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher, DogApiError};
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> DogApiBreedFetcher {
    let config = CatalogConfig {
        base_url: server.url(),
        timeout_secs: 2,
        user_agent: "breed-catalog-tests".to_string(),
    };
    DogApiBreedFetcher::with_config(&config).expect("Failed to create client")
}

fn success_body(names: &[&str]) -> String {
    serde_json::json!({ "message": names, "status": "success" }).to_string()
}

#[tokio::test]
async fn test_fetch_sub_breeds_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/poodle/list")
        .match_header("accept", "application/json")
        .match_header("user-agent", "breed-catalog-tests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body(&["medium", "miniature", "standard", "toy"]))
        .create_async()
        .await;

    let client = client_for(&server);
    let subs = client.sub_breeds("poodle").await.unwrap();

    assert_eq!(subs, ["medium", "miniature", "standard", "toy"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_breed_is_trimmed_and_lowercased_in_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/husky/list")
        .with_status(200)
        .with_body(success_body(&[]))
        .create_async()
        .await;

    let subs = client_for(&server).sub_breeds("  HuSkY ").await.unwrap();

    assert!(subs.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_breed_404_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/unknownbreed/list")
        .with_status(404)
        .with_body(r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#)
        .create_async()
        .await;

    let err = client_for(&server).sub_breeds("unknownbreed").await.unwrap_err();

    assert_eq!(err, BreedError::not_found("unknownbreed"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_field_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/breed/poodle/list")
        .with_status(200)
        .with_body(r#"{"status":"error","message":"maintenance"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.fetch("poodle").await,
        Err(DogApiError::Unsuccessful { .. })
    ));
    assert!(matches!(
        client.sub_breeds("poodle").await,
        Err(BreedError::BreedNotFound(_))
    ));
}

#[tokio::test]
async fn test_server_error_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/breed/hound/list")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);
    match client.fetch("hound").await {
        Err(DogApiError::HttpStatus(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
    assert!(client.sub_breeds("hound").await.is_err());
}

#[tokio::test]
async fn test_malformed_payloads_map_to_not_found() {
    let mut server = Server::new_async().await;
    let _not_json = server
        .mock("GET", "/breed/pug/list")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;
    let _bad_items = server
        .mock("GET", "/breed/hound/list")
        .with_status(200)
        .with_body(r#"{"status":"success","message":["afghan",null]}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(matches!(client.fetch("pug").await, Err(DogApiError::Serialization(_))));
    assert!(matches!(client.fetch("hound").await, Err(DogApiError::MalformedPayload(_))));
    assert_eq!(client.sub_breeds("pug").await, Err(BreedError::not_found("pug")));
    assert_eq!(client.sub_breeds("hound").await, Err(BreedError::not_found("hound")));
}

#[tokio::test]
async fn test_blank_breed_sends_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.sub_breeds("").await.is_err());
    assert!(client.sub_breeds("   ").await.is_err());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_maps_to_not_found() {
    let config = CatalogConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
        ..Default::default()
    };
    let client = DogApiBreedFetcher::with_config(&config).unwrap();

    assert!(matches!(client.fetch("poodle").await, Err(DogApiError::Transport(_))));
    assert_eq!(client.sub_breeds("poodle").await, Err(BreedError::not_found("poodle")));
}

#[tokio::test]
async fn test_caching_fetcher_over_http_hits_server_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/poodle/list")
        .with_status(200)
        .with_body(success_body(&["toy", "miniature"]))
        .expect(1)
        .create_async()
        .await;

    let fetcher = CachingBreedFetcher::new(client_for(&server));

    assert_eq!(fetcher.sub_breeds("poodle").await.unwrap(), ["toy", "miniature"]);
    assert_eq!(fetcher.sub_breeds("POODLE").await.unwrap(), ["toy", "miniature"]);
    assert_eq!(fetcher.calls_made(), 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_caching_fetcher_over_http_retries_failures() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/unknownbreed/list")
        .with_status(404)
        .with_body(r#"{"status":"error","message":"Breed not found"}"#)
        .expect(2)
        .create_async()
        .await;

    let fetcher = CachingBreedFetcher::new(client_for(&server));

    assert!(fetcher.sub_breeds("unknownbreed").await.is_err());
    assert!(fetcher.sub_breeds("unknownbreed").await.is_err());
    assert_eq!(fetcher.calls_made(), 2);

    mock.assert_async().await;
}
