use justplay_catalog::{CatalogClient, CatalogConfig, CatalogCredentials, CatalogError};
use justplay_http::StatusCode;
use mockito::{Matcher, Server};
use serde_json::json;

const PRIVATE_KEY: &str = include_str!("fixtures/catalog-key-test.pem");

fn client_for(server: &Server) -> CatalogClient {
    let config = CatalogConfig::default().with_base_url(server.url());
    let credentials = CatalogCredentials::new("TEAM123456", "KEY987654", PRIVATE_KEY);
    CatalogClient::new(config, credentials).unwrap()
}

#[tokio::test]
async fn test_search_sends_query_and_minted_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/catalog/us/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("term".into(), "one more time".into()),
            Matcher::UrlEncoded("types".into(), "songs".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .match_header("authorization", Matcher::Regex(r"^Bearer [\w-]+\.[\w-]+\.[\w-]+$".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "results": {"songs": {"href": "/v1/catalog/us/search", "data": [
                    {"id": "697195787", "type": "songs", "attributes": {
                        "name": "One More Time", "artistName": "Daft Punk", "albumName": "Discovery",
                        "durationInMillis": 320357, "artwork": {"url": "https://img.test/a.jpg"},
                        "previews": [{"url": "https://audio.test/p.m4a"}]
                    }},
                    {"id": "1440818664", "type": "songs", "attributes": {
                        "name": "One More Time (Live)", "artistName": "Daft Punk", "albumName": "Alive 2007",
                        "durationInMillis": 400000, "artwork": {"url": "https://img.test/b.jpg"},
                        "previews": []
                    }}
                ]}}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let tracks = client_for(&server).search("one more time").await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "697195787");
    assert_eq!(tracks[0].preview_url, "https://audio.test/p.m4a");
    assert_eq!(tracks[1].title, "One More Time (Live)");
    assert_eq!(tracks[1].preview_url, "");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_results_are_not_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog/us/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results":{}}"#)
        .create_async()
        .await;

    let tracks = client_for(&server).search("zzzzzz").await.unwrap();

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_upstream_failure_carries_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog/us/search")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errors":[{"status":"401","title":"Unauthorized"}]}"#)
        .create_async()
        .await;

    let err = client_for(&server).search("x").await.unwrap_err();

    match &err {
        CatalogError::Search(client_err) => {
            assert_eq!(client_err.status(), Some(StatusCode::UNAUTHORIZED));
        }
        other => panic!("expected Search error, got {:?}", other),
    }
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_bad_key_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = CatalogConfig::default().with_base_url(server.url());
    let credentials = CatalogCredentials::new("TEAM", "KID", "garbage");
    let client = CatalogClient::new(config, credentials).unwrap();

    let err = client.search("x").await.unwrap_err();

    assert!(matches!(err, CatalogError::Credential(_)));
    mock.assert_async().await;
}
