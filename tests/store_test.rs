//! Integration tests for the REST record store behind page commands

use league_companion::{
    commands::{home::highlights_query, managers::load_managers, CommandContext},
    config::{SleeperConfig, StoreConfig},
    sleeper::SleeperClient,
    store::{
        models::{Highlight, Manager},
        records::{find_by_id, select_all, select_or_empty},
        RestStore,
    },
    RecordId,
};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn rest_store(server: &MockServer) -> RestStore {
    RestStore::new(
        reqwest::Client::new(),
        &StoreConfig::from_raw(Some(&server.uri()), Some("anon-key")),
    )
}

#[tokio::test]
async fn test_managers_page_over_rest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/managers"))
        .and(query_param("order", "championships.desc"))
        .and(header("apikey", "anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "b", "name": "Blake", "championships": 3, "total_seasons": 4, "total_wins": 30, "total_losses": 22 }
        ])))
        .mount(&server)
        .await;

    let sleeper = SleeperClient::new(reqwest::Client::new(), &SleeperConfig::default());
    let ctx = CommandContext::new(sleeper, rest_store(&server));
    let cards = load_managers(&ctx).await.ready().unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].win_percentage, "57.7");
}

#[tokio::test]
async fn test_highlights_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/highlights"))
        .and(query_param("select", "*"))
        .and(query_param("order", "is_pinned.desc,date.desc"))
        .and(query_param("limit", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "h1", "title": "Comeback", "date": "2024-10-13", "is_pinned": true }
        ])))
        .mount(&server)
        .await;

    let highlights: Vec<Highlight> = select_or_empty(&rest_store(&server), &highlights_query()).await;
    assert_eq!(highlights.len(), 1);
    assert!(highlights[0].is_pinned);
}

#[tokio::test]
async fn test_find_by_id_filters_on_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/managers"))
        .and(query_param("id", "eq.a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "a", "name": "Alex" }])))
        .mount(&server)
        .await;

    let found: Option<Manager> = find_by_id(&rest_store(&server), &RecordId::new("a")).await;
    assert_eq!(found.map(|m| m.name), Some("Alex".to_string()));
}

#[tokio::test]
async fn test_server_error_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let managers: Vec<Manager> = select_all(&rest_store(&server)).await;
    assert!(managers.is_empty());
    let found: Option<Manager> = find_by_id(&rest_store(&server), &RecordId::new("a")).await;
    assert!(found.is_none());
}

#[tokio::test]
async fn test_unconfigured_store_returns_empty() {
    let store = RestStore::new(reqwest::Client::new(), &StoreConfig::Missing);
    let managers: Vec<Manager> = select_all(&store).await;
    assert!(managers.is_empty());
    let found: Option<Manager> = find_by_id(&store, &RecordId::new("a")).await;
    assert!(found.is_none());
}
