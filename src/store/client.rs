//! Record store clients
//!
//! [`RecordStore`] is the seam between page commands and the hosted backend:
//! [`RestStore`] talks to a PostgREST endpoint, and
//! [`MemoryStore`](super::memory::MemoryStore) stands in for it in tests.

use std::future::Future;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client, Response,
};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{models::Table, query::Query};
use crate::{
    config::StoreConfig,
    error::{LeagueError, Result},
    RecordId, STORE_KEY_ENV_VAR, STORE_URL_ENV_VAR,
};

/// Generic table access against the league's record store.
pub trait RecordStore: Send + Sync {
    /// `false` when credentials are missing; callers should show a setup message.
    fn is_configured(&self) -> bool;

    fn select(&self, query: &Query) -> impl Future<Output = Result<Vec<Value>>> + Send;

    fn insert(&self, table: Table, rows: Vec<Value>) -> impl Future<Output = Result<()>> + Send;

    /// Apply `changes` (a JSON object of columns) to the row with primary key `id`.
    fn update(
        &self,
        table: Table,
        id: &RecordId,
        changes: Value,
    ) -> impl Future<Output = Result<()>> + Send;
}

pub(crate) fn not_configured() -> LeagueError {
    LeagueError::StoreNotConfigured {
        url_var: STORE_URL_ENV_VAR.to_string(),
        key_var: STORE_KEY_ENV_VAR.to_string(),
    }
}

#[derive(Debug, Clone)]
struct Connection {
    rest_url: String,
    anon_key: String,
}

/// PostgREST-backed store (`{url}/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct RestStore {
    http: Client,
    connection: Option<Connection>,
}

impl RestStore {
    pub fn new(http: Client, config: &StoreConfig) -> Self {
        let connection = match config {
            StoreConfig::Configured { url, anon_key } => Some(Connection {
                rest_url: format!("{}/rest/v1", url.trim_end_matches('/')),
                anon_key: anon_key.clone(),
            }),
            StoreConfig::Missing => None,
        };
        Self { http, connection }
    }

    fn connection(&self) -> Result<&Connection> {
        self.connection.as_ref().ok_or_else(not_configured)
    }

    fn table_url(&self, table: Table) -> Result<String> {
        Ok(format!("{}/{}", self.connection()?.rest_url, table))
    }

    /// `apikey` + bearer auth headers required by the hosted backend.
    fn headers(&self) -> Result<HeaderMap> {
        let conn = self.connection()?;
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h.insert("apikey", HeaderValue::from_str(&conn.anon_key)?);
        h.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", conn.anon_key))?,
        );
        Ok(h)
    }

    async fn check_status(table: Table, res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(LeagueError::StoreStatus {
            table: table.to_string(),
            status,
            body,
        })
    }
}

impl RecordStore for RestStore {
    fn is_configured(&self) -> bool {
        self.connection.is_some()
    }

    #[instrument(skip(self), fields(table = %query.table))]
    async fn select(&self, query: &Query) -> Result<Vec<Value>> {
        let url = self.table_url(query.table)?;
        let params = query.to_params();
        debug!(%url, ?params, "select");

        let res = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(&params)
            .send()
            .await?;
        let rows = Self::check_status(query.table, res)
            .await?
            .json::<Vec<Value>>()
            .await?;

        Ok(rows)
    }

    #[instrument(skip(self, rows), fields(count = rows.len()))]
    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<()> {
        let url = self.table_url(table)?;

        let res = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;
        Self::check_status(table, res).await?;

        Ok(())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, table: Table, id: &RecordId, changes: Value) -> Result<()> {
        let url = self.table_url(table)?;
        let params = [("id", format!("eq.{id}"))];

        let res = self
            .http
            .patch(&url)
            .headers(self.headers()?)
            .header("Prefer", "return=minimal")
            .query(&params)
            .json(&changes)
            .send()
            .await?;
        Self::check_status(table, res).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn store_for(server: &MockServer) -> RestStore {
        RestStore::new(
            Client::new(),
            &StoreConfig::Configured {
                url: server.uri(),
                anon_key: "anon-key".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_select_sends_query_and_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/managers"))
            .and(query_param("select", "*"))
            .and(query_param("order", "championships.desc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": "m1", "name": "Derek" }])),
            )
            .mount(&server)
            .await;

        let rows = store_for(&server)
            .select(&Query::new(Table::Managers).order("championships", false))
            .await
            .unwrap();
        assert_eq!(rows, vec![json!({ "id": "m1", "name": "Derek" })]);
    }

    #[tokio::test]
    async fn test_select_error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/bets"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let err = store_for(&server)
            .select(&Query::new(Table::Bets))
            .await
            .unwrap_err();
        match err {
            LeagueError::StoreStatus { table, status, body } => {
                assert_eq!(table, "bets");
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("Expected StoreStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_posts_rows() {
        let server = MockServer::start().await;
        let row = json!({ "title": "t", "description": "d", "submitted_by": "s" });
        Mock::given(method("POST"))
            .and(path("/rest/v1/rule_submissions"))
            .and(body_json(json!([row.clone()])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .insert(Table::RuleSubmissions, vec![row])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_patches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/rule_submissions"))
            .and(query_param("id", "eq.r1"))
            .and(body_json(json!({ "votes_for": 4 })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .update(
                Table::RuleSubmissions,
                &RecordId::new("r1"),
                json!({ "votes_for": 4 }),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_config_reports_not_configured() {
        let store = RestStore::new(Client::new(), &StoreConfig::Missing);
        assert!(!store.is_configured());
        assert!(matches!(
            store.select(&Query::new(Table::Managers)).await,
            Err(LeagueError::StoreNotConfigured { .. })
        ));
        assert!(matches!(
            store.insert(Table::RuleSubmissions, vec![]).await,
            Err(LeagueError::StoreNotConfigured { .. })
        ));
    }

    #[test]
    fn test_invalid_key_is_header_error() {
        let store = RestStore::new(
            Client::new(),
            &StoreConfig::Configured {
                url: "https://x.co".to_string(),
                anon_key: "bad\nkey".to_string(),
            },
        );
        assert!(matches!(store.headers(), Err(LeagueError::InvalidHeader(_))));
    }
}
