//! In-process record store for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use super::{
    client::{not_configured, RecordStore},
    models::Table,
    query::Query,
};
use crate::{
    error::{LeagueError, Result},
    RecordId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Ready,
    Unconfigured,
    Failing,
}

/// A [`RecordStore`] backed by JSON rows held in memory.
///
/// Queries are evaluated with [`Query::apply`], so ordering and limits match
/// what the REST store would return.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Table, Vec<Value>>>,
    mode: Mode,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            mode: Mode::Ready,
        }
    }

    /// A store that reports missing credentials.
    pub fn unconfigured() -> Self {
        Self {
            mode: Mode::Unconfigured,
            ..Self::new()
        }
    }

    /// A configured store whose every call fails, as if the backend were down.
    pub fn failing() -> Self {
        Self {
            mode: Mode::Failing,
            ..Self::new()
        }
    }

    /// Seed a table with serializable records.
    pub fn with_records<T: Serialize>(self, table: Table, records: &[T]) -> Self {
        let rows = records
            .iter()
            .filter_map(|r| serde_json::to_value(r).ok())
            .collect::<Vec<_>>();
        self.lock().entry(table).or_default().extend(rows);
        self
    }

    /// Seed a table with raw JSON rows.
    pub fn with_rows(self, table: Table, rows: Vec<Value>) -> Self {
        self.lock().entry(table).or_default().extend(rows);
        self
    }

    /// Snapshot of a table's rows in insertion order.
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.lock().get(&table).cloned().unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Table, Vec<Value>>> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(&self, table: Table) -> Result<()> {
        match self.mode {
            Mode::Ready => Ok(()),
            Mode::Unconfigured => Err(not_configured()),
            Mode::Failing => Err(LeagueError::StoreStatus {
                table: table.to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "memory store set to fail".to_string(),
            }),
        }
    }
}

impl RecordStore for MemoryStore {
    fn is_configured(&self) -> bool {
        self.mode != Mode::Unconfigured
    }

    async fn select(&self, query: &Query) -> Result<Vec<Value>> {
        self.check(query.table)?;
        let tables = self.lock();
        let rows = tables.get(&query.table).map(Vec::as_slice).unwrap_or(&[]);
        Ok(query.apply(rows))
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<()> {
        self.check(table)?;
        self.lock().entry(table).or_default().extend(rows);
        Ok(())
    }

    async fn update(&self, table: Table, id: &RecordId, changes: Value) -> Result<()> {
        self.check(table)?;
        let Value::Object(changes) = changes else {
            return Err(LeagueError::InvalidConfig {
                message: "update changes must be a JSON object".to_string(),
            });
        };

        let mut tables = self.lock();
        let rows = tables.entry(table).or_default();
        for row in rows.iter_mut() {
            if row.get("id").and_then(Value::as_str) == Some(id.as_str()) {
                if let Value::Object(fields) = row {
                    for (k, v) in &changes {
                        fields.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        Ok(())
    }
}
