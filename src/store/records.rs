//! Typed record access with graceful degradation.
//!
//! Pages never see store errors: a missing configuration or a failed call is
//! logged and turned into an empty list, `None`, or `false`.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    client::RecordStore,
    models::{Record, Table},
    query::Query,
};
use crate::{error::Result, RecordId};

/// Run `query` and deserialize the rows as `T`.
pub async fn try_select<T: Record, S: RecordStore>(store: &S, query: &Query) -> Result<Vec<T>> {
    let rows = store.select(query).await?;
    let records = serde_json::from_value(Value::Array(rows))?;
    Ok(records)
}

/// Run `query`, returning an empty list when unconfigured or on any failure.
pub async fn select_or_empty<T: Record, S: RecordStore>(store: &S, query: &Query) -> Vec<T> {
    if !store.is_configured() {
        debug!(table = %query.table, "store not configured, skipping select");
        return Vec::new();
    }
    match try_select(store, query).await {
        Ok(records) => records,
        Err(e) => {
            warn!(table = %query.table, error = %e, "Error loading records");
            Vec::new()
        }
    }
}

/// Every row of `T`'s table, unordered.
pub async fn select_all<T: Record, S: RecordStore>(store: &S) -> Vec<T> {
    select_or_empty(store, &Query::new(T::TABLE)).await
}

/// Single record lookup by primary key.
pub async fn find_by_id<T: Record, S: RecordStore>(store: &S, id: &RecordId) -> Option<T> {
    let query = Query::new(T::TABLE).eq("id", id).limit(1);
    select_or_empty(store, &query).await.into_iter().next()
}

/// Insert one row; `false` if nothing was written.
pub async fn insert_one<T: Serialize, S: RecordStore>(store: &S, table: Table, record: &T) -> bool {
    if !store.is_configured() {
        return false;
    }
    let row = match serde_json::to_value(record) {
        Ok(row) => row,
        Err(e) => {
            warn!(%table, error = %e, "Could not serialize record");
            return false;
        }
    };
    match store.insert(table, vec![row]).await {
        Ok(()) => true,
        Err(e) => {
            warn!(%table, error = %e, "Error inserting record");
            false
        }
    }
}

/// Update one row by id; `false` if nothing was written.
pub async fn update_by_id<S: RecordStore>(
    store: &S,
    table: Table,
    id: &RecordId,
    changes: Value,
) -> bool {
    if !store.is_configured() {
        return false;
    }
    match store.update(table, id, changes).await {
        Ok(()) => true,
        Err(e) => {
            warn!(%table, %id, error = %e, "Error updating record");
            false
        }
    }
}
