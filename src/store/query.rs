//! Table queries: filters, ordering and limits.
//!
//! A [`Query`] renders to PostgREST URL parameters for the REST store and can
//! also be evaluated directly against JSON rows for the in-memory store.

use std::cmp::Ordering;

use serde_json::Value;

use super::models::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { column: String, value: String },
    Gte { column: String, value: String },
}

impl Filter {
    fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } | Filter::Gte { column, .. } => column,
        }
    }

    fn param_value(&self) -> String {
        match self {
            Filter::Eq { value, .. } => format!("eq.{value}"),
            Filter::Gte { value, .. } => format!("gte.{value}"),
        }
    }

    fn matches(&self, row: &Value) -> bool {
        let Some(field) = row.get(self.column()) else {
            return false;
        };
        match self {
            Filter::Eq { value, .. } => compare_to_text(field, value) == Some(Ordering::Equal),
            Filter::Gte { value, .. } => matches!(
                compare_to_text(field, value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: Table,
    pub filters: Vec<Filter>,
    pub order: Vec<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter::Gte {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Add a sort key; keys apply in the order they are added.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order.push(OrderBy {
            column: column.to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// PostgREST query parameters, e.g. `select=*&is_pinned=eq.true&order=date.desc&limit=6`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for filter in &self.filters {
            params.push((filter.column().to_string(), filter.param_value()));
        }
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|o| {
                    format!("{}.{}", o.column, if o.ascending { "asc" } else { "desc" })
                })
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    /// Evaluate the query over in-memory rows (filter, stable multi-key sort, limit).
    pub fn apply(&self, rows: &[Value]) -> Vec<Value> {
        let mut out: Vec<Value> = rows
            .iter()
            .filter(|row| self.filters.iter().all(|f| f.matches(row)))
            .cloned()
            .collect();

        if !self.order.is_empty() {
            out.sort_by(|a, b| {
                for key in &self.order {
                    let ord = compare_nullable(a.get(&key.column), b.get(&key.column));
                    let ord = if key.ascending { ord } else { ord.reverse() };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
        }

        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        out
    }
}

/// Postgres ordering: nulls sort after every value ascending (so first when descending).
fn compare_nullable(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Compare a JSON field against a filter literal the way PostgREST would coerce it.
fn compare_to_text(field: &Value, text: &str) -> Option<Ordering> {
    match field {
        Value::Null => None,
        Value::Number(n) => {
            let lhs = n.as_f64()?;
            let rhs = text.parse::<f64>().ok()?;
            Some(lhs.total_cmp(&rhs))
        }
        Value::Bool(b) => {
            let rhs = text.parse::<bool>().ok()?;
            Some(b.cmp(&rhs))
        }
        Value::String(s) => Some(s.as_str().cmp(text)),
        other => Some(other.to_string().as_str().cmp(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_params_full() {
        let query = Query::new(Table::Highlights)
            .eq("is_pinned", true)
            .order("is_pinned", false)
            .order("date", false)
            .limit(6);

        assert_eq!(
            query.to_params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("is_pinned".to_string(), "eq.true".to_string()),
                ("order".to_string(), "is_pinned.desc,date.desc".to_string()),
                ("limit".to_string(), "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_params_minimal() {
        assert_eq!(
            Query::new(Table::Managers).to_params(),
            vec![("select".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn test_apply_filters_and_orders() {
        let rows = vec![
            json!({ "id": "a", "event_date": "2024-08-01T00:00:00Z" }),
            json!({ "id": "b", "event_date": "2024-10-01T00:00:00Z" }),
            json!({ "id": "c", "event_date": "2024-09-01T00:00:00Z" }),
        ];
        let query = Query::new(Table::Events)
            .gte("event_date", "2024-09-01T00:00:00Z")
            .order("event_date", true);

        let ids: Vec<_> = query.apply(&rows).iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!("c"), json!("b")]);
    }

    #[test]
    fn test_apply_multi_key_sort_and_limit() {
        let rows = vec![
            json!({ "id": 1, "is_pinned": false, "date": "2024-09-03" }),
            json!({ "id": 2, "is_pinned": true, "date": "2024-09-01" }),
            json!({ "id": 3, "is_pinned": false, "date": "2024-09-05" }),
            json!({ "id": 4, "is_pinned": true, "date": "2024-09-02" }),
        ];
        let query = Query::new(Table::Highlights)
            .order("is_pinned", false)
            .order("date", false)
            .limit(3);

        let ids: Vec<_> = query.apply(&rows).iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(4), json!(2), json!(3)]);
    }

    #[test]
    fn test_apply_nulls_first_when_descending() {
        let rows = vec![
            json!({ "id": "x", "season_year": 2022 }),
            json!({ "id": "y", "season_year": null }),
            json!({ "id": "z", "season_year": 2024 }),
        ];
        let desc = Query::new(Table::MediaFolders).order("season_year", false);
        let ids: Vec<_> = desc.apply(&rows).iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!("y"), json!("z"), json!("x")]);

        let asc = Query::new(Table::MediaFolders).order("season_year", true);
        let ids: Vec<_> = asc.apply(&rows).iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!("x"), json!("z"), json!("y")]);
    }

    #[test]
    fn test_eq_filter_on_numbers_and_strings() {
        let rows = vec![
            json!({ "id": "r1", "votes_for": 3 }),
            json!({ "id": "r2", "votes_for": 5 }),
        ];
        let by_id = Query::new(Table::RuleSubmissions).eq("id", "r2");
        assert_eq!(by_id.apply(&rows).len(), 1);

        let by_votes = Query::new(Table::RuleSubmissions).eq("votes_for", 3);
        assert_eq!(by_votes.apply(&rows)[0]["id"], json!("r1"));

        let missing_column = Query::new(Table::RuleSubmissions).eq("status", "pending");
        assert!(missing_column.apply(&rows).is_empty());
    }
}
