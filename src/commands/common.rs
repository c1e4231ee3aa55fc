//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different page implementations.

use serde::Serialize;

use crate::{
    config::AppConfig,
    sleeper::SleeperClient,
    store::{RecordStore, RestStore},
    Result, LEAGUE_ID_ENV_VAR, STORE_KEY_ENV_VAR, STORE_URL_ENV_VAR,
};

/// Clients every page command needs.
pub struct CommandContext<S: RecordStore = RestStore> {
    pub sleeper: SleeperClient,
    pub store: S,
}

impl CommandContext<RestStore> {
    /// Build both clients over one shared HTTP connection pool.
    pub fn from_config(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            sleeper: SleeperClient::new(http.clone(), &config.sleeper),
            store: RestStore::new(http, &config.store),
        }
    }
}

impl<S: RecordStore> CommandContext<S> {
    pub fn new(sleeper: SleeperClient, store: S) -> Self {
        Self { sleeper, store }
    }
}

/// What a page shows: its data, or a setup prompt when the store is unconfigured.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum PageView<T> {
    Ready(T),
    ConfigurationRequired { required: Vec<String> },
}

impl<T> PageView<T> {
    pub fn configuration_required() -> Self {
        PageView::ConfigurationRequired {
            required: [STORE_URL_ENV_VAR, STORE_KEY_ENV_VAR, LEAGUE_ID_ENV_VAR]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            PageView::Ready(view) => Some(view),
            PageView::ConfigurationRequired { .. } => None,
        }
    }

    pub fn is_configuration_required(&self) -> bool {
        matches!(self, PageView::ConfigurationRequired { .. })
    }
}

/// Short-circuit a page when the store has no credentials.
pub fn require_store<S: RecordStore, T>(ctx: &CommandContext<S>) -> Option<PageView<T>> {
    if ctx.store.is_configured() {
        None
    } else {
        Some(PageView::configuration_required())
    }
}

pub fn render_configuration_required(required: &[String]) -> String {
    let mut out = String::new();
    out.push_str("⚠ Configuration Required\n");
    out.push_str("This application needs record store credentials to work properly.\n");
    out.push_str("Required environment variables:\n");
    for var in required {
        out.push_str(&format!("  {var}\n"));
    }
    out
}

/// Print a page as pretty JSON or as text produced by `render`.
pub fn emit<T: Serialize>(view: &PageView<T>, as_json: bool, render: fn(&T) -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(view)?); // tarpaulin::skip
        return Ok(());
    }
    let text = match view {
        PageView::Ready(data) => render(data),
        PageView::ConfigurationRequired { required } => render_configuration_required(required),
    };
    print!("{text}"); // tarpaulin::skip
    Ok(())
}

/// Heading line with an underline of matching width.
pub fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ctx(store: MemoryStore) -> CommandContext<MemoryStore> {
        let sleeper = SleeperClient::new(reqwest::Client::new(), &Default::default());
        CommandContext::new(sleeper, store)
    }

    #[test]
    fn test_configuration_required_lists_variables() {
        let view: PageView<()> = PageView::configuration_required();
        match &view {
            PageView::ConfigurationRequired { required } => {
                assert_eq!(required, &["SUPABASE_URL", "SUPABASE_ANON_KEY", "SLEEPER_LEAGUE_ID"]);
            }
            PageView::Ready(_) => panic!("Expected ConfigurationRequired"),
        }
        assert!(view.is_configuration_required());
        assert!(view.ready().is_none());
    }

    #[test]
    fn test_require_store() {
        assert!(require_store::<_, ()>(&ctx(MemoryStore::new())).is_none());
        assert!(require_store::<_, ()>(&ctx(MemoryStore::unconfigured())).is_some());
    }

    #[test]
    fn test_page_view_serialization() {
        let ready = serde_json::to_value(PageView::Ready(vec![1, 2])).unwrap();
        assert_eq!(ready, serde_json::json!({ "state": "ready", "data": [1, 2] }));

        let setup = serde_json::to_value(PageView::<()>::configuration_required()).unwrap();
        assert_eq!(setup["state"], "configuration_required");
        assert_eq!(setup["data"]["required"][0], "SUPABASE_URL");
    }

    #[test]
    fn test_render_configuration_required() {
        let text = render_configuration_required(&["SUPABASE_URL".to_string()]);
        assert!(text.contains("Configuration Required"));
        assert!(text.contains("  SUPABASE_URL\n"));
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading("Managers"), "Managers\n========\n");
    }
}
