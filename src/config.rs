//! Runtime configuration for the Sleeper client and the record store.
//!
//! Configuration is built once at startup (environment, optionally overlaid by
//! a JSON file and CLI flags) and handed to each client. An unset source is a
//! typed variant rather than a sentinel string so callers can branch on it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result, LeagueId, LEAGUE_ID_ENV_VAR, SLEEPER_API_BASE_ENV_VAR, STORE_KEY_ENV_VAR,
    STORE_URL_ENV_VAR,
};

/// Base path for the Sleeper v1 API.
pub const DEFAULT_SLEEPER_API_BASE: &str = "https://api.sleeper.app/v1";

/// Value shipped in the sample `.env`; treated the same as an unset league.
pub const LEAGUE_ID_PLACEHOLDER: &str = "your_sleeper_league_id_here";

/// Which Sleeper league league-scoped calls target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeagueSource {
    Configured(LeagueId),
    Unconfigured,
}

impl LeagueSource {
    /// Interpret a raw league id value; empty and placeholder values are unconfigured.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() && id != LEAGUE_ID_PLACEHOLDER => {
                LeagueSource::Configured(LeagueId::new(id))
            }
            _ => LeagueSource::Unconfigured,
        }
    }

    pub fn league_id(&self) -> Option<&LeagueId> {
        match self {
            LeagueSource::Configured(id) => Some(id),
            LeagueSource::Unconfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, LeagueSource::Configured(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleeperConfig {
    pub base_url: String,
    pub league: LeagueSource,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SLEEPER_API_BASE.to_string(),
            league: LeagueSource::Unconfigured,
        }
    }
}

/// Connection details for the hosted record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreConfig {
    Configured { url: String, anon_key: String },
    Missing,
}

impl StoreConfig {
    /// Both the URL and the key must be present and non-empty.
    pub fn from_raw(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = url.map(str::trim).filter(|s| !s.is_empty());
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty());
        match (url, anon_key) {
            (Some(url), Some(anon_key)) => StoreConfig::Configured {
                url: url.trim_end_matches('/').to_string(),
                anon_key: anon_key.to_string(),
            },
            _ => StoreConfig::Missing,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, StoreConfig::Configured { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub sleeper: SleeperConfig,
    pub store: StoreConfig,
}

/// On-disk shape of `--config` files. Every field is optional and overrides
/// the environment when present.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sleeper_league_id: Option<String>,
    sleeper_api_base: Option<String>,
    supabase_url: Option<String>,
    supabase_anon_key: Option<String>,
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let league = LeagueSource::from_raw(lookup(LEAGUE_ID_ENV_VAR).as_deref());
        let base_url = lookup(SLEEPER_API_BASE_ENV_VAR)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SLEEPER_API_BASE.to_string());
        let store = StoreConfig::from_raw(
            lookup(STORE_URL_ENV_VAR).as_deref(),
            lookup(STORE_KEY_ENV_VAR).as_deref(),
        );

        Self {
            sleeper: SleeperConfig { base_url, league },
            store,
        }
    }

    /// Environment configuration overlaid with the JSON file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&raw)?;
        Ok(Self::from_env().overlay(file))
    }

    /// Load from the environment, plus a config file when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Replace the league when an explicit id is supplied (e.g. `--league-id`).
    pub fn with_league_id(mut self, league_id: Option<LeagueId>) -> Self {
        if let Some(id) = league_id {
            self.sleeper.league = LeagueSource::from_raw(Some(id.as_str()));
        }
        self
    }

    fn overlay(mut self, file: ConfigFile) -> Self {
        if let Some(id) = file.sleeper_league_id {
            self.sleeper.league = LeagueSource::from_raw(Some(&id));
        }
        if let Some(base) = file.sleeper_api_base {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                self.sleeper.base_url = base.to_string();
            }
        }
        if file.supabase_url.is_some() || file.supabase_anon_key.is_some() {
            let (env_url, env_key) = match &self.store {
                StoreConfig::Configured { url, anon_key } => {
                    (Some(url.clone()), Some(anon_key.clone()))
                }
                StoreConfig::Missing => (None, None),
            };
            let url = file.supabase_url.or(env_url);
            let key = file.supabase_anon_key.or(env_key);
            self.store = StoreConfig::from_raw(url.as_deref(), key.as_deref());
        }
        self
    }
}
