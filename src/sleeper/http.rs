//! HTTP client for the public Sleeper API.
//!
//! The `try_*` methods surface every failure as a [`LeagueError`]. The plain
//! accessors are what views call: they log the failure and hand back an empty
//! or neutral value so one bad endpoint never blanks a whole page.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::types::{NflState, SleeperLeague, SleeperMatchup, SleeperRoster, SleeperUser};
use crate::{
    config::{LeagueSource, SleeperConfig},
    error::{LeagueError, Result},
    LeagueId, Week, LEAGUE_ID_ENV_VAR,
};


/// Default headers sent with every Sleeper request.
pub fn get_common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Handle to the Sleeper API for one configured league.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    league: LeagueSource,
}

impl SleeperClient {
    /// Build a client from an injected [`reqwest::Client`] and the Sleeper config.
    pub fn new(http: Client, config: &SleeperConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            league: config.league.clone(),
        }
    }

    pub fn league(&self) -> &LeagueSource {
        &self.league
    }

    pub fn is_configured(&self) -> bool {
        self.league.is_configured()
    }

    fn league_id(&self) -> Result<&LeagueId> {
        self.league
            .league_id()
            .ok_or_else(|| LeagueError::LeagueNotConfigured {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "GET");

        let res = self
            .http
            .get(&url)
            .headers(get_common_headers())
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    #[instrument(skip(self))]
    pub async fn try_league_info(&self) -> Result<SleeperLeague> {
        let league_id = self.league_id()?;
        self.get_json(&format!("league/{league_id}")).await
    }

    #[instrument(skip(self))]
    pub async fn try_rosters(&self) -> Result<Vec<SleeperRoster>> {
        let league_id = self.league_id()?;
        self.get_json(&format!("league/{league_id}/rosters")).await
    }

    #[instrument(skip(self))]
    pub async fn try_users(&self) -> Result<Vec<SleeperUser>> {
        let league_id = self.league_id()?;
        self.get_json(&format!("league/{league_id}/users")).await
    }

    #[instrument(skip(self))]
    pub async fn try_matchups(&self, week: Week) -> Result<Vec<SleeperMatchup>> {
        let league_id = self.league_id()?;
        self.get_json(&format!("league/{league_id}/matchups/{week}"))
            .await
    }

    /// NFL calendar state; not scoped to a league.
    #[instrument(skip(self))]
    pub async fn try_nfl_state(&self) -> Result<NflState> {
        self.get_json("state/nfl").await
    }

    /// League metadata, or `None` when unconfigured or the call fails.
    pub async fn league_info(&self) -> Option<SleeperLeague> {
        if !self.is_configured() {
            return None;
        }
        match self.try_league_info().await {
            Ok(league) => Some(league),
            Err(e) => {
                warn!(error = %e, "Error fetching league info");
                None
            }
        }
    }

    pub async fn rosters(&self) -> Vec<SleeperRoster> {
        self.or_empty("rosters", self.try_rosters()).await
    }

    pub async fn users(&self) -> Vec<SleeperUser> {
        self.or_empty("users", self.try_users()).await
    }

    pub async fn matchups(&self, week: Week) -> Vec<SleeperMatchup> {
        self.or_empty("matchups", self.try_matchups(week)).await
    }

    /// Current NFL week, defaulting to week 1 on any failure.
    pub async fn current_week(&self) -> Week {
        match self.try_nfl_state().await {
            Ok(state) => state.current_week(),
            Err(e) => {
                warn!(error = %e, "Error fetching current week");
                Week::default()
            }
        }
    }

    async fn or_empty<T, F>(&self, what: &str, fut: F) -> Vec<T>
    where
        F: std::future::Future<Output = Result<Vec<T>>>,
    {
        if !self.is_configured() {
            debug!(what, "league not configured, skipping fetch");
            return Vec::new();
        }
        match fut.await {
            Ok(items) => items,
            Err(e) => {
                warn!(what, error = %e, "Error fetching from Sleeper");
                Vec::new()
            }
        }
    }
}
