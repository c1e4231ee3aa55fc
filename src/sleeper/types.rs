use crate::cli::types::{LeagueId, MatchupId, RosterId, UserId, Week};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


/// Sleeper sends `null` for counters that have not started yet; treat it like a missing field.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A league member as returned by `/league/{id}/users`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SleeperUser {
    /// Display name, falling back to the username.
    pub fn team_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Season-to-date record for one roster.
///
/// Sleeper splits fantasy points into an integer part (`fpts`) and hundredths
/// (`fpts_decimal`); use [`RosterSettings::points_for`] for the combined value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub fpts: f64,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub fpts_decimal: f64,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub fpts_against: f64,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub fpts_against_decimal: f64,
}

impl RosterSettings {
    pub fn games_played(&self) -> u32 {
        self.wins.saturating_add(self.losses).saturating_add(self.ties)
    }

    pub fn points_for(&self) -> f64 {
        self.fpts + self.fpts_decimal / 100.0
    }

    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }
}

/// One team as returned by `/league/{id}/rosters`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperRoster {
    pub roster_id: RosterId,
    /// Absent for orphaned teams.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub settings: RosterSettings,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub players: Vec<String>,
}

/// One team's score for one week, from `/league/{id}/matchups/{week}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperMatchup {
    pub roster_id: RosterId,
    /// Shared by the two teams playing each other; `null` on a bye.
    #[serde(default)]
    pub matchup_id: Option<MatchupId>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub points: f64,
    #[serde(default)]
    pub players_points: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub playoff_week_start: Option<u16>,
}

/// League metadata from `/league/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperLeague {
    pub league_id: LeagueId,
    pub name: String,
    pub season: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub settings: LeagueSettings,
}

/// Global NFL calendar state from `/state/nfl`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NflState {
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
}

impl NflState {
    /// Week 0 (preseason) and a missing week both map to week 1.
    pub fn current_week(&self) -> Week {
        match self.week {
            Some(week) if week > 0 => Week::new(week),
            _ => Week::default(),
        }
    }
}
