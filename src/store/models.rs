//! Record types held in the league's record store

use crate::cli::types::{RecordId, SeasonYear, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named record collections in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Managers,
    Seasons,
    SeasonPlacements,
    Rivalries,
    Bets,
    Highlights,
    Events,
    MediaFolders,
    RuleSubmissions,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Managers => "managers",
            Table::Seasons => "seasons",
            Table::SeasonPlacements => "season_placements",
            Table::Rivalries => "rivalries",
            Table::Bets => "bets",
            Table::Highlights => "highlights",
            Table::Events => "events",
            Table::MediaFolders => "media_folders",
            Table::RuleSubmissions => "rule_submissions",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row type that lives in a known table and has a primary key.
pub trait Record: serde::de::DeserializeOwned {
    const TABLE: Table;

    fn id(&self) -> &RecordId;
}

/// A league manager and their career aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub championships: u32,
    #[serde(default)]
    pub total_seasons: u32,
    #[serde(default)]
    pub total_wins: u32,
    #[serde(default)]
    pub total_losses: u32,
    #[serde(default)]
    pub playoff_appearances: u32,
    #[serde(default)]
    pub last_place_finishes: u32,
    #[serde(default)]
    pub legacy_points: f64,
    #[serde(default)]
    pub sleeper_user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One completed season and its headline finishers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: RecordId,
    pub year: SeasonYear,
    #[serde(default)]
    pub champion_id: Option<RecordId>,
    #[serde(default)]
    pub runner_up_id: Option<RecordId>,
    /// Last-place finisher.
    #[serde(default)]
    pub sacko_id: Option<RecordId>,
    #[serde(default)]
    pub regular_season_winner_id: Option<RecordId>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A manager's final rank within one season (1 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPlacement {
    pub id: RecordId,
    pub season_id: RecordId,
    pub manager_id: RecordId,
    pub placement: u32,
    #[serde(default)]
    pub regular_season_wins: u32,
    #[serde(default)]
    pub regular_season_losses: u32,
    #[serde(default)]
    pub points_for: f64,
    #[serde(default)]
    pub points_against: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Head-to-head record between two managers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
    pub id: RecordId,
    pub manager1_id: RecordId,
    pub manager2_id: RecordId,
    #[serde(default)]
    pub rivalry_name: Option<String>,
    #[serde(default)]
    pub manager1_wins: u32,
    #[serde(default)]
    pub manager2_wins: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetStatus::Active => "ACTIVE",
            BetStatus::Completed => "COMPLETED",
            BetStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// A side wager between managers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: RecordId,
    #[serde(default)]
    pub season_id: Option<RecordId>,
    pub description: String,
    #[serde(default)]
    pub participants: Vec<RecordId>,
    #[serde(default)]
    pub stakes: String,
    /// Only meaningful once the bet is resolved.
    #[serde(default)]
    pub winner_id: Option<RecordId>,
    pub status: BetStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub date: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Link to an externally hosted photo/video folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFolder {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub folder_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub season_year: Option<SeasonYear>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleStatus::Pending => "Pending",
            RuleStatus::Approved => "Approved",
            RuleStatus::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

/// A proposed rule change and its running vote tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSubmission {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub submitted_by: String,
    #[serde(default = "default_rule_status")]
    pub status: RuleStatus,
    #[serde(default)]
    pub votes_for: u32,
    #[serde(default)]
    pub votes_against: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_rule_status() -> RuleStatus {
    RuleStatus::Pending
}

/// Insert payload for a rule submission; status and votes use store defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRuleSubmission {
    pub title: String,
    pub description: String,
    pub submitted_by: String,
}

impl NewRuleSubmission {
    /// Trims every field; returns `None` if any is blank.
    pub fn new(title: &str, description: &str, submitted_by: &str) -> Option<Self> {
        let title = title.trim();
        let description = description.trim();
        let submitted_by = submitted_by.trim();
        if title.is_empty() || description.is_empty() || submitted_by.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: description.to_string(),
            submitted_by: submitted_by.to_string(),
        })
    }
}

macro_rules! impl_record {
    ($($ty:ty => $table:expr),* $(,)?) => {
        $(
            impl Record for $ty {
                const TABLE: Table = $table;

                fn id(&self) -> &RecordId {
                    &self.id
                }
            }
        )*
    };
}

impl_record! {
    Manager => Table::Managers,
    Season => Table::Seasons,
    SeasonPlacement => Table::SeasonPlacements,
    Rivalry => Table::Rivalries,
    Bet => Table::Bets,
    Highlight => Table::Highlights,
    Event => Table::Events,
    MediaFolder => Table::MediaFolders,
    RuleSubmission => Table::RuleSubmissions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_names() {
        assert_eq!(Table::SeasonPlacements.as_str(), "season_placements");
        assert_eq!(Table::MediaFolders.to_string(), "media_folders");
        assert_eq!(<RuleSubmission as Record>::TABLE, Table::RuleSubmissions);
    }

    #[test]
    fn test_record_id_accessor() {
        let placement: SeasonPlacement = serde_json::from_value(json!({
            "id": "p1", "season_id": "s1", "manager_id": "m1", "placement": 3
        }))
        .unwrap();
        assert_eq!(Record::id(&placement), &RecordId::new("p1"));
    }

    #[test]
    fn test_manager_deserialization() {
        let manager: Manager = serde_json::from_value(json!({
            "id": "m1",
            "name": "Derek",
            "profile_image_url": null,
            "quote": "Trust the process",
            "championships": 2,
            "total_seasons": 8,
            "total_wins": 61,
            "total_losses": 47,
            "playoff_appearances": 5,
            "last_place_finishes": 1,
            "legacy_points": 142,
            "sleeper_user_id": "7311",
            "created_at": "2024-01-15T18:30:00.123456+00:00"
        }))
        .unwrap();

        assert_eq!(manager.id.as_str(), "m1");
        assert_eq!(manager.legacy_points, 142.0);
        assert_eq!(manager.sleeper_user_id, Some(UserId::new("7311")));
        assert!(manager.created_at.is_some());
    }

    #[test]
    fn test_bet_status_round_trip() {
        let bet: Bet = serde_json::from_value(json!({
            "id": "b1",
            "description": "Loser wears the jersey",
            "participants": ["m1", "m2"],
            "stakes": "A Bills jersey",
            "status": "completed",
            "winner_id": "m2"
        }))
        .unwrap();
        assert_eq!(bet.status, BetStatus::Completed);
        assert_eq!(bet.status.to_string(), "COMPLETED");
        assert_eq!(serde_json::to_value(bet.status).unwrap(), json!("completed"));
    }

    #[test]
    fn test_rule_submission_defaults() {
        let rule: RuleSubmission = serde_json::from_value(json!({
            "id": "r1",
            "title": "Two QB league",
            "description": "Superflex starting next year",
            "submitted_by": "Derek"
        }))
        .unwrap();
        assert_eq!(rule.status, RuleStatus::Pending);
        assert_eq!(rule.votes_for, 0);
    }

    #[test]
    fn test_new_rule_submission_trims_and_validates() {
        let rule = NewRuleSubmission::new("  Keepers ", " One keeper per team ", " Sam ").unwrap();
        assert_eq!(rule.title, "Keepers");
        assert_eq!(rule.description, "One keeper per team");
        assert_eq!(rule.submitted_by, "Sam");

        assert!(NewRuleSubmission::new("Keepers", "   ", "Sam").is_none());
        assert!(NewRuleSubmission::new("", "desc", "Sam").is_none());
        assert!(NewRuleSubmission::new("Keepers", "desc", "\t").is_none());
    }

    #[test]
    fn test_new_rule_submission_serializes_only_user_fields() {
        let rule = NewRuleSubmission::new("t", "d", "s").unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({ "title": "t", "description": "d", "submitted_by": "s" })
        );
    }
}
