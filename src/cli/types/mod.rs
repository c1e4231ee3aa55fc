//! Type-safe wrappers for league identifiers and time units.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, MatchupId, RecordId, RosterId, UserId};
pub use time::{SeasonYear, Week};
