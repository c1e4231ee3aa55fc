//! League aggregation and ranking
//!
//! Pure transforms over already-fetched snapshots, plus the one async helper
//! that fetches what standings need:
//! - `standings`: Rosters joined to owners and ranked
//! - `matchups`: Weekly scores grouped into head-to-head pairs
//! - `ranking`: Power-ranking sort state and sorting
//! - `stats`: Win percentage and legacy-point average
//! - `seasons`: Season history with finishers and placements
//! - `thunderdome`: Rivalries and bets with names resolved

pub mod matchups;
pub mod ranking;
pub mod seasons;
pub mod standings;
pub mod stats;
pub mod thunderdome;

#[cfg(test)]
pub(crate) mod test_support;

pub use matchups::{pair_matchups, MatchupPair, MatchupTeam};
pub use ranking::{sort_managers, SortColumn, SortDirection, SortState};
pub use standings::{rank_standings, standings_with_users, RosterWithUser};
