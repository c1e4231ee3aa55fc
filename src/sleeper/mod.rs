//! Read-only access to the Sleeper fantasy football API.

pub mod http;
pub mod types;

pub use http::SleeperClient;
pub use types::{
    LeagueSettings, NflState, RosterSettings, SleeperLeague, SleeperMatchup, SleeperRoster,
    SleeperUser,
};
