//! Fantasy Football League Companion Library
//!
//! Fetches league data from the public Sleeper API and the league's hosted
//! record store, then joins, ranks and shapes it into the views shown on the
//! league companion site.
//!
//! ## Features
//!
//! - **Standings**: Rosters joined to their owners, ranked by win ratio then points for
//! - **Matchups**: Weekly scores grouped into head-to-head pairs (byes included)
//! - **Legacy Rankings**: All-time manager table sortable by any column
//! - **Season History**: Champions, runners-up, sackos and final placements
//! - **Thunder Dome**: Rivalry records and side bets
//! - **Rule Board**: Submit and vote on rule proposals
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use league_companion::{config::AppConfig, league::standings::standings_with_users, sleeper::SleeperClient};
//!
//! # async fn example() -> league_companion::Result<()> {
//! let config = AppConfig::from_env();
//! let sleeper = SleeperClient::new(reqwest::Client::new(), &config.sleeper);
//!
//! for (rank, team) in standings_with_users(&sleeper).await.iter().enumerate() {
//!     println!("#{} {}", rank + 1, team.team_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_LEAGUE_ID=1048231567891234567
//! export SUPABASE_URL=https://example.supabase.co
//! export SUPABASE_ANON_KEY=...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod league;
pub mod sleeper;
pub mod store;

// Re-export commonly used types
pub use cli::types::{LeagueId, MatchupId, RecordId, RosterId, SeasonYear, UserId, Week};
pub use error::{LeagueError, Result};
pub use league::ranking::{SortColumn, SortDirection, SortState};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
pub const SLEEPER_API_BASE_ENV_VAR: &str = "SLEEPER_API_BASE";
pub const STORE_URL_ENV_VAR: &str = "SUPABASE_URL";
pub const STORE_KEY_ENV_VAR: &str = "SUPABASE_ANON_KEY";
