//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{LeagueId, RecordId};

use crate::league::ranking::SortColumn;

#[derive(Debug, Subcommand)]
pub enum RulesCmd {
    /// List rule submissions, newest first.
    List,

    /// Propose a rule change.
    Submit {
        /// Short title for the proposal.
        title: String,

        /// What the rule would change.
        description: String,

        /// Who is proposing it.
        #[clap(long = "by")]
        submitted_by: String,
    },

    /// Vote on a submission by id.
    Vote {
        id: RecordId,

        /// Vote against instead of for.
        #[clap(long)]
        against: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "league-companion", about = "Fantasy football league companion")]
pub struct App {
    /// Output results as JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,

    /// JSON config file; its values override the environment.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
    #[clap(long, short, global = true)]
    pub league_id: Option<LeagueId>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Standings, this week's matchups, highlights and upcoming events.
    Home,

    /// Manager profile cards.
    Managers,

    /// All-time power rankings and season history.
    ///
    /// Each `--sort` acts like clicking a column header: picking the active
    /// column flips its direction, any other column sorts descending.
    Legacy {
        /// Sort column (repeatable): `--sort lp_avg --sort lp_avg`.
        #[clap(long = "sort", short)]
        sort: Vec<SortColumn>,
    },

    /// Rivalries and side bets.
    Thunderdome,

    /// Shared photo and video folders.
    Media,

    /// League metadata from Sleeper.
    League,

    /// Rule proposals and voting.
    Rules {
        #[clap(subcommand)]
        cmd: RulesCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_legacy_sorts() {
        let app = App::parse_from(["league-companion", "legacy", "--sort", "lp_avg", "-s", "name"]);
        match app.command {
            Commands::Legacy { sort } => assert_eq!(sort, vec![SortColumn::LpAvg, SortColumn::Name]),
            other => panic!("Expected Legacy, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = App::parse_from(["league-companion", "home", "--json", "--league-id", "123"]);
        assert!(app.json);
        assert_eq!(app.league_id, Some(LeagueId::new("123")));
    }

    #[test]
    fn test_parse_rules_vote_against() {
        let app = App::parse_from(["league-companion", "rules", "vote", "r1", "--against"]);
        match app.command {
            Commands::Rules {
                cmd: RulesCmd::Vote { id, against },
            } => {
                assert_eq!(id, RecordId::new("r1"));
                assert!(against);
            }
            other => panic!("Expected rules vote, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_sort_column_rejected() {
        assert!(App::try_parse_from(["league-companion", "legacy", "--sort", "wins"]).is_err());
    }
}
