//! Weekly head-to-head pairing.

use serde::Serialize;
use tracing::warn;

use super::standings::RosterWithUser;
use crate::{sleeper::types::SleeperMatchup, MatchupId};

/// One team's weekly score with its standings entry, if found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupTeam {
    #[serde(flatten)]
    pub matchup: SleeperMatchup,
    pub roster: Option<RosterWithUser>,
}

impl MatchupTeam {
    pub fn points(&self) -> f64 {
        self.matchup.points
    }

    /// Team display name, falling back to `fallback` (e.g. "Team 1").
    pub fn team_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.roster
            .as_ref()
            .and_then(|r| r.user.as_ref())
            .and_then(|u| u.team_name())
            .unwrap_or(fallback)
    }
}

/// Two teams sharing a matchup id. No `team2` means a bye.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupPair {
    pub matchup_id: Option<MatchupId>,
    pub team1: MatchupTeam,
    pub team2: Option<MatchupTeam>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupOutcome {
    Team1Leads,
    Team2Leads,
    Tied,
    Bye,
}

impl MatchupPair {
    pub fn is_bye(&self) -> bool {
        self.team2.is_none()
    }

    pub fn outcome(&self) -> MatchupOutcome {
        let Some(team2) = &self.team2 else {
            return MatchupOutcome::Bye;
        };
        let (p1, p2) = (self.team1.points(), team2.points());
        if p1 > p2 {
            MatchupOutcome::Team1Leads
        } else if p2 > p1 {
            MatchupOutcome::Team2Leads
        } else {
            MatchupOutcome::Tied
        }
    }
}

/// Group a week's matchup records into pairs.
///
/// Pairs come out in the order their ids were first seen. The first record for
/// an id is `team1`, the second `team2`. Records without an id are never
/// grouped with each other: each one becomes its own bye. A third record for
/// one id replaces `team2` and is logged.
pub fn pair_matchups(standings: &[RosterWithUser], matchups: &[SleeperMatchup]) -> Vec<MatchupPair> {
    let mut pairs: Vec<MatchupPair> = Vec::new();

    for matchup in matchups {
        let team = MatchupTeam {
            matchup: matchup.clone(),
            roster: standings
                .iter()
                .find(|r| r.roster.roster_id == matchup.roster_id)
                .cloned(),
        };

        let existing = matchup
            .matchup_id
            .and_then(|id| pairs.iter().position(|p| p.matchup_id == Some(id)));

        match existing {
            Some(idx) => {
                let pair = &mut pairs[idx];
                if pair.team2.is_some() {
                    warn!(matchup_id = ?matchup.matchup_id, roster_id = %matchup.roster_id, "More than two teams share a matchup id");
                }
                pair.team2 = Some(team);
            }
            None => pairs.push(MatchupPair {
                matchup_id: matchup.matchup_id,
                team1: team,
                team2: None,
            }),
        }
    }

    pairs
}
