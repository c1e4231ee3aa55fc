//! League standings: rosters joined to their owners and ranked.

use std::cmp::Ordering;

use serde::Serialize;

use crate::sleeper::{
    types::{SleeperRoster, SleeperUser},
    SleeperClient,
};

/// A roster with its owning Sleeper user, if one could be matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterWithUser {
    #[serde(flatten)]
    pub roster: SleeperRoster,
    pub user: Option<SleeperUser>,
}

impl RosterWithUser {
    pub fn team_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(SleeperUser::team_name)
            .unwrap_or("Unknown Team")
    }

    pub fn win_ratio(&self) -> f64 {
        win_ratio(&self.roster)
    }

    /// `W-L`, or `W-L-T` once a tie has been recorded.
    pub fn record(&self) -> String {
        let s = &self.roster.settings;
        if s.ties > 0 {
            format!("{}-{}-{}", s.wins, s.losses, s.ties)
        } else {
            format!("{}-{}", s.wins, s.losses)
        }
    }

    /// Win ratio as a whole percentage, e.g. `"67%"`.
    pub fn win_ratio_display(&self) -> String {
        format!("{:.0}%", self.win_ratio() * 100.0)
    }
}

/// `wins / (wins + losses + ties)`.
///
/// With no games played the denominator is taken as 1, so the ratio is the raw
/// win count (0 in practice).
pub fn win_ratio(roster: &SleeperRoster) -> f64 {
    let s = &roster.settings;
    let games = match s.games_played() {
        0 => 1,
        n => n,
    };
    f64::from(s.wins) / f64::from(games)
}

/// Attach each roster's owner by `owner_id == user_id`. Unmatched owners stay `None`.
pub fn join_users(rosters: &[SleeperRoster], users: &[SleeperUser]) -> Vec<RosterWithUser> {
    rosters
        .iter()
        .map(|roster| RosterWithUser {
            roster: roster.clone(),
            user: roster
                .owner_id
                .as_ref()
                .and_then(|owner| users.iter().find(|u| &u.user_id == owner))
                .cloned(),
        })
        .collect()
}

/// Win ratio descending, then points for descending. Stable for full ties.
pub fn compare_standings(a: &RosterWithUser, b: &RosterWithUser) -> Ordering {
    b.win_ratio()
        .total_cmp(&a.win_ratio())
        .then_with(|| {
            b.roster
                .settings
                .points_for()
                .total_cmp(&a.roster.settings.points_for())
        })
}

/// Join and rank. Inputs are left untouched.
pub fn rank_standings(rosters: &[SleeperRoster], users: &[SleeperUser]) -> Vec<RosterWithUser> {
    let mut standings = join_users(rosters, users);
    standings.sort_by(compare_standings);
    standings
}

/// Fetch rosters and users concurrently and rank them.
///
/// Each source degrades to empty on its own, so a failed user lookup still
/// yields ranked (ownerless) rosters.
pub async fn standings_with_users(client: &SleeperClient) -> Vec<RosterWithUser> {
    let (rosters, users) = tokio::join!(client.rosters(), client.users());
    rank_standings(&rosters, &users)
}
