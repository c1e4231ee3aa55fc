//! Fixture builders shared by the league unit tests.

use crate::{
    sleeper::types::{RosterSettings, SleeperMatchup, SleeperRoster, SleeperUser},
    store::models::Manager,
    MatchupId, RecordId, RosterId, UserId,
};

pub fn manager(id: &str, name: &str) -> Manager {
    Manager {
        id: RecordId::new(id),
        name: name.to_string(),
        profile_image_url: None,
        quote: None,
        championships: 0,
        total_seasons: 0,
        total_wins: 0,
        total_losses: 0,
        playoff_appearances: 0,
        last_place_finishes: 0,
        legacy_points: 0.0,
        sleeper_user_id: None,
        created_at: None,
    }
}

pub fn user(id: &str, display_name: &str) -> SleeperUser {
    SleeperUser {
        user_id: UserId::new(id),
        username: Some(display_name.to_lowercase()),
        display_name: Some(display_name.to_string()),
        avatar: None,
    }
}

pub fn roster(id: u32, owner: Option<&str>, wins: u32, losses: u32, ties: u32, fpts: f64) -> SleeperRoster {
    SleeperRoster {
        roster_id: RosterId::new(id),
        owner_id: owner.map(UserId::new),
        settings: RosterSettings {
            wins,
            losses,
            ties,
            fpts,
            ..RosterSettings::default()
        },
        players: Vec::new(),
    }
}

pub fn matchup(roster_id: u32, matchup_id: Option<u32>, points: f64) -> SleeperMatchup {
    SleeperMatchup {
        roster_id: RosterId::new(roster_id),
        matchup_id: matchup_id.map(MatchupId::new),
        points,
        players_points: None,
    }
}
