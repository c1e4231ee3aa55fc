//! Rivalries and side bets with manager names resolved.

use serde::Serialize;

use crate::{
    store::models::{Bet, Manager, Rivalry},
    RecordId,
};

const UNKNOWN: &str = "Unknown";

fn manager_name<'a>(managers: &'a [Manager], id: &RecordId) -> &'a str {
    managers
        .iter()
        .find(|m| &m.id == id)
        .map_or(UNKNOWN, |m| m.name.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RivalryView {
    #[serde(flatten)]
    pub rivalry: Rivalry,
    pub manager1: Option<Manager>,
    pub manager2: Option<Manager>,
    pub total_games: u32,
}

impl RivalryView {
    pub fn manager1_name(&self) -> &str {
        self.manager1.as_ref().map_or(UNKNOWN, |m| m.name.as_str())
    }

    pub fn manager2_name(&self) -> &str {
        self.manager2.as_ref().map_or(UNKNOWN, |m| m.name.as_str())
    }

    /// `"1 game"` / `"7 games"`.
    pub fn games_label(&self) -> String {
        match self.total_games {
            1 => "1 game".to_string(),
            n => format!("{n} games"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetView {
    #[serde(flatten)]
    pub bet: Bet,
    pub participant_names: Vec<String>,
    pub winner_name: Option<String>,
}

pub fn rivalry_views(rivalries: &[Rivalry], managers: &[Manager]) -> Vec<RivalryView> {
    rivalries
        .iter()
        .map(|r| RivalryView {
            rivalry: r.clone(),
            manager1: managers.iter().find(|m| m.id == r.manager1_id).cloned(),
            manager2: managers.iter().find(|m| m.id == r.manager2_id).cloned(),
            total_games: r.manager1_wins.saturating_add(r.manager2_wins),
        })
        .collect()
}

pub fn bet_views(bets: &[Bet], managers: &[Manager]) -> Vec<BetView> {
    bets.iter()
        .map(|bet| BetView {
            bet: bet.clone(),
            participant_names: bet
                .participants
                .iter()
                .map(|id| manager_name(managers, id).to_string())
                .collect(),
            winner_name: bet
                .winner_id
                .as_ref()
                .map(|id| manager_name(managers, id).to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::test_support::manager;
    use crate::store::models::BetStatus;

    fn rivalry(m1: &str, m2: &str, w1: u32, w2: u32) -> Rivalry {
        Rivalry {
            id: RecordId::new(format!("{m1}-{m2}")),
            manager1_id: RecordId::new(m1),
            manager2_id: RecordId::new(m2),
            rivalry_name: Some("The Feud".to_string()),
            manager1_wins: w1,
            manager2_wins: w2,
            created_at: None,
        }
    }

    fn bet(participants: &[&str], winner: Option<&str>, status: BetStatus) -> Bet {
        Bet {
            id: RecordId::new("b1"),
            season_id: None,
            description: "Loser buys wings".to_string(),
            participants: participants.iter().map(|p| RecordId::new(*p)).collect(),
            stakes: "Wings".to_string(),
            winner_id: winner.map(RecordId::new),
            status,
            created_at: None,
            resolved_at: None,
        }
    }

    #[test]
    fn test_rivalry_views() {
        let managers = vec![manager("m1", "Derek"), manager("m2", "Alex")];
        let views = rivalry_views(&[rivalry("m1", "m2", 4, 3), rivalry("m1", "ghost", 1, 0)], &managers);

        assert_eq!(views[0].manager1_name(), "Derek");
        assert_eq!(views[0].manager2_name(), "Alex");
        assert_eq!(views[0].total_games, 7);
        assert_eq!(views[0].games_label(), "7 games");
        assert_eq!(views[1].manager2_name(), "Unknown");
        assert_eq!(views[1].games_label(), "1 game");
    }

    #[test]
    fn test_total_games_saturates() {
        let views = rivalry_views(&[rivalry("a", "b", u32::MAX, 2)], &[]);
        assert_eq!(views[0].total_games, u32::MAX);
    }

    #[test]
    fn test_no_games_label() {
        let views = rivalry_views(&[rivalry("a", "b", 0, 0)], &[]);
        assert_eq!(views[0].games_label(), "0 games");
    }

    #[test]
    fn test_bet_views_resolve_names() {
        let managers = vec![manager("m1", "Derek"), manager("m2", "Alex")];
        let views = bet_views(
            &[bet(&["m1", "m2", "m7"], Some("m2"), BetStatus::Completed)],
            &managers,
        );
        assert_eq!(views[0].participant_names, vec!["Derek", "Alex", "Unknown"]);
        assert_eq!(views[0].winner_name.as_deref(), Some("Alex"));
    }

    #[test]
    fn test_active_bet_has_no_winner() {
        let views = bet_views(&[bet(&["m1"], None, BetStatus::Active)], &[]);
        assert!(views[0].winner_name.is_none());
        assert_eq!(views[0].participant_names, vec!["Unknown"]);
    }
}
