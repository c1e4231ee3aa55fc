//! Season history: headline finishers and final placements per season.

use serde::Serialize;

use crate::{
    store::models::{Manager, Season, SeasonPlacement},
    RecordId,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementWithManager {
    #[serde(flatten)]
    pub placement: SeasonPlacement,
    pub manager: Option<Manager>,
}

impl PlacementWithManager {
    pub fn manager_name(&self) -> &str {
        self.manager.as_ref().map_or("Unknown", |m| m.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonWithDetails {
    #[serde(flatten)]
    pub season: Season,
    pub champion: Option<Manager>,
    pub runner_up: Option<Manager>,
    pub sacko: Option<Manager>,
    /// Ascending by placement.
    pub placements: Vec<PlacementWithManager>,
}

fn find_manager(managers: &[Manager], id: Option<&RecordId>) -> Option<Manager> {
    let id = id?;
    managers.iter().find(|m| &m.id == id).cloned()
}

/// Attach managers and placements to each season, keeping the season order given.
pub fn enrich_seasons(
    seasons: &[Season],
    placements: &[SeasonPlacement],
    managers: &[Manager],
) -> Vec<SeasonWithDetails> {
    seasons
        .iter()
        .map(|season| {
            let mut season_placements: Vec<PlacementWithManager> = placements
                .iter()
                .filter(|p| p.season_id == season.id)
                .map(|p| PlacementWithManager {
                    placement: p.clone(),
                    manager: find_manager(managers, Some(&p.manager_id)),
                })
                .collect();
            season_placements.sort_by_key(|p| p.placement.placement);

            SeasonWithDetails {
                season: season.clone(),
                champion: find_manager(managers, season.champion_id.as_ref()),
                runner_up: find_manager(managers, season.runner_up_id.as_ref()),
                sacko: find_manager(managers, season.sacko_id.as_ref()),
                placements: season_placements,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::test_support::manager;
    use crate::SeasonYear;

    fn season(id: &str, year: u16, champion: Option<&str>, sacko: Option<&str>) -> Season {
        Season {
            id: RecordId::new(id),
            year: SeasonYear::new(year),
            champion_id: champion.map(RecordId::new),
            runner_up_id: None,
            sacko_id: sacko.map(RecordId::new),
            regular_season_winner_id: None,
            notes: None,
            created_at: None,
        }
    }

    fn placement(id: &str, season_id: &str, manager_id: &str, placement: u32) -> SeasonPlacement {
        SeasonPlacement {
            id: RecordId::new(id),
            season_id: RecordId::new(season_id),
            manager_id: RecordId::new(manager_id),
            placement,
            regular_season_wins: 0,
            regular_season_losses: 0,
            points_for: 0.0,
            points_against: 0.0,
            created_at: None,
        }
    }

    #[test]
    fn test_enrich_resolves_finishers() {
        let managers = vec![manager("m1", "Derek"), manager("m2", "Alex")];
        let seasons = vec![season("s1", 2023, Some("m1"), Some("ghost"))];

        let enriched = enrich_seasons(&seasons, &[], &managers);
        assert_eq!(enriched[0].champion.as_ref().unwrap().name, "Derek");
        assert!(enriched[0].runner_up.is_none());
        assert!(enriched[0].sacko.is_none());
    }

    #[test]
    fn test_placements_filtered_and_sorted() {
        let managers = vec![manager("m1", "Derek"), manager("m2", "Alex"), manager("m3", "Sam")];
        let seasons = vec![season("s2", 2024, None, None), season("s1", 2023, None, None)];
        let placements = vec![
            placement("p1", "s2", "m1", 3),
            placement("p2", "s1", "m2", 1),
            placement("p3", "s2", "m2", 1),
            placement("p4", "s2", "m9", 2),
        ];

        let enriched = enrich_seasons(&seasons, &placements, &managers);
        assert_eq!(enriched[0].season.year, SeasonYear::new(2024));

        let ranks: Vec<u32> = enriched[0].placements.iter().map(|p| p.placement.placement).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(enriched[0].placements[0].manager_name(), "Alex");
        assert_eq!(enriched[0].placements[1].manager_name(), "Unknown");
        assert_eq!(enriched[1].placements.len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(enrich_seasons(&[], &[], &[]).is_empty());
        let enriched = enrich_seasons(&[season("s1", 2020, Some("m1"), None)], &[], &[]);
        assert!(enriched[0].champion.is_none());
        assert!(enriched[0].placements.is_empty());
    }
}
