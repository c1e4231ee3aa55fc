//! Legacy page: all-time power rankings and season-by-season history.

use serde::Serialize;

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    league::{
        ranking::{sort_managers, SortDirection, SortState},
        seasons::{enrich_seasons, SeasonWithDetails},
        stats::lp_avg_display,
    },
    store::{
        models::{Manager, Season, SeasonPlacement, Table},
        records::{select_all, select_or_empty},
        Query, RecordStore,
    },
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedManager {
    pub rank: usize,
    #[serde(flatten)]
    pub manager: Manager,
    /// Two decimals, e.g. `"17.75"`.
    pub lp_avg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyView {
    pub sort: SortState,
    pub rankings: Vec<RankedManager>,
    pub seasons: Vec<SeasonWithDetails>,
}

/// Newest season first.
pub fn seasons_query() -> Query {
    Query::new(Table::Seasons).order("year", false)
}

pub fn rank_managers(managers: &[Manager], sort: SortState) -> Vec<RankedManager> {
    sort_managers(managers, sort)
        .into_iter()
        .enumerate()
        .map(|(index, manager)| RankedManager {
            rank: index + 1,
            lp_avg: lp_avg_display(&manager),
            manager,
        })
        .collect()
}

pub async fn load_legacy<S: RecordStore>(ctx: &CommandContext<S>, sort: SortState) -> PageView<LegacyView> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }

    let seasons_q = seasons_query();
    let (seasons, placements, managers) = tokio::join!(
        select_or_empty::<Season, _>(&ctx.store, &seasons_q),
        select_all::<SeasonPlacement, _>(&ctx.store),
        select_all::<Manager, _>(&ctx.store),
    );

    PageView::Ready(LegacyView {
        sort,
        rankings: rank_managers(&managers, sort),
        seasons: enrich_seasons(&seasons, &placements, &managers),
    })
}

fn medal(placement: u32) -> &'static str {
    match placement {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

pub fn render_legacy(view: &LegacyView) -> String {
    let mut out = String::new();

    if !view.rankings.is_empty() {
        out.push_str(&heading(&format!(
            "Power Rankings (by {}, {})",
            view.sort.column,
            match view.sort.direction {
                SortDirection::Asc => "ascending",
                SortDirection::Desc => "descending",
            }
        )));
        out.push_str(&format!(
            "{:<5} {:<20} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
            "Rank", "Manager", "LP", "LP Avg", "Seasons", "Titles", "Sackos"
        ));
        for r in &view.rankings {
            let m = &r.manager;
            out.push_str(&format!(
                "{:<5} {:<20} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
                format!("#{}", r.rank),
                m.name,
                m.legacy_points,
                r.lp_avg,
                m.total_seasons,
                m.championships,
                m.last_place_finishes
            ));
        }
        out.push('\n');
    }

    out.push_str(&heading("Season History"));
    if view.seasons.is_empty() {
        out.push_str("No seasons recorded yet.\n");
        return out;
    }

    for season in &view.seasons {
        out.push_str(&format!("{} Season\n", season.season.year));
        if let Some(notes) = &season.season.notes {
            out.push_str(&format!("  {notes}\n"));
        }
        if let Some(champion) = &season.champion {
            out.push_str(&format!("  👑 Champion:  {}\n", champion.name));
        }
        if let Some(runner_up) = &season.runner_up {
            out.push_str(&format!("  Runner-up:   {}\n", runner_up.name));
        }
        if let Some(sacko) = &season.sacko {
            out.push_str(&format!("  Sacko:       {}\n", sacko.name));
        }
        for p in &season.placements {
            out.push_str(&format!(
                "  {} {:>2}. {:<20} {}-{} • {:.2} PF\n",
                medal(p.placement.placement),
                p.placement.placement,
                p.manager_name(),
                p.placement.regular_season_wins,
                p.placement.regular_season_losses,
                p.placement.points_for
            ));
        }
        out.push('\n');
    }
    out
}

/// Handle the legacy command
pub async fn handle_legacy<S: RecordStore>(ctx: &CommandContext<S>, sort: SortState, as_json: bool) -> Result<()> {
    let view = load_legacy(ctx, sort).await;
    emit(&view, as_json, render_legacy)
}
