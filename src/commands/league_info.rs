//! League metadata straight from Sleeper.

use super::common::{emit, heading, CommandContext, PageView};
use crate::{sleeper::SleeperLeague, store::RecordStore, Result};

/// League metadata; only needs a league id, not the record store.
pub async fn load_league<S: RecordStore>(ctx: &CommandContext<S>) -> PageView<Option<SleeperLeague>> {
    PageView::Ready(ctx.sleeper.league_info().await)
}

pub fn render_league(league: &Option<SleeperLeague>) -> String {
    let Some(league) = league else {
        return "League not configured or unavailable\n".to_string();
    };
    let mut out = heading(&league.name);
    out.push_str(&format!("Season: {}\n", league.season));
    if let Some(status) = &league.status {
        out.push_str(&format!("Status: {status}\n"));
    }
    if let Some(teams) = league.total_rosters {
        out.push_str(&format!("Teams: {teams}\n"));
    }
    if let Some(week) = league.settings.playoff_week_start {
        out.push_str(&format!("Playoffs start: week {week}\n"));
    }
    out
}

/// Handle the league command
pub async fn handle_league<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    let view = load_league(ctx).await;
    emit(&view, as_json, render_league)
}
