//! Thunder Dome page: rivalries and side bets.

use serde::Serialize;

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    league::thunderdome::{bet_views, rivalry_views, BetView, RivalryView},
    store::{
        models::{Bet, BetStatus, Manager, Rivalry, Table},
        records::{select_all, select_or_empty},
        Query, RecordStore,
    },
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThunderdomeView {
    pub rivalries: Vec<RivalryView>,
    pub bets: Vec<BetView>,
}

pub fn rivalries_query() -> Query {
    Query::new(Table::Rivalries).order("created_at", false)
}

pub fn bets_query() -> Query {
    Query::new(Table::Bets).order("created_at", false)
}

pub async fn load_thunderdome<S: RecordStore>(ctx: &CommandContext<S>) -> PageView<ThunderdomeView> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }

    let rivalries_q = rivalries_query();
    let bets_q = bets_query();
    let (rivalries, bets, managers) = tokio::join!(
        select_or_empty::<Rivalry, _>(&ctx.store, &rivalries_q),
        select_or_empty::<Bet, _>(&ctx.store, &bets_q),
        select_all::<Manager, _>(&ctx.store),
    );

    PageView::Ready(ThunderdomeView {
        rivalries: rivalry_views(&rivalries, &managers),
        bets: bet_views(&bets, &managers),
    })
}

pub fn render_thunderdome(view: &ThunderdomeView) -> String {
    let mut out = heading("Rivalries");
    if view.rivalries.is_empty() {
        out.push_str("No rivalries yet.\n");
    }
    for r in &view.rivalries {
        if let Some(name) = &r.rivalry.rivalry_name {
            out.push_str(&format!("{name}\n"));
        }
        out.push_str(&format!(
            "  {} {} - {} {}  ({})\n",
            r.manager1_name(),
            r.rivalry.manager1_wins,
            r.rivalry.manager2_wins,
            r.manager2_name(),
            r.games_label()
        ));
    }
    out.push('\n');

    out.push_str(&heading("Bets"));
    if view.bets.is_empty() {
        out.push_str("No bets on the books.\n");
    }
    for b in &view.bets {
        out.push_str(&format!("[{}] {}\n", b.bet.status, b.bet.description));
        out.push_str(&format!("  Between: {}\n", b.participant_names.join(", ")));
        if !b.bet.stakes.is_empty() {
            out.push_str(&format!("  Stakes: {}\n", b.bet.stakes));
        }
        if b.bet.status == BetStatus::Completed {
            if let Some(winner) = &b.winner_name {
                out.push_str(&format!("  Winner: {winner}\n"));
            }
        }
    }
    out
}

/// Handle the thunderdome command
pub async fn handle_thunderdome<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    let view = load_thunderdome(ctx).await;
    emit(&view, as_json, render_thunderdome)
}
