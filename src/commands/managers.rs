//! Managers page: one profile card per manager.

use serde::Serialize;

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    league::stats::win_percentage_display,
    store::{
        models::{Manager, Table},
        records::select_or_empty,
        Query, RecordStore,
    },
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerCard {
    #[serde(flatten)]
    pub manager: Manager,
    /// One decimal, e.g. `"56.5"`.
    pub win_percentage: String,
}

impl From<Manager> for ManagerCard {
    fn from(manager: Manager) -> Self {
        let win_percentage = win_percentage_display(&manager);
        Self {
            manager,
            win_percentage,
        }
    }
}

/// Most championships first.
pub fn managers_query() -> Query {
    Query::new(Table::Managers).order("championships", false)
}

pub async fn load_managers<S: RecordStore>(ctx: &CommandContext<S>) -> PageView<Vec<ManagerCard>> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }
    let managers: Vec<Manager> = select_or_empty(&ctx.store, &managers_query()).await;
    PageView::Ready(managers.into_iter().map(ManagerCard::from).collect())
}

pub fn render_managers(cards: &Vec<ManagerCard>) -> String {
    let mut out = heading("League Managers");
    if cards.is_empty() {
        out.push_str("No managers found.\n");
        return out;
    }

    for card in cards {
        let m = &card.manager;
        let crown = if m.championships > 0 { " 🏆" } else { "" };
        out.push_str(&format!("{}{crown}\n", m.name));
        if let Some(quote) = &m.quote {
            out.push_str(&format!("  \"{quote}\"\n"));
        }
        out.push_str(&format!(
            "  Championships: {}  Seasons: {}  Playoffs: {}\n",
            m.championships, m.total_seasons, m.playoff_appearances
        ));
        out.push_str(&format!(
            "  Record: {}-{} ({}%)  Legacy Points: {}\n",
            m.total_wins, m.total_losses, card.win_percentage, m.legacy_points
        ));
        if m.last_place_finishes > 0 {
            out.push_str(&format!("  Last Place Finishes: {}\n", m.last_place_finishes));
        }
    }
    out
}

/// Handle the managers command
pub async fn handle_managers<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    let view = load_managers(ctx).await;
    emit(&view, as_json, render_managers)
}
