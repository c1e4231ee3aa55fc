//! Home page: standings, this week's matchups, highlights and upcoming events.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    league::{
        matchups::{pair_matchups, MatchupPair},
        standings::{standings_with_users, RosterWithUser},
    },
    store::{
        models::{Event, Highlight, Table},
        records::select_or_empty,
        Query, RecordStore,
    },
    Result, Week,
};

pub const HIGHLIGHT_LIMIT: usize = 6;
pub const EVENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub current_week: Week,
    pub standings: Vec<RosterWithUser>,
    pub matchups: Vec<MatchupPair>,
    pub highlights: Vec<Highlight>,
    pub events: Vec<Event>,
}

/// Pinned highlights first, newest first.
pub fn highlights_query() -> Query {
    Query::new(Table::Highlights)
        .order("is_pinned", false)
        .order("date", false)
        .limit(HIGHLIGHT_LIMIT)
}

/// Events on or after `now`, soonest first.
pub fn upcoming_events_query(now: DateTime<Utc>) -> Query {
    Query::new(Table::Events)
        .gte("event_date", now.to_rfc3339_opts(SecondsFormat::Millis, true))
        .order("event_date", true)
        .limit(EVENT_LIMIT)
}

/// Load everything the home page shows.
///
/// Highlights, events and the current week are fetched together; standings
/// and that week's matchups follow once the week is known.
pub async fn load_home<S: RecordStore>(ctx: &CommandContext<S>, now: DateTime<Utc>) -> PageView<HomeView> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }

    let highlights_q = highlights_query();
    let events_q = upcoming_events_query(now);
    let (highlights, events, current_week) = tokio::join!(
        select_or_empty::<Highlight, _>(&ctx.store, &highlights_q),
        select_or_empty::<Event, _>(&ctx.store, &events_q),
        ctx.sleeper.current_week(),
    );

    let (standings, weekly) = tokio::join!(
        standings_with_users(&ctx.sleeper),
        ctx.sleeper.matchups(current_week),
    );
    let matchups = pair_matchups(&standings, &weekly);

    PageView::Ready(HomeView {
        current_week,
        standings,
        matchups,
        highlights,
        events,
    })
}

pub fn render_home(view: &HomeView) -> String {
    let mut out = String::new();

    if !view.standings.is_empty() {
        out.push_str(&heading("Current Standings"));
        for (index, team) in view.standings.iter().enumerate() {
            let s = &team.roster.settings;
            out.push_str(&format!(
                "#{:<3} {:<24} {:>8} ({:>4})  PF {:>8.2}  PA {:>8.2}\n",
                index + 1,
                team.team_name(),
                team.record(),
                team.win_ratio_display(),
                s.points_for(),
                s.points_against(),
            ));
        }
        out.push('\n');
    }

    if !view.matchups.is_empty() {
        out.push_str(&heading(&format!("Week {} Matchups", view.current_week)));
        for pair in &view.matchups {
            let team1 = format!("{} {:.2}", pair.team1.team_name("Team 1"), pair.team1.points());
            match &pair.team2 {
                Some(team2) => out.push_str(&format!(
                    "{team1}  vs  {} {:.2}\n",
                    team2.team_name("Team 2"),
                    team2.points()
                )),
                None => out.push_str(&format!("{team1}  (bye)\n")),
            }
        }
        out.push('\n');
    }

    out.push_str(&heading("League Highlights"));
    if view.highlights.is_empty() {
        out.push_str("No highlights yet. Start making history!\n");
    } else {
        for h in &view.highlights {
            let pin = if h.is_pinned { "📌 " } else { "" };
            out.push_str(&format!("{pin}{} ({})\n", h.title, h.date));
            if let Some(description) = &h.description {
                out.push_str(&format!("    {description}\n"));
            }
        }
    }
    out.push('\n');

    out.push_str(&heading("Upcoming Events"));
    if view.events.is_empty() {
        out.push_str("No upcoming events\n");
    } else {
        for e in &view.events {
            out.push_str(&format!("{} - {}", e.title, e.event_date.format("%b %-d, %-I:%M %p")));
            if let Some(location) = &e.location {
                out.push_str(&format!(" @ {location}"));
            }
            out.push('\n');
        }
    }

    out
}

/// Handle the home command
pub async fn handle_home<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    // tarpaulin::skip - HTTP calls, tested via integration tests
    let view = load_home(ctx, Utc::now()).await;
    emit(&view, as_json, render_home)
}
