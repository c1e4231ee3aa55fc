//! Rule board: proposed rule changes, new submissions and voting.

use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    store::{
        models::{NewRuleSubmission, Record, RuleSubmission, Table},
        records::{insert_one, select_or_empty, update_by_id},
        Query, RecordStore,
    },
    RecordId, Result,
};

/// Newest submissions first.
pub fn rules_query() -> Query {
    Query::new(Table::RuleSubmissions).order("created_at", false)
}

pub async fn load_rules<S: RecordStore>(ctx: &CommandContext<S>) -> PageView<Vec<RuleSubmission>> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }
    PageView::Ready(select_or_empty(&ctx.store, &rules_query()).await)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Submitted,
    /// A field was blank after trimming; nothing was written.
    Invalid,
    Failed,
}

pub async fn submit_rule<S: RecordStore>(
    ctx: &CommandContext<S>,
    title: &str,
    description: &str,
    submitted_by: &str,
) -> SubmitOutcome {
    let Some(rule) = NewRuleSubmission::new(title, description, submitted_by) else {
        return SubmitOutcome::Invalid;
    };
    if insert_one(&ctx.store, Table::RuleSubmissions, &rule).await {
        info!(title = %rule.title, "Rule submitted");
        SubmitOutcome::Submitted
    } else {
        SubmitOutcome::Failed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    For,
    Against,
}

impl Vote {
    fn column(self) -> &'static str {
        match self {
            Vote::For => "votes_for",
            Vote::Against => "votes_against",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOutcome {
    /// The new tally for the chosen side.
    Recorded { votes: u32 },
    NotFound,
    Failed,
}

/// Add one vote to a submission, using the tally from a fresh listing.
pub async fn vote<S: RecordStore>(ctx: &CommandContext<S>, id: &RecordId, vote: Vote) -> VoteOutcome {
    let rules: Vec<RuleSubmission> = select_or_empty(&ctx.store, &rules_query()).await;
    let Some(rule) = rules.iter().find(|r| r.id() == id) else {
        warn!(%id, "Vote for unknown rule ignored");
        return VoteOutcome::NotFound;
    };

    let current = match vote {
        Vote::For => rule.votes_for,
        Vote::Against => rule.votes_against,
    };
    let votes = current.saturating_add(1);
    let changes = json!({ vote.column(): votes });

    if update_by_id(&ctx.store, Table::RuleSubmissions, id, changes).await {
        VoteOutcome::Recorded { votes }
    } else {
        VoteOutcome::Failed
    }
}

pub fn render_rules(rules: &Vec<RuleSubmission>) -> String {
    let mut out = heading("Rule Submissions");
    if rules.is_empty() {
        out.push_str("No rule submissions yet.\n");
        return out;
    }
    for rule in rules {
        out.push_str(&format!("[{}] {} ({})\n", rule.status, rule.title, rule.id));
        out.push_str(&format!("  {}\n", rule.description));
        out.push_str(&format!(
            "  Submitted by {}  👍 {}  👎 {}\n",
            rule.submitted_by, rule.votes_for, rule.votes_against
        ));
    }
    out
}

/// Handle `rules list`
pub async fn handle_rules_list<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    let view = load_rules(ctx).await;
    emit(&view, as_json, render_rules)
}

/// Handle `rules submit`
pub async fn handle_rules_submit<S: RecordStore>(
    ctx: &CommandContext<S>,
    title: &str,
    description: &str,
    submitted_by: &str,
    as_json: bool,
) -> Result<()> {
    let view = match require_store(ctx) {
        Some(setup) => setup,
        None => PageView::Ready(submit_rule(ctx, title, description, submitted_by).await),
    };
    emit(&view, as_json, |outcome: &SubmitOutcome| match outcome {
        SubmitOutcome::Submitted => "Rule submitted.\n".to_string(),
        SubmitOutcome::Invalid => "Title, description and submitter are all required.\n".to_string(),
        SubmitOutcome::Failed => "Rule was not submitted.\n".to_string(),
    })
}

/// Handle `rules vote`
pub async fn handle_rules_vote<S: RecordStore>(
    ctx: &CommandContext<S>,
    id: &RecordId,
    choice: Vote,
    as_json: bool,
) -> Result<()> {
    let view = match require_store(ctx) {
        Some(setup) => setup,
        None => PageView::Ready(vote(ctx, id, choice).await),
    };
    emit(&view, as_json, |outcome: &VoteOutcome| match outcome {
        VoteOutcome::Recorded { votes } => format!("Vote recorded ({votes} total).\n"),
        VoteOutcome::NotFound => "No rule with that id.\n".to_string(),
        VoteOutcome::Failed => "Vote was not applied.\n".to_string(),
    })
}
