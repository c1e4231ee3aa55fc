//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use league_companion::{
    cli::{App, Commands, RulesCmd},
    commands::{
        home::handle_home,
        league_info::handle_league,
        legacy::handle_legacy,
        managers::handle_managers,
        media::handle_media,
        rules::{handle_rules_list, handle_rules_submit, handle_rules_vote, Vote},
        thunderdome::handle_thunderdome,
        CommandContext,
    },
    config::AppConfig,
    SortState,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();

    let config = AppConfig::load(app.config.as_deref())
        .with_context(|| match &app.config {
            Some(path) => format!("Failed to load config from {}", path.display()),
            None => "Failed to load config from environment".to_string(),
        })?
        .with_league_id(app.league_id);
    let ctx = CommandContext::from_config(&config);
    let as_json = app.json;

    match app.command {
        Commands::Home => handle_home(&ctx, as_json).await?,
        Commands::Managers => handle_managers(&ctx, as_json).await?,
        Commands::Legacy { sort } => {
            let state = SortState::default().select_all(sort);
            handle_legacy(&ctx, state, as_json).await?
        }
        Commands::Thunderdome => handle_thunderdome(&ctx, as_json).await?,
        Commands::Media => handle_media(&ctx, as_json).await?,
        Commands::League => handle_league(&ctx, as_json).await?,
        Commands::Rules { cmd } => match cmd {
            RulesCmd::List => handle_rules_list(&ctx, as_json).await?,
            RulesCmd::Submit {
                title,
                description,
                submitted_by,
            } => handle_rules_submit(&ctx, &title, &description, &submitted_by, as_json).await?,
            RulesCmd::Vote { id, against } => {
                let choice = if against { Vote::Against } else { Vote::For };
                handle_rules_vote(&ctx, &id, choice, as_json).await?
            }
        },
    }

    Ok(())
}
