//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fantasy_data::{
    cli::{Commands, FantasyDataCli},
    commands::{handle_nba, handle_nfl},
    logging::init_tracing,
    FantasyData,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FantasyDataCli::parse();
    init_tracing(app.verbose);

    let client = FantasyData::with_config(app.connection.to_config())
        .context("Invalid client configuration")?;

    let output = match app.command {
        Commands::Nfl { cmd } => handle_nfl(&client, cmd, app.json).await,
        Commands::Nba { cmd } => handle_nba(&client, cmd, app.json).await,
    }
    .context("FantasyData request failed")?;

    println!("{output}");
    Ok(())
}
