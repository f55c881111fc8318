//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use kards_stats::{
    cli::{Commands, KardsStats},
    commands::{
        interactive::handle_interactive,
        search::{handle_search, SearchParams},
    },
    core::logging::{init_logging, LogConfig},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = KardsStats::parse();

    init_logging(&LogConfig::from_verbosity(app.verbose)).context("failed to initialise logging")?;
    let overrides = app.connection.overrides();

    match app.command {
        Commands::Search {
            query,
            json,
            update,
        } => handle_search(
            overrides,
            SearchParams {
                query,
                as_json: json,
                update,
            },
        )
        .await
        .context("search failed")?,

        Commands::Interactive => handle_interactive(overrides)
            .await
            .context("interactive session failed")?,
    }

    Ok(())
}
