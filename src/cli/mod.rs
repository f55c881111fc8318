//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{ConfigOverrides, Environment};

/// Connection settings shared by every command.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Stats deployment to use (or set `KARDS_STATS_ENV`).
    #[clap(long = "env", global = true, value_enum)]
    pub environment: Option<Environment>,

    /// GraphQL endpoint URL, overriding `--env` (or set `KARDS_STATS_ENDPOINT`).
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    /// Request deadline in seconds (or set `KARDS_STATS_TIMEOUT_SECS`).
    #[clap(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            environment: self.environment,
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "kards-stats", about = "KARDS player stats lookup", version)]
pub struct KardsStats {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a player by `Name#1234` or 6-digit id.
    Search {
        /// `Name#1234` or a 6-digit player id.
        query: String,

        /// Output the session snapshot as JSON instead of text.
        #[clap(long)]
        json: bool,

        /// After loading the player, ask the server to recompute their stats.
        #[clap(long)]
        update: bool,
    },

    /// Start an interactive lookup session reading commands from stdin.
    ///
    /// Type a player to search, `:update` to refresh the loaded player,
    /// `:json` to dump the current snapshot, `:quit` to leave.
    Interactive,
}
