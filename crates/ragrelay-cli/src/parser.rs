//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the ragrelay services.
#[derive(Debug, Parser)]
#[command(name = "ragrelay")]
#[command(about = "Run the ragrelay inference or RAG service")]
#[command(version)]
pub struct Cli {
    /// Log filter, e.g. `info` or `ragrelay_axum=debug,info`
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}
