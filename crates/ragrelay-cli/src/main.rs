//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging and hands the resulting
//! config to the axum composition root.

use clap::Parser;

use ragrelay_axum::{start_inference_server, start_rag_server};
use ragrelay_cli::{Cli, Commands, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    tracing::debug!(command = ?cli.command, "Starting ragrelay");

    match cli.command {
        Commands::Inference(args) => start_inference_server(args.into()).await,
        Commands::Rag(args) => start_rag_server(args.into()).await,
    }
}
