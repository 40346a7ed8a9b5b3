//! parlor CLI - terminal parlor games with persistent match history
//!
//! This CLI provides a unified interface for:
//! - Playing Othello and Gomoku interactively, hot-seat style
//! - Browsing, deleting, and clearing the finished-game history
//! - Exporting game records as CSV

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(version, about = "Terminal parlor games with match history", long_about = None)]
struct Cli {
    /// Directory where game histories are stored
    #[arg(long, global = true, default_value = "parlor-data", value_name = "DIR")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively
    Play(parlor::cli::commands::play::PlayArgs),

    /// Show or manage the finished-game history
    History(parlor::cli::commands::history::HistoryArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => parlor::cli::commands::play::execute(args, &cli.data_dir),
        Commands::History(args) => parlor::cli::commands::history::execute(args, &cli.data_dir),
    }
}
