//! Panem CLI - Command-line interface
//!
//! Commands:
//! - play: Run a full game from an input file
//! - tree: Show the district tree after districts enter the game

mod play_cmd;
mod tree_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panem")]
#[command(about = "District tree elimination games")]
struct Cli {
    /// Random seed for dueler selection and duels
    #[arg(long, global = true, default_value_t = panem_core::DEFAULT_SEED)]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game until one district remains
    Play(play_cmd::PlayArgs),
    /// Print the district tree
    Tree(tree_cmd::TreeArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Tree(args) => tree_cmd::run(args, cli.seed),
    }
}
