//! Play command - run a full game from an input file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_game(), report_results()
//! - Level 3: (delegated to panem-core)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use panem_core::{GameConfig, GameSummary, HungerGames};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Input file with districts and people
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Stop after this many duels
    #[arg(long)]
    pub max_rounds: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load the waiting list
/// 2. Enter every district and play to the end
/// 3. Report results
pub fn run(args: PlayArgs, seed: u64) -> Result<()> {
    let mut games = load_game(&args, seed)?;

    tracing::info!(
        "Starting game: {} districts, seed={}",
        games.districts().len(),
        seed
    );

    games.enter_all();
    let summary = games.play();

    report_results(&summary, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_game(args: &PlayArgs, seed: u64) -> Result<HungerGames> {
    let mut config = GameConfig::default().with_seed(seed);
    if let Some(max_rounds) = args.max_rounds {
        config = config.with_max_rounds(max_rounds);
    }
    HungerGames::setup_panem(&args.input, config)
        .with_context(|| format!("Failed to load input file: {}", args.input.display()))
}

fn report_results(summary: &GameSummary, args: &PlayArgs) -> Result<()> {
    if args.json {
        println!("{}", summary.to_json_pretty()?);
    } else {
        print_text_results(summary);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_text_results(summary: &GameSummary) {
    println!("\n=== Game Results ===");
    println!("Duels fought:   {}", summary.rounds);
    println!("Eliminated:     {}", join_ids(&summary.eliminated));
    println!("Survivors:      {}", join_ids(&summary.survivors));
    println!("Competitors:    {}", summary.remaining_competitors);
    match summary.winner() {
        Some(id) => println!("Winner:         District {}", id),
        None if summary.capped => println!("Winner:         (round cap reached)"),
        None => println!("Winner:         none"),
    }
}

fn join_ids(ids: &[panem_core::DistrictId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
