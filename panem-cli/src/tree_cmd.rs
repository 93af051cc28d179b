//! Tree command - show the district tree after districts enter the game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: enter_districts(), report_tree()
//! - Level 4: rendering utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use panem_core::{DistrictId, GameConfig, HungerGames, TreeNode};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct TreeArgs {
    /// Input file with districts and people
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Districts to enter, in order (all waiting districts when omitted)
    #[arg(long = "enter", value_name = "ID")]
    pub enter: Vec<DistrictId>,

    /// Output the tree as JSON
    #[arg(long)]
    pub json: bool,
}

/// Serializable view of a tree node
#[derive(Serialize)]
struct NodeView {
    district_id: DistrictId,
    odd: usize,
    even: usize,
    left: Option<Box<NodeView>>,
    right: Option<Box<NodeView>>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tree command
pub fn run(args: TreeArgs, seed: u64) -> Result<()> {
    let mut games = HungerGames::setup_panem(&args.input, GameConfig::default().with_seed(seed))
        .with_context(|| format!("Failed to load input file: {}", args.input.display()))?;

    enter_districts(&mut games, &args.enter);
    report_tree(&games, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn enter_districts(games: &mut HungerGames, ids: &[DistrictId]) {
    if ids.is_empty() {
        games.enter_all();
        return;
    }
    for &id in ids {
        if !games.add_district(id) {
            tracing::warn!("District {} could not enter the game", id);
        }
    }
}

fn report_tree(games: &HungerGames, json: bool) -> Result<()> {
    if json {
        let view = games.root().map(node_view);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let tree = games.tree();
    println!("Districts in game: {} (height {})", tree.len(), tree.height());
    match games.root() {
        Some(root) => print_node(root, "", "", ""),
        None => println!("(empty)"),
    }

    let waiting: Vec<String> = games
        .districts()
        .iter()
        .map(|d| d.district_id().to_string())
        .collect();
    if !waiting.is_empty() {
        println!("Waiting: {}", waiting.join(", "));
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn node_view(node: &TreeNode) -> NodeView {
    let district = node.district();
    NodeView {
        district_id: district.district_id(),
        odd: district.odd_population().len(),
        even: district.even_population().len(),
        left: node.left().map(|n| Box::new(node_view(n))),
        right: node.right().map(|n| Box::new(node_view(n))),
    }
}

fn print_node(node: &TreeNode, label: &str, prefix: &str, child_prefix: &str) {
    let district = node.district();
    println!(
        "{}{}District {} (odd {}, even {})",
        prefix,
        label,
        district.district_id(),
        district.odd_population().len(),
        district.even_population().len()
    );

    let children: Vec<(&str, &TreeNode)> = [("L: ", node.left()), ("R: ", node.right())]
        .into_iter()
        .filter_map(|(label, child)| child.map(|c| (label, c)))
        .collect();
    for (i, (label, child)) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, extend) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        print_node(
            child,
            label,
            &format!("{}{}", child_prefix, branch),
            &format!("{}{}", child_prefix, extend),
        );
    }
}
