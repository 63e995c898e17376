//! Chess opening statistics console.
//!
//! Loads a tab-separated openings dataset, carves it down with
//! user-set boundaries, and answers distribution, ranking, and lookup
//! queries interactively.

mod config;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use opening_core::{ingest, Bounds, MoveSequence};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "opening-stats", about = "Chess opening statistics explorer")]
struct Args {
    /// Dataset file (tab-separated); overrides OPENING_STATS_DATA
    #[arg(long)]
    data: Option<PathBuf>,

    /// Only consider openings with at least this many recorded games
    #[arg(long)]
    min_games: Option<u64>,

    /// Only consider openings at most this many moves deep
    #[arg(long)]
    max_moves: Option<usize>,

    /// Only consider openings starting with these moves, e.g. "1 e4"
    #[arg(long)]
    root: Option<String>,

    /// Ranking table size; overrides OPENING_STATS_TOP
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so the prompts stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let bounds = initial_bounds(args.min_games, args.max_moves, args.root.as_deref())?;
    let data_path = args.data.unwrap_or(config.data_path);
    let top_n = args.top.unwrap_or(config.top_n);

    tracing::info!("loading dataset from {}", data_path.display());
    let dataset = ingest::load_dataset(&data_path)
        .with_context(|| format!("loading dataset from {}", data_path.display()))?;

    session::run(&dataset, bounds, top_n);
    Ok(())
}

/// Boundaries seeded from the command line; absent flags stay open.
fn initial_bounds(
    min_games: Option<u64>,
    max_moves: Option<usize>,
    root: Option<&str>,
) -> anyhow::Result<Bounds> {
    let root_prefix = match root {
        Some(text) => text
            .parse::<MoveSequence>()
            .with_context(|| format!("--root {text:?} is not a move sequence"))?,
        None => MoveSequence::default(),
    };
    Ok(Bounds {
        min_games: min_games.unwrap_or(0),
        max_moves: max_moves.unwrap_or(usize::MAX),
        root_prefix,
        ..Bounds::default()
    })
}
