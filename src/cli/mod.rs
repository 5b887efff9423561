//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::MaxId;

/// Fetch Fantasy Premier League player histories and save them as CSV.
///
/// Running with no arguments requests player ids 1..=490, appends the
/// current-season snapshot, joins player identity and positions, and writes
/// `positions.csv` and `fpl_history.csv` into the data directory.
#[derive(Debug, Parser)]
#[clap(name = "fpl-history", about = "Fantasy Premier League history fetcher")]
pub struct FPL {
    /// Highest player id to request (inclusive).
    #[clap(long, short, default_value_t = MaxId::default())]
    pub max_id: MaxId,

    /// Output directory (or set `FPL_DATA_DIR` env var).
    #[clap(long, short)]
    pub data_dir: Option<PathBuf>,

    /// API base URL (or set `FPL_API_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Pause between per-player requests, in milliseconds (0 disables it).
    #[clap(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Log every request URL.
    #[clap(long)]
    pub debug: bool,

    /// Print row counts and output paths when done.
    #[clap(long)]
    pub verbose: bool,
}
