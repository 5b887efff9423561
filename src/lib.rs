//! Fantasy Premier League history fetcher
//!
//! Pulls every player's past seasons from the public FPL API, appends the
//! current-season snapshot, joins player identity and positions, and saves
//! the result as flat CSV files for analysis.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_history::commands::fetch_history::*;
//!
//! # async fn example() -> fpl_history::Result<()> {
//! let summary = handle_fetch_history(FetchHistoryParams::default()).await?;
//! println!("{} rows", summary.history_rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_DATA_DIR=./data
//! export FPL_API_BASE_URL=https://fantasy.premierleague.com/api
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ElementCode, MaxId, PlayerId, PositionId};
pub use error::{FplError, Result};
pub use fpl::types::{PlayerInfoRecord, PositionRecord, SeasonStats};

pub const DATA_DIR_ENV_VAR: &str = "FPL_DATA_DIR";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
