//! Core utilities for the FPL history fetcher
//!
//! - `join`: full outer join over in-memory rows
//! - `paths`: output file locations

pub mod join;
pub mod paths;

pub use join::{outer_join, Joined};
pub use paths::{default_data_dir, history_path, positions_path};
