//! Output locations for the CSV files.

use std::path::{Path, PathBuf};

pub const POSITIONS_FILE: &str = "positions.csv";
pub const HISTORY_FILE: &str = "fpl_history.csv";

/// Path: {data_local_dir}/fpl-history, or ./data when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|base| base.join("fpl-history"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

pub fn positions_path(data_dir: &Path) -> PathBuf {
    data_dir.join(POSITIONS_FILE)
}

pub fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join(HISTORY_FILE)
}
