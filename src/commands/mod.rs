//! Command implementations for the FPL history fetcher

pub mod fetch_history;

use std::path::PathBuf;

use crate::{
    core::default_data_dir, fpl::http::FPL_BASE_URL, BASE_URL_ENV_VAR, DATA_DIR_ENV_VAR,
};

/// Output directory from the flag, else `FPL_DATA_DIR`, else the platform default.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| {
            std::env::var_os(DATA_DIR_ENV_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_data_dir)
}

/// API base URL from the flag, else `FPL_API_BASE_URL`, else the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| FPL_BASE_URL.to_string())
}
