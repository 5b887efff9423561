//! Error types for the FPL history fetcher

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Failed to build endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid max id {value}: must be at least 1")]
    InvalidMaxId { value: u32 },

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}
