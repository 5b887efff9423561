//! Entry point: parse CLI, install logging, run the fetch.

use std::time::Duration;

use clap::Parser;
use fpl_history::{
    cli::FPL,
    commands::fetch_history::{handle_fetch_history, FetchHistoryParams},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FPL::parse();

    // RUST_LOG wins over --debug
    let default_directive = if app.debug {
        "fpl_history=debug,info"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    handle_fetch_history(FetchHistoryParams {
        max_id: app.max_id,
        data_dir: app.data_dir,
        base_url: app.base_url,
        delay: Duration::from_millis(app.delay_ms),
        verbose: app.verbose,
    })
    .await?;

    Ok(())
}
