//! Fetch-and-save command: the whole run from first request to written CSVs.

use std::{path::PathBuf, time::Duration};

use tracing::info;

use crate::{
    cli::types::MaxId,
    core::{history_path, positions_path},
    fpl::{
        history::{fetch_all_player_histories, HistoryScan, ScanEnd},
        http::FplClient,
    },
    storage::{assemble_history, write_history, write_positions},
    Result,
};

use super::{resolve_base_url, resolve_data_dir};

/// Parameters for [`handle_fetch_history`].
#[derive(Debug, Clone)]
pub struct FetchHistoryParams {
    pub max_id: MaxId,
    pub data_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub delay: Duration,
    pub verbose: bool,
}

impl Default for FetchHistoryParams {
    fn default() -> Self {
        Self {
            max_id: MaxId::default(),
            data_dir: None,
            base_url: None,
            delay: Duration::ZERO,
            verbose: false,
        }
    }
}

/// What a run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchHistorySummary {
    pub positions_path: PathBuf,
    pub positions_rows: usize,
    pub history_path: PathBuf,
    pub history_rows: usize,
}

/// Status line for how the id scan ended.
fn scan_status(scan: &HistoryScan) -> String {
    match scan.end {
        ScanEnd::EndOfRange { .. } => format!(
            "Last player found at id = {}",
            scan.last_player().map_or(0, |id| id.as_u32())
        ),
        ScanEnd::Exhausted { max_id } => format!(
            "Warning: last player_id not reached with max id {}, try a higher --max-id",
            max_id
        ),
    }
}

/// Fetch histories and the snapshot, player info and positions, join them,
/// and write `positions.csv` and `fpl_history.csv`.
pub async fn handle_fetch_history(params: FetchHistoryParams) -> Result<FetchHistorySummary> {
    let client = FplClient::with_base_url(resolve_base_url(params.base_url))?;
    let data_dir = resolve_data_dir(params.data_dir);

    println!(
        "Fetching player histories for ids 1..={} from {}...",
        params.max_id,
        client.base_url()
    );
    let scan = fetch_all_player_histories(&client, params.max_id, params.delay).await?;
    println!("{}", scan_status(&scan));

    info!("Fetching player info and positions");
    let players = client.fetch_player_info().await?;
    let positions = client.fetch_positions().await?;

    let history = assemble_history(scan.records, players, positions.clone());

    let positions_path = positions_path(&data_dir);
    let history_path = history_path(&data_dir);
    let positions_rows = write_positions(&positions_path, &positions)?;
    let history_rows = write_history(&history_path, &history)?;

    println!("✓ History saved to {}", data_dir.display());

    if params.verbose {
        println!("{} positions -> {}", positions_rows, positions_path.display());
        println!("{} history rows -> {}", history_rows, history_path.display());
    }

    Ok(FetchHistorySummary {
        positions_path,
        positions_rows,
        history_path,
        history_rows,
    })
}
