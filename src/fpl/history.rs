//! Player history collection across the requested id range.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    cli::types::{MaxId, PlayerId},
    fpl::{
        http::{FplClient, PlayerHistory},
        types::SeasonStats,
    },
    Result,
};


/// How the id scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEnd {
    /// `at` answered with a non-JSON body; no id after it was requested.
    EndOfRange { at: PlayerId },
    /// Every id up to the bound was requested without reaching the end marker.
    Exhausted { max_id: MaxId },
}

/// Records gathered by [`scan_player_histories`].
#[derive(Debug, Clone)]
pub struct HistoryScan {
    /// Past seasons in ascending player id order, followed by the
    /// current-season snapshot once [`fetch_all_player_histories`] ran.
    pub records: Vec<SeasonStats>,
    pub end: ScanEnd,
}

impl HistoryScan {
    /// Last id reached before the end marker, if the marker was hit.
    pub fn last_player(&self) -> Option<PlayerId> {
        match self.end {
            ScanEnd::EndOfRange { at } => at.previous(),
            ScanEnd::Exhausted { .. } => None,
        }
    }
}

/// Request `element-summary/{id}/` for ids `1..=max_id`, one at a time.
///
/// Non-success responses and empty `history_past` contribute nothing. The
/// first non-JSON body stops the loop: it marks the end of the valid ids.
/// `delay` is slept after each request; zero disables it.
pub async fn scan_player_histories(
    client: &FplClient,
    max_id: MaxId,
    delay: Duration,
) -> Result<HistoryScan> {
    let mut records = Vec::new();

    for player_id in max_id.ids() {
        match client.fetch_player_history(player_id).await? {
            PlayerHistory::Found(history) => {
                debug!("player {}: {} past seasons", player_id, history.len());
                records.extend(history);
            }
            PlayerHistory::Unavailable(status) => {
                debug!("player {}: skipped ({})", player_id, status);
            }
            PlayerHistory::Malformed(e) => {
                debug!("player {}: body is not JSON ({})", player_id, e);
                return Ok(HistoryScan {
                    records,
                    end: ScanEnd::EndOfRange { at: player_id },
                });
            }
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    warn!(
        "Last player_id not reached with max id {}. You ought to try again with a higher max id",
        max_id
    );
    Ok(HistoryScan {
        records,
        end: ScanEnd::Exhausted { max_id },
    })
}

/// All past seasons followed by the current-season snapshot.
///
/// The snapshot is appended once whichever way the scan ended; a fault
/// fetching it propagates.
pub async fn fetch_all_player_histories(
    client: &FplClient,
    max_id: MaxId,
    delay: Duration,
) -> Result<HistoryScan> {
    let mut scan = scan_player_histories(client, max_id, delay).await?;
    info!("Collected {} past-season rows", scan.records.len());

    let current = client.fetch_current_season().await?;
    info!("Appending {} current-season rows", current.len());
    scan.records.extend(current);

    Ok(scan)
}
