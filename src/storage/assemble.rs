//! Join stats, player identity and positions into the history table.

use tracing::debug;

use crate::{
    core::outer_join,
    fpl::types::{PlayerInfoRecord, PositionRecord, SeasonStats},
    storage::models::HistoryRow,
};

/// Build the `fpl_history.csv` rows.
///
/// Stats are outer-joined to player info on `element_code` = `player_id`,
/// then to positions on `position_id` = `id`, and projected onto
/// [`HistoryRow`]. Rows unmatched on either side are kept with the other
/// side's columns empty.
pub fn assemble_history(
    stats: Vec<SeasonStats>,
    players: Vec<PlayerInfoRecord>,
    positions: Vec<PositionRecord>,
) -> Vec<HistoryRow> {
    let with_players = outer_join(
        stats,
        players,
        |s: &SeasonStats| s.element_code,
        |p: &PlayerInfoRecord| Some(p.player_id),
    );
    let with_positions = outer_join(
        with_players,
        positions,
        |j| j.right.as_ref().map(|p| p.position_id),
        |pos: &PositionRecord| Some(pos.id),
    );
    debug!("joined table has {} rows", with_positions.len());

    with_positions
        .into_iter()
        .map(|row| {
            let (stats, player) = row
                .left
                .map_or((None, None), |inner| (inner.left, inner.right));
            project(stats.as_ref(), player.as_ref(), row.right.as_ref())
        })
        .collect()
}

/// Pick the output columns from one joined row.
pub fn project(
    stats: Option<&SeasonStats>,
    player: Option<&PlayerInfoRecord>,
    position: Option<&PositionRecord>,
) -> HistoryRow {
    let stat = |f: fn(&SeasonStats) -> Option<i64>| stats.and_then(f);

    HistoryRow {
        player_id: player.map(|p| p.player_id),
        full_name: player.map(|p| p.full_name.clone()),
        team_id: player.map(|p| p.team_id),
        position: position.map(|p| p.singular_name.clone()),
        start_cost: stat(|s| s.start_cost),
        end_cost: stat(|s| s.end_cost),
        now_cost: player.map(|p| p.now_cost),
        total_points: stat(|s| s.total_points),
        season_name: stats.and_then(|s| s.season_name.clone()),
        minutes: stat(|s| s.minutes),
        bonus: stat(|s| s.bonus),
        bonus_points: stat(|s| s.bps),
        goals_scored: stat(|s| s.goals_scored),
        assists: stat(|s| s.assists),
        selected_by: player.map(|p| p.selected_by.clone()),
        goals_conceded: stat(|s| s.goals_conceded),
        clean_sheets: stat(|s| s.clean_sheets),
        yellow_cards: stat(|s| s.yellow_cards),
        red_cards: stat(|s| s.red_cards),
        penalties_missed: stat(|s| s.penalties_missed),
        saves: stat(|s| s.saves),
        penalties_saved: stat(|s| s.penalties_saved),
    }
}
