//! Row shapes written to CSV

use crate::cli::types::ElementCode;
use crate::fpl::types::PositionRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row type with a fixed, ordered header.
///
/// The header is written even when there are no rows, and must list the
/// serialized field names in declaration order.
pub trait CsvTable: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Columns picked from the joined table, by their pre-rename names.
pub const SELECTED_COLUMNS: [&str; 22] = [
    "player_id",
    "full_name",
    "team_id",
    "singular_name",
    "start_cost",
    "end_cost",
    "now_cost",
    "total_points",
    "season_name",
    "minutes",
    "bonus",
    "bps",
    "goals_scored",
    "assists",
    "selected_by",
    "goals_conceded",
    "clean_sheets",
    "yellow_cards",
    "red_cards",
    "penalties_missed",
    "saves",
    "penalties_saved",
];

/// Renames applied after projection.
pub const COLUMN_RENAMES: [(&str, &str); 2] =
    [("singular_name", "position"), ("bps", "bonus_points")];

/// `SELECTED_COLUMNS` with `COLUMN_RENAMES` applied.
pub fn output_columns() -> Vec<&'static str> {
    SELECTED_COLUMNS
        .iter()
        .map(|column| {
            COLUMN_RENAMES
                .iter()
                .find(|(from, _)| from == column)
                .map_or(*column, |(_, to)| *to)
        })
        .collect()
}

/// One row of `fpl_history.csv`.
///
/// Every cell is optional: the outer joins leave the side without a match
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub player_id: Option<ElementCode>,
    pub full_name: Option<String>,
    pub team_id: Option<u32>,
    pub position: Option<String>,
    pub start_cost: Option<i64>,
    pub end_cost: Option<i64>,
    pub now_cost: Option<i64>,
    pub total_points: Option<i64>,
    pub season_name: Option<String>,
    pub minutes: Option<i64>,
    pub bonus: Option<i64>,
    pub bonus_points: Option<i64>,
    pub goals_scored: Option<i64>,
    pub assists: Option<i64>,
    pub selected_by: Option<String>,
    pub goals_conceded: Option<i64>,
    pub clean_sheets: Option<i64>,
    pub yellow_cards: Option<i64>,
    pub red_cards: Option<i64>,
    pub penalties_missed: Option<i64>,
    pub saves: Option<i64>,
    pub penalties_saved: Option<i64>,
}

impl CsvTable for HistoryRow {
    const HEADERS: &'static [&'static str] = &[
        "player_id",
        "full_name",
        "team_id",
        "position",
        "start_cost",
        "end_cost",
        "now_cost",
        "total_points",
        "season_name",
        "minutes",
        "bonus",
        "bonus_points",
        "goals_scored",
        "assists",
        "selected_by",
        "goals_conceded",
        "clean_sheets",
        "yellow_cards",
        "red_cards",
        "penalties_missed",
        "saves",
        "penalties_saved",
    ];
}

/// Header of `positions.csv`: every key seen across the entries, in order of
/// first appearance.
pub fn position_columns(positions: &[PositionRecord]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for key in positions.iter().flat_map(|p| p.fields.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }
    columns
}

/// Render one `element_types` value as a CSV cell.
///
/// Strings are written as-is, null as an empty cell, and everything else
/// (numbers, booleans, lists such as `sub_positions_locked`) as JSON text.
pub fn position_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Inverse of [`position_cell`]: empty is null, JSON text other than a
/// quoted string is parsed, anything else stays a string.
pub fn parse_position_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match serde_json::from_str::<Value>(cell) {
        Ok(value) if !value.is_string() => value,
        _ => Value::String(cell.to_string()),
    }
}
