//! CSV export of the assembled tables.
//!
//! Files are UTF-8, comma-delimited, with a header row and no index column.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    fpl::types::PositionRecord,
    storage::models::{parse_position_cell, position_cell, position_columns, CsvTable, HistoryRow},
    Result,
};

/// Write `rows` to `path` under `T::HEADERS`, creating parent directories.
///
/// Returns the number of data rows written.
pub fn write_table<T: CsvTable>(path: &Path, rows: &[T]) -> Result<usize> {
    let mut writer = create_writer(path)?;

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

/// Headerless writer on `path`; callers write their own header row.
fn create_writer(path: &Path) -> Result<csv::Writer<fs::File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?)
}

/// Read a table written by [`write_table`].
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize::<T>()
        .collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(rows)
}

/// Write the position table with one column per key the entries carry.
pub fn write_positions(path: &Path, positions: &[PositionRecord]) -> Result<usize> {
    let columns = position_columns(positions);
    let mut writer = create_writer(path)?;

    if !columns.is_empty() {
        writer.write_record(&columns)?;
    }
    for position in positions {
        writer.write_record(
            columns
                .iter()
                .map(|column| position_cell(position.fields.get(*column))),
        )?;
    }
    writer.flush()?;

    info!("Wrote {} positions to {}", positions.len(), path.display());
    Ok(positions.len())
}

/// Read `positions.csv` back; cells holding JSON text become JSON values again.
pub fn read_positions(path: &Path) -> Result<Vec<PositionRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut positions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.to_string(), parse_position_cell(cell)))
            .collect();
        positions.push(PositionRecord::from_fields(fields)?);
    }
    Ok(positions)
}

pub fn write_history(path: &Path, rows: &[HistoryRow]) -> Result<usize> {
    write_table(path, rows)
}
