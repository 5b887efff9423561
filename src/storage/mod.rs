//! Storage layer: turning fetched records into the two CSV outputs
//!
//! - `models`: output row shapes and the fixed column list
//! - `assemble`: outer joins and column projection
//! - `export`: CSV writing and reading

pub mod assemble;
pub mod export;
pub mod models;


pub use assemble::{assemble_history, project};
pub use export::{read_positions, read_table, write_history, write_positions, write_table};
pub use models::*;
