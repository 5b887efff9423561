//! Fantasy Premier League API access: client, wire types, history probing.

pub mod history;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;
