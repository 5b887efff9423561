//! Type-safe wrappers for Fantasy Premier League identifiers and bounds.

pub mod ids;
pub mod range;

pub use ids::{ElementCode, PlayerId, PositionId};
pub use range::MaxId;
