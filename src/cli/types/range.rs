//! Bound on the requested player id range.

use crate::error::{FplError, Result};
use crate::PlayerId;
use std::fmt;
use std::str::FromStr;

/// Upper bound (inclusive) of the player ids requested by the history fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxId(u32);

impl MaxId {
    pub const DEFAULT: u32 = 490;

    /// Create a bound; zero would request nothing and is rejected.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(FplError::InvalidMaxId { value });
        }
        Ok(Self(value))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Ids `1..=max` in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        (1..=self.0).map(PlayerId::new)
    }
}

impl Default for MaxId {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for MaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.parse()?)
    }
}
