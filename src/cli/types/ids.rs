//! ID types for Fantasy Premier League data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential id used to address the `element-summary/{id}/` endpoint.
///
/// This is the per-season element id, not the stable player code. Valid ids
/// are contiguous starting at 1.
///
/// # Examples
///
/// ```rust
/// use fpl_history::PlayerId;
///
/// let id = PlayerId::new(42);
/// assert_eq!(id.as_u32(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The id requested before this one; `None` for the first id.
    pub fn previous(&self) -> Option<Self> {
        self.0.checked_sub(1).filter(|id| *id > 0).map(Self)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable player code shared across seasons.
///
/// Appears as `element_code` in history rows and as `code` on bootstrap
/// elements; it is the key that ties past seasons to current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementCode(pub u32);

/// Position id from `element_types` (1 = goalkeeper ... 4 = forward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u8);
