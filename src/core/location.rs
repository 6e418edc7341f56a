//! Where an item currently sits.

use serde::{Deserialize, Serialize};

use super::config::CategoryId;

/// Location of an item: the unplaced pool or exactly one category bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Not yet assigned to any bin.
    Unplaced,
    /// Placed in the given bin.
    Bin(CategoryId),
}

impl Location {
    /// Location named by a gesture origin: `None` means the unplaced pool.
    #[must_use]
    pub fn from_origin(from: Option<CategoryId>) -> Self {
        from.map_or(Location::Unplaced, Location::Bin)
    }

    /// The bin, if this is one.
    #[must_use]
    pub fn bin(self) -> Option<CategoryId> {
        match self {
            Location::Unplaced => None,
            Location::Bin(category) => Some(category),
        }
    }

    #[must_use]
    pub fn is_unplaced(self) -> bool {
        matches!(self, Location::Unplaced)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Unplaced => write!(f, "unplaced"),
            Location::Bin(category) => write!(f, "bin {}", category),
        }
    }
}
