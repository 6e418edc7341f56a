//! Item identification.
//!
//! Every catalog entry has a unique `ItemId`. IDs are assigned when the
//! catalog is authored and stay stable for the whole session, across
//! restarts.
//!
//! ## Usage
//!
//! ```
//! use garden_sort::core::ItemId;
//!
//! let carrot = ItemId::new(1);
//! assert_eq!(carrot.raw(), 1);
//! assert_eq!(carrot.to_string(), "Item(1)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
