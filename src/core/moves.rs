//! Move representation: the in-flight pick-up and the applied-move record.
//!
//! A move is split across two gestures:
//! - pick-up (`begin_move`) records a `PendingMove`
//! - drop (`complete_move`) resolves it against a destination bin
//!
//! Every move that actually relocates an item is appended to the session
//! history as a `MoveRecord`.

use serde::{Deserialize, Serialize};

use super::config::CategoryId;
use super::item::ItemId;
use super::location::Location;

/// An item that has been picked up but not yet dropped.
///
/// ## Example
///
/// ```
/// use garden_sort::core::{CategoryId, ItemId, Location, PendingMove};
///
/// // Picked up from the unplaced pool
/// let fresh = PendingMove::new(ItemId(1), None);
/// assert_eq!(fresh.origin(), Location::Unplaced);
///
/// // Picked up from the "fruit" bin
/// let moved = PendingMove::new(ItemId(1), Some(CategoryId(1)));
/// assert_eq!(moved.origin(), Location::Bin(CategoryId(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    /// The item being carried.
    pub item: ItemId,

    /// Bin of origin. `None` when picked up from the unplaced pool.
    pub from: Option<CategoryId>,
}

impl PendingMove {
    #[must_use]
    pub fn new(item: ItemId, from: Option<CategoryId>) -> Self {
        Self { item, from }
    }

    /// Location the gesture claims the item was picked up from.
    #[must_use]
    pub fn origin(&self) -> Location {
        Location::from_origin(self.from)
    }
}

/// A move that was applied to the session.
///
/// Used for:
/// - Replay/debugging
/// - Rendering a move log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Sequence number within the session (starts at 0 after each start).
    pub sequence: u32,

    /// The item that moved.
    pub item: ItemId,

    /// Where it came from.
    pub from: Location,

    /// The bin it landed in.
    pub to: CategoryId,

    /// Score change caused by this move.
    pub score_delta: i64,
}

impl MoveRecord {
    #[must_use]
    pub fn new(sequence: u32, item: ItemId, from: Location, to: CategoryId, score_delta: i64) -> Self {
        Self {
            sequence,
            item,
            from,
            to,
            score_delta,
        }
    }

    /// Whether this move relocated an already placed item.
    #[must_use]
    pub fn is_relocation(&self) -> bool {
        !self.from.is_unplaced()
    }
}
