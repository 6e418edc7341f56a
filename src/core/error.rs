//! Error taxonomy.
//!
//! `MoveRejection` covers gestures that cannot be applied. The engine
//! recovers from every one of them locally (the move becomes a no-op);
//! they exist so the reason can be logged and unit-tested.
//!
//! `CatalogError` covers malformed catalogs and is returned to the caller.

use super::config::CategoryId;
use super::item::ItemId;
use super::location::Location;

/// Reason a gesture was ignored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// The pick-up claims a location the item is not in.
    #[error("{item} is not at {claimed} (actually {actual:?})")]
    InvalidMoveOrigin {
        item: ItemId,
        claimed: Location,
        actual: Option<Location>,
    },

    /// A drop arrived without a prior pick-up.
    #[error("no move in flight")]
    NoPendingMove,

    /// The item was relocated by another gesture before this one resolved.
    #[error("{item} was moved to {actual} before the drop resolved")]
    StaleMove { item: ItemId, actual: Location },

    /// Dropped back into the bin it was picked up from.
    #[error("{0} dropped back into its origin bin")]
    SameBin(ItemId),

    /// The drop target is not a declared category.
    #[error("{0} is not a declared category")]
    UnknownCategory(CategoryId),
}

/// Errors raised while assembling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("item {0} is declared twice")]
    DuplicateItem(ItemId),

    #[error("category {id} ({name}) is declared twice")]
    DuplicateCategory { id: CategoryId, name: String },

    #[error("item {item} refers to undeclared {category}")]
    UnknownCategory { item: ItemId, category: CategoryId },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}
