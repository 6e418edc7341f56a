//! Location system for item placement.
//!
//! Bins are **catalog-declared**, not hardcoded. The tracker is built from
//! the catalog's category list and then follows each item between the
//! unplaced pool and the bins.
//!
//! ## Key Types
//!
//! - `Location`: Unplaced or a specific bin (from `core`)
//! - `LocationTracker`: Item location tracking and movement

pub mod tracker;

pub use tracker::LocationTracker;

// Re-export location types from core for convenience
pub use crate::core::Location;
