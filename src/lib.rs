//! # garden-sort
//!
//! A drag-and-drop categorization game engine for classroom sorting games.
//!
//! ## Design Principles
//!
//! 1. **Catalog-Driven**: No hardcoded categories or items. Catalogs declare
//!    their bins and items at startup.
//!
//! 2. **Race-Tolerant**: Pointer and touch input can deliver overlapping
//!    gestures. Every malformed or stale gesture is a no-op, never a
//!    partial update.
//!
//! 3. **Snapshot Rendering**: Renderers read an immutable `GameState` after
//!    every gesture. Persistent `im` collections make snapshots cheap.
//!
//! ## Modules
//!
//! - `core`: IDs, locations, moves, state, RNG, configuration, errors
//! - `catalog`: Item definitions and the catalog registry
//! - `locations`: Item location tracking
//! - `rules`: Scoring policies and move feedback
//! - `engine`: The categorization engine
//! - `games`: Built-in catalogs (vegetables)

pub mod core;
pub mod catalog;
pub mod locations;
pub mod rules;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ItemId, CategoryId, CategoryDef, GameConfig,
    Location, PendingMove, MoveRecord,
    GameRng, MoveRejection, CatalogError,
    GameState, SessionPhase,
};

pub use crate::catalog::{Catalog, Item};

pub use crate::locations::LocationTracker;

pub use crate::rules::{Feedback, FeedbackKind, PenaltyScoring, RelocationScoring, ScoringPolicy};

pub use crate::engine::CategorizationEngine;
