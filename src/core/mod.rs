//! Core engine types: identifiers, locations, moves, state, RNG, configuration.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games configure these via their catalog and `GameConfig` rather than
//! modifying the core.

pub mod item;
pub mod config;
pub mod location;
pub mod moves;
pub mod rng;
pub mod error;
pub mod state;

pub use item::ItemId;
pub use config::{CategoryId, CategoryDef, GameConfig};
pub use location::Location;
pub use moves::{PendingMove, MoveRecord};
pub use rng::GameRng;
pub use error::{MoveRejection, CatalogError};
pub use state::{GameState, SessionPhase};
