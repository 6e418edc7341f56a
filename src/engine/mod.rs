//! The categorization engine.
//!
//! `CategorizationEngine` owns the session state and applies pick-up, drop
//! and cancel gestures. Malformed or racing gestures are recovered locally
//! as no-ops; see `MoveRejection` for the reasons a gesture is ignored.

pub mod categorization;

pub use categorization::CategorizationEngine;
