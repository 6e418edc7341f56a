//! Rules for scoring and feedback.
//!
//! Games pick a `ScoringPolicy` to decide how moves change the score:
//! - `RelocationScoring`: one point per correctly placed item (default)
//! - `PenaltyScoring`: wrong placements cost points
//!
//! The engine calls into the policy but never interprets correctness
//! beyond asking it for deltas.

pub mod feedback;
pub mod scoring;

pub use feedback::{feedback_for, Feedback, FeedbackKind};
pub use scoring::{PenaltyScoring, RelocationScoring, ScoringPolicy};
