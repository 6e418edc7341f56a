//! Scoring policies.
//!
//! A policy assigns a value to every location an item can occupy; the
//! score change of a move is the value of the destination minus the value
//! of the origin. Scores are therefore path-independent: the running score
//! always equals the sum of the current placement values.

use crate::catalog::Item;
use crate::core::{CategoryId, Location};

/// Scoring policy trait.
///
/// The engine asks the policy for the score change of every applied move.
/// Implementations must be pure: the same inputs give the same delta.
pub trait ScoringPolicy {
    /// Value of `item` sitting at `location`.
    fn placement_value(&self, item: &Item, location: Location) -> i64;

    /// Score change for moving `item` from `from` into bin `to`.
    fn score_delta(&self, item: &Item, from: Location, to: CategoryId) -> i64 {
        self.placement_value(item, Location::Bin(to)) - self.placement_value(item, from)
    }
}

impl<S: ScoringPolicy + ?Sized> ScoringPolicy for Box<S> {
    fn placement_value(&self, item: &Item, location: Location) -> i64 {
        (**self).placement_value(item, location)
    }

    fn score_delta(&self, item: &Item, from: Location, to: CategoryId) -> i64 {
        (**self).score_delta(item, from, to)
    }
}

/// Default scoring: one point per item in its true bin.
///
/// - unplaced → correct bin: +1
/// - unplaced → wrong bin: 0 (no penalty for a first placement)
/// - wrong bin → correct bin: +1
/// - correct bin → wrong bin: -1
/// - wrong bin → another wrong bin: 0
///
/// The score always equals the number of correctly placed items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelocationScoring;

impl ScoringPolicy for RelocationScoring {
    fn placement_value(&self, item: &Item, location: Location) -> i64 {
        match location {
            Location::Bin(category) if item.belongs_in(category) => 1,
            _ => 0,
        }
    }
}

/// Strict scoring: every item in a wrong bin costs `miss_penalty`.
///
/// The score equals `correct - miss_penalty * wrong` and may go negative.
/// With a penalty of 0 this is the same as `RelocationScoring`. The penalty
/// is unsigned, so a miss can never be worth more than an unplaced item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenaltyScoring {
    pub miss_penalty: u32,
}

impl PenaltyScoring {
    #[must_use]
    pub fn new(miss_penalty: u32) -> Self {
        Self { miss_penalty }
    }
}

impl Default for PenaltyScoring {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ScoringPolicy for PenaltyScoring {
    fn placement_value(&self, item: &Item, location: Location) -> i64 {
        match location {
            Location::Unplaced => 0,
            Location::Bin(category) if item.belongs_in(category) => 1,
            Location::Bin(_) => -i64::from(self.miss_penalty),
        }
    }
}
