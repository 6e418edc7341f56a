//! Game state: the session snapshot handed to rendering layers.
//!
//! ## GameState
//!
//! Everything a renderer needs after each gesture:
//! - Item locations (unplaced pool and bin contents, in order)
//! - Score
//! - The in-flight pick-up, if any
//! - Last feedback and the applied-move history
//!
//! The engine is the only writer. Snapshots are cheap clones thanks to the
//! `im` persistent collections inside `LocationTracker` and `history`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::CategoryId;
use super::item::ItemId;
use super::location::Location;
use super::moves::{MoveRecord, PendingMove};
use crate::catalog::Catalog;
use crate::locations::LocationTracker;
use crate::rules::Feedback;

/// Session progress, derived from the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// `start()` has not been called yet.
    NotStarted,
    /// Some items are still unplaced.
    InProgress,
    /// Every item sits in a bin.
    Complete,
}

/// Session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    started: bool,

    /// Item locations.
    locations: LocationTracker,

    /// Score accumulator. No floor or ceiling.
    score: i64,

    /// The item currently picked up, if any.
    pending_move: Option<PendingMove>,

    /// Feedback from the most recent applied move.
    last_feedback: Option<Feedback>,

    /// Applied moves since the last start.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create an empty, not-yet-started state with the given bins.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = CategoryId>) -> Self {
        Self {
            started: false,
            locations: LocationTracker::new(categories),
            score: 0,
            pending_move: None,
            last_feedback: None,
            history: Vector::new(),
        }
    }

    /// Fresh started state: everything unplaced, empty bins, zero score.
    #[must_use]
    pub(crate) fn started_with(
        categories: impl IntoIterator<Item = CategoryId>,
        items: impl IntoIterator<Item = ItemId>,
    ) -> Self {
        let mut state = Self::new(categories);
        state.locations.reset(items);
        state.started = true;
        state
    }

    // === Reads ===

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn pending_move(&self) -> Option<PendingMove> {
        self.pending_move
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Underlying location tracker.
    #[must_use]
    pub fn locations(&self) -> &LocationTracker {
        &self.locations
    }

    /// Unplaced items in dealing order.
    #[must_use]
    pub fn unplaced(&self) -> &Vector<ItemId> {
        self.locations.unplaced()
    }

    /// Contents of a bin, or `None` for an undeclared category.
    #[must_use]
    pub fn bin(&self, category: CategoryId) -> Option<&Vector<ItemId>> {
        self.locations.bin(category)
    }

    /// All bins in category order.
    pub fn bins(&self) -> impl Iterator<Item = (CategoryId, &Vector<ItemId>)> {
        self.locations.bins()
    }

    #[must_use]
    pub fn location(&self, item: ItemId) -> Option<Location> {
        self.locations.location(item)
    }

    /// Number of unplaced items ("Remaining" in the UI).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.locations.remaining()
    }

    #[must_use]
    pub fn placed(&self) -> usize {
        self.locations.placed()
    }

    /// Best achievable score under the default scoring: one per item.
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.locations.total()
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::NotStarted
        } else if self.remaining() == 0 {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        }
    }

    /// Whether an item sits in a bin that is not its true category.
    ///
    /// Unplaced and unknown items are never misplaced.
    #[must_use]
    pub fn is_misplaced(&self, item: ItemId, catalog: &Catalog) -> bool {
        match (self.location(item), catalog.item(item)) {
            (Some(Location::Bin(category)), Some(def)) => !def.belongs_in(category),
            _ => false,
        }
    }

    /// Number of items sitting in their true bin.
    #[must_use]
    pub fn correct_count(&self, catalog: &Catalog) -> usize {
        self.bins()
            .map(|(category, contents)| {
                contents
                    .iter()
                    .filter(|&&id| catalog.item(id).is_some_and(|def| def.belongs_in(category)))
                    .count()
            })
            .sum()
    }

    // === Writes (engine only) ===

    pub(crate) fn set_pending(&mut self, pending: Option<PendingMove>) {
        self.pending_move = pending;
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingMove> {
        self.pending_move.take()
    }

    pub(crate) fn locations_mut(&mut self) -> &mut LocationTracker {
        &mut self.locations
    }

    /// Record an applied move: adjust the score, log it, store feedback.
    ///
    /// Locations must already have been updated by the caller.
    pub(crate) fn record_move(
        &mut self,
        item: ItemId,
        from: Location,
        to: CategoryId,
        score_delta: i64,
        feedback: Option<Feedback>,
    ) -> MoveRecord {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        let record = MoveRecord::new(sequence, item, from, to, score_delta);
        self.score += score_delta;
        self.history.push_back(record.clone());
        self.last_feedback = feedback;
        record
    }
}
