//! Categorization game engine.
//!
//! The engine owns the authoritative `GameState` and applies gestures from
//! a rendering layer:
//! - `begin_move`: an item is picked up (drag start / touch start)
//! - `complete_move`: it is dropped on a bin (drop / touch end)
//! - `cancel_move`: the gesture was aborted
//!
//! Pointer and touch streams can deliver overlapping events for a single
//! physical motion. Every malformed or stale gesture is therefore ignored
//! rather than reported: the state is never partially updated, and a
//! second resolution of the same drop finds no pending move.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::core::{
    CategoryId, GameConfig, GameRng, GameState, ItemId, Location, MoveRecord, MoveRejection,
    PendingMove,
};
use crate::rules::{feedback_for, RelocationScoring, ScoringPolicy};

/// Authoritative engine for one sorting session.
///
/// ## Example
///
/// ```
/// use garden_sort::games::vegetables::{vegetable_catalog, VegetableCategory};
/// use garden_sort::core::{GameConfig, ItemId};
/// use garden_sort::engine::CategorizationEngine;
///
/// let mut engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());
/// engine.start();
///
/// // Drag the carrot into the root bin
/// engine.begin_move(ItemId(1), None);
/// engine.complete_move(VegetableCategory::Root.id());
///
/// let state = engine.current_state();
/// assert_eq!(state.score(), 1);
/// assert_eq!(state.remaining(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct CategorizationEngine<S = RelocationScoring> {
    catalog: Catalog,
    config: GameConfig,
    scoring: S,
    rng: GameRng,
    state: GameState,
}

impl CategorizationEngine<RelocationScoring> {
    /// Create an engine with the default scoring policy.
    #[must_use]
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        Self::with_scoring(catalog, config, RelocationScoring)
    }
}

impl<S: ScoringPolicy> CategorizationEngine<S> {
    /// Create an engine with a custom scoring policy.
    ///
    /// The state starts empty and not started; call `start()` to deal.
    #[must_use]
    pub fn with_scoring(catalog: Catalog, config: GameConfig, scoring: S) -> Self {
        let state = GameState::new(catalog.category_ids());
        Self {
            rng: GameRng::new(config.seed),
            catalog,
            config,
            scoring,
            state,
        }
    }

    /// Start (or restart) the session.
    ///
    /// Moves the whole catalog into the unplaced pool, empties every bin,
    /// zeroes the score and drops any pending move. The new state replaces
    /// the old one in a single assignment.
    pub fn start(&mut self) {
        let mut order: Vec<ItemId> = self.catalog.item_ids().collect();
        if self.config.shuffle_on_start {
            self.rng.shuffle(&mut order);
        }

        self.state = GameState::started_with(self.catalog.category_ids(), order);
        info!(
            items = self.catalog.len(),
            bins = self.catalog.categories().len(),
            shuffled = self.config.shuffle_on_start,
            "session started"
        );
    }

    /// Alias for `start()`.
    pub fn reset(&mut self) {
        self.start();
    }

    /// Record that `item` was picked up from `from` (`None` = unplaced pool).
    ///
    /// Ignored if the item is not actually there. A new pick-up replaces
    /// any pending one.
    pub fn begin_move(&mut self, item: ItemId, from: Option<CategoryId>) {
        if let Err(rejection) = self.try_begin_move(item, from) {
            debug!(%item, %rejection, "pick-up ignored");
        }
    }

    /// Resolve the pending move against bin `to`.
    ///
    /// Clears the pending move in every case. Applies the move and the
    /// score change only when the item still sits where it was picked up
    /// and `to` is a different, declared bin.
    pub fn complete_move(&mut self, to: CategoryId) {
        match self.try_complete_move(to) {
            Ok(record) => debug!(
                item = %record.item,
                from = %record.from,
                to = %record.to,
                delta = record.score_delta,
                score = self.state.score(),
                "move applied"
            ),
            Err(rejection) => debug!(%to, %rejection, "drop ignored"),
        }
    }

    /// Abort the in-flight gesture without touching locations or score.
    pub fn cancel_move(&mut self) {
        if let Some(pending) = self.state.take_pending() {
            debug!(item = %pending.item, "move cancelled");
        }
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    fn try_begin_move(&mut self, item: ItemId, from: Option<CategoryId>) -> Result<(), MoveRejection> {
        let claimed = Location::from_origin(from);
        let actual = self.state.location(item);
        if actual != Some(claimed) {
            return Err(MoveRejection::InvalidMoveOrigin { item, claimed, actual });
        }

        if let Some(previous) = self.state.pending_move() {
            debug!(replaced = %previous.item, %item, "pending move replaced");
        }
        self.state.set_pending(Some(PendingMove::new(item, from)));
        Ok(())
    }

    fn try_complete_move(&mut self, to: CategoryId) -> Result<MoveRecord, MoveRejection> {
        let pending = self.state.take_pending().ok_or(MoveRejection::NoPendingMove)?;

        if !self.state.locations().has_bin(to) {
            return Err(MoveRejection::UnknownCategory(to));
        }
        if pending.from == Some(to) {
            return Err(MoveRejection::SameBin(pending.item));
        }

        let origin = pending.origin();
        match self.state.location(pending.item) {
            Some(actual) if actual == origin => {}
            Some(actual) => {
                return Err(MoveRejection::StaleMove {
                    item: pending.item,
                    actual,
                })
            }
            None => {
                return Err(MoveRejection::InvalidMoveOrigin {
                    item: pending.item,
                    claimed: origin,
                    actual: None,
                })
            }
        }

        let item = self
            .catalog
            .item(pending.item)
            .ok_or(MoveRejection::InvalidMoveOrigin {
                item: pending.item,
                claimed: origin,
                actual: None,
            })?;
        let delta = self.scoring.score_delta(item, origin, to);
        let feedback = feedback_for(item, origin, to, &self.catalog.category_name(to));

        self.state.locations_mut().place(pending.item, to);
        Ok(self.state.record_move(pending.item, origin, to, delta, feedback))
    }
}
