//! Vegetable game end-to-end tests.
//!
//! Plays the classroom game through complete sessions: perfect runs,
//! imperfect runs, restarts and the strict scoring variant.

use strum::IntoEnumIterator;

use garden_sort::catalog::Catalog;
use garden_sort::core::{CategoryId, GameConfig, ItemId, SessionPhase};
use garden_sort::engine::CategorizationEngine;
use garden_sort::games::vegetables::{vegetable_catalog, VegetableCategory, VEGETABLES};
use garden_sort::rules::{PenaltyScoring, ScoringPolicy};

fn true_bin(catalog: &Catalog, item: ItemId) -> CategoryId {
    catalog.item(item).unwrap().true_category
}

fn place_all<S: ScoringPolicy>(engine: &mut CategorizationEngine<S>, pick: impl Fn(ItemId) -> CategoryId) {
    let pool: Vec<ItemId> = engine.state().unplaced().iter().copied().collect();
    for item in pool {
        engine.begin_move(item, None);
        engine.complete_move(pick(item));
    }
}

/// Sorting every vegetable correctly scores 10/10.
#[test]
fn test_perfect_game() {
    let catalog = vegetable_catalog();
    let mut engine = CategorizationEngine::new(catalog.clone(), GameConfig::default());
    engine.start();

    place_all(&mut engine, |item| true_bin(&catalog, item));

    let state = engine.current_state();
    assert_eq!(state.phase(), SessionPhase::Complete);
    assert_eq!(state.score(), 10);
    assert_eq!(state.max_score(), 10);
    for category in VegetableCategory::iter() {
        assert_eq!(state.bin(category.id()).unwrap().len(), 2);
    }
}

/// Everything dumped in the root bin: only the two roots count.
#[test]
fn test_everything_in_one_bin() {
    let mut engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());
    engine.start();

    place_all(&mut engine, |_| VegetableCategory::Root.id());

    let state = engine.current_state();
    assert_eq!(state.remaining(), 0);
    assert_eq!(state.score(), 2);
    assert_eq!(state.bin(VegetableCategory::Root.id()).unwrap().len(), 10);
}

/// Play again after game over deals a fresh board.
#[test]
fn test_play_again() {
    let catalog = vegetable_catalog();
    let mut engine = CategorizationEngine::new(catalog.clone(), GameConfig::default());
    engine.start();
    place_all(&mut engine, |item| true_bin(&catalog, item));
    assert_eq!(engine.state().phase(), SessionPhase::Complete);

    engine.start();

    let state = engine.current_state();
    assert_eq!(state.phase(), SessionPhase::InProgress);
    assert_eq!(state.remaining(), VEGETABLES.len());
    assert_eq!(state.score(), 0);
    assert!(state.history().is_empty());
}

/// Shuffled sessions deal in a seed-determined order.
#[test]
fn test_shuffled_deal() {
    let config = GameConfig::new().with_seed(2024).shuffled();
    let mut a = CategorizationEngine::new(vegetable_catalog(), config.clone());
    let mut b = CategorizationEngine::new(vegetable_catalog(), config);

    a.start();
    b.start();
    assert_eq!(a.state().unplaced(), b.state().unplaced());

    let mut dealt: Vec<u32> = a.state().unplaced().iter().map(|id| id.raw()).collect();
    dealt.sort_unstable();
    assert_eq!(dealt, (1..=10).collect::<Vec<_>>());
}

/// Strict scoring charges for wrong bins and can end below zero.
#[test]
fn test_strict_scoring_game() {
    let mut engine = CategorizationEngine::with_scoring(
        vegetable_catalog(),
        GameConfig::default(),
        PenaltyScoring::new(1),
    );
    engine.start();

    place_all(&mut engine, |_| VegetableCategory::Flower.id());

    // 2 correct, 8 wrong
    assert_eq!(engine.state().score(), 2 - 8);

    // Fixing the carrot recovers the penalty and earns the point.
    engine.begin_move(ItemId(1), Some(VegetableCategory::Flower.id()));
    engine.complete_move(VegetableCategory::Root.id());
    assert_eq!(engine.state().score(), 3 - 7);
}

/// Feedback messages name the vegetable and the bin.
#[test]
fn test_feedback_messages() {
    let mut engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());
    engine.start();

    engine.begin_move(ItemId(2), None);
    engine.complete_move(VegetableCategory::Leaves.id());

    let feedback = engine.state().last_feedback().unwrap();
    assert_eq!(feedback.title(), "Wrong Category");
    assert_eq!(feedback.message, "Tomato doesn't belong in the leaves category. Try again!");
}

/// Snapshots serialize to JSON for web renderers.
#[test]
fn test_snapshot_json() {
    let mut engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());
    engine.start();
    engine.begin_move(ItemId(5), None);
    engine.complete_move(VegetableCategory::Flower.id());

    let json = serde_json::to_value(engine.current_state()).unwrap();

    assert_eq!(json["score"], 1);
    assert_eq!(json["started"], true);
    assert_eq!(json["history"][0]["item"], 5);
}
