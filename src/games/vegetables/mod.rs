//! Vegetable categories game.
//!
//! A classroom sorting game that teaches which part of the plant we eat:
//! - Ten vegetables, two per category
//! - Five bins: root, fruit, stem, leaves, flower
//! - Drag each vegetable into its bin; a fully correct run scores 10
//!
//! Uses the default relocation scoring.

mod catalog;

pub use catalog::{vegetable_catalog, VegetableCategory, VEGETABLES};
