//! Player feedback for applied moves.
//!
//! Mirrors the toast a classroom UI shows after a drop. Relocating an item
//! between two wrong bins produces no feedback.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::core::{CategoryId, ItemId, Location};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Correct,
    Wrong,
}

/// Message describing the outcome of a drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub item: ItemId,
    pub category: CategoryId,
    pub message: String,
}

impl Feedback {
    /// Feedback for a correct drop.
    #[must_use]
    pub fn correct(item: &Item, category: CategoryId, category_name: &str) -> Self {
        Self {
            kind: FeedbackKind::Correct,
            item: item.id,
            category,
            message: format!("{} belongs in the {} category!", item.name, category_name),
        }
    }

    /// Feedback for a wrong drop.
    #[must_use]
    pub fn wrong(item: &Item, category: CategoryId, category_name: &str) -> Self {
        Self {
            kind: FeedbackKind::Wrong,
            item: item.id,
            category,
            message: format!(
                "{} doesn't belong in the {} category. Try again!",
                item.name, category_name
            ),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Correct => "Correct!",
            FeedbackKind::Wrong => "Wrong Category",
        }
    }
}

/// Feedback for moving `item` from `from` into bin `to`.
#[must_use]
pub fn feedback_for(item: &Item, from: Location, to: CategoryId, category_name: &str) -> Option<Feedback> {
    if item.belongs_in(to) {
        return Some(Feedback::correct(item, to, category_name));
    }
    match from {
        Location::Unplaced => Some(Feedback::wrong(item, to, category_name)),
        Location::Bin(origin) if item.belongs_in(origin) => Some(Feedback::wrong(item, to, category_name)),
        Location::Bin(_) => None,
    }
}
