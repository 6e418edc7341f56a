//! Location tracker for item placement and movement.
//!
//! The `LocationTracker` records where every item is (the unplaced pool or
//! one bin) and keeps the per-location ordering used for rendering:
//! - the unplaced pool keeps its dealing order
//! - each bin keeps items in the order they were dropped
//!
//! All collections are `im` persistent structures, so cloning a tracker
//! for a snapshot shares structure instead of copying it.

use im::{HashMap as ImHashMap, OrdMap, Vector};
use serde::{Deserialize, Serialize};

use crate::core::{CategoryId, ItemId, Location};

/// Tracks item locations across the unplaced pool and the bins.
///
/// Every tracked item is in exactly one location: its entry in
/// `locations` and its presence in the matching ordered list always agree.
///
/// ## Usage
///
/// ```
/// use garden_sort::locations::LocationTracker;
/// use garden_sort::core::{CategoryId, ItemId, Location};
///
/// let root = CategoryId(0);
/// let mut tracker = LocationTracker::new([root, CategoryId(1)]);
/// tracker.reset([ItemId(1), ItemId(2)]);
///
/// assert_eq!(tracker.place(ItemId(1), root), Some(Location::Unplaced));
/// assert_eq!(tracker.location(ItemId(1)), Some(Location::Bin(root)));
/// assert_eq!(tracker.remaining(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTracker {
    /// Item locations: item_id -> location
    locations: ImHashMap<ItemId, Location>,

    /// Unplaced items in dealing order.
    unplaced: Vector<ItemId>,

    /// Bin contents in drop order. Every declared bin has an entry.
    bins: OrdMap<CategoryId, Vector<ItemId>>,
}

impl LocationTracker {
    /// Create a tracker with the given (empty) bins and no items.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = CategoryId>) -> Self {
        Self {
            locations: ImHashMap::new(),
            unplaced: Vector::new(),
            bins: categories.into_iter().map(|c| (c, Vector::new())).collect(),
        }
    }

    /// Empty every bin and put `items` into the unplaced pool, in order.
    pub fn reset(&mut self, items: impl IntoIterator<Item = ItemId>) {
        let unplaced: Vector<ItemId> = items.into_iter().collect();

        self.locations = unplaced.iter().map(|&id| (id, Location::Unplaced)).collect();
        self.unplaced = unplaced;
        self.bins = self.bins.keys().map(|&c| (c, Vector::new())).collect();
    }

    /// Check if a bin exists.
    #[must_use]
    pub fn has_bin(&self, category: CategoryId) -> bool {
        self.bins.contains_key(&category)
    }

    /// Get the location of an item.
    #[must_use]
    pub fn location(&self, item: ItemId) -> Option<Location> {
        self.locations.get(&item).copied()
    }

    /// Check if an item is at a specific location.
    #[must_use]
    pub fn is_at(&self, item: ItemId, location: Location) -> bool {
        self.locations.get(&item) == Some(&location)
    }

    /// Move an item into a bin, appending it to the bin's contents.
    ///
    /// Returns the old location, or `None` if the item or the bin is
    /// unknown. Placing an item into the bin it already occupies leaves
    /// the ordering untouched.
    pub fn place(&mut self, item: ItemId, to: CategoryId) -> Option<Location> {
        let old = self.location(item)?;
        if !self.has_bin(to) {
            return None;
        }
        if old == Location::Bin(to) {
            return Some(old);
        }

        // Remove from old ordering
        if let Some(list) = self.list_mut(old) {
            if let Some(pos) = list.iter().position(|&e| e == item) {
                list.remove(pos);
            }
        }

        self.locations.insert(item, Location::Bin(to));
        if let Some(contents) = self.bins.get_mut(&to) {
            contents.push_back(item);
        }

        Some(old)
    }

    fn list_mut(&mut self, location: Location) -> Option<&mut Vector<ItemId>> {
        match location {
            Location::Unplaced => Some(&mut self.unplaced),
            Location::Bin(category) => self.bins.get_mut(&category),
        }
    }

    /// Unplaced items in dealing order.
    #[must_use]
    pub fn unplaced(&self) -> &Vector<ItemId> {
        &self.unplaced
    }

    /// Contents of a bin in drop order, or `None` for an undeclared bin.
    #[must_use]
    pub fn bin(&self, category: CategoryId) -> Option<&Vector<ItemId>> {
        self.bins.get(&category)
    }

    /// Iterate over all bins in category order.
    pub fn bins(&self) -> impl Iterator<Item = (CategoryId, &Vector<ItemId>)> {
        self.bins.iter().map(|(&c, v)| (c, v))
    }

    /// Number of unplaced items.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.unplaced.len()
    }

    /// Number of items sitting in some bin.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.bins.values().map(Vector::len).sum()
    }

    /// Total number of tracked items.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }
}
