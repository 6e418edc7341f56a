//! Item definitions - static catalog data.
//!
//! An `Item` holds the immutable properties of a sortable thing: its name,
//! its picture and the category it truly belongs to. Where the item sits
//! during a session is tracked separately by the location tracker.

use serde::{Deserialize, Serialize};

use crate::core::{CategoryId, ItemId};

/// Immutable catalog entry.
///
/// ## Example
///
/// ```
/// use garden_sort::catalog::Item;
/// use garden_sort::core::{CategoryId, ItemId};
///
/// let carrot = Item::new(ItemId(1), "Carrot", CategoryId(0))
///     .with_image("https://example.org/carrot.jpg");
///
/// assert!(carrot.belongs_in(CategoryId(0)));
/// assert!(!carrot.belongs_in(CategoryId(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, stable for the session.
    pub id: ItemId,

    /// Display label.
    pub name: String,

    /// Opaque reference to the item's picture (URL or asset handle).
    #[serde(default)]
    pub image_ref: String,

    /// Ground-truth classification.
    pub true_category: CategoryId,
}

impl Item {
    /// Create a new item with no image.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, true_category: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            image_ref: String::new(),
            true_category,
        }
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Whether `category` is this item's true category.
    #[must_use]
    pub fn belongs_in(&self, category: CategoryId) -> bool {
        self.true_category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = Item::new(ItemId(2), "Tomato", CategoryId(1)).with_image("tomato.png");

        assert_eq!(item.name, "Tomato");
        assert_eq!(item.image_ref, "tomato.png");
        assert!(item.belongs_in(CategoryId(1)));
    }

    #[test]
    fn test_item_json_without_image() {
        let item: Item =
            serde_json::from_str(r#"{"id": 3, "name": "Celery", "true_category": 2}"#).unwrap();

        assert_eq!(item.id, ItemId(3));
        assert!(item.image_ref.is_empty());
        assert_eq!(item.true_category, CategoryId(2));
    }
}
