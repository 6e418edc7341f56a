//! Catalog of categories and items.
//!
//! The `Catalog` is the fixed list of things a session sorts, together
//! with the closed set of categories they can be sorted into. It keeps
//! authoring order for both so rendering is deterministic, and indexes
//! items by ID for fast lookup during moves.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

use super::definition::Item;
use crate::core::{CatalogError, CategoryDef, CategoryId, ItemId};

/// Registry of categories and items.
///
/// ## Example
///
/// ```
/// use garden_sort::catalog::{Catalog, Item};
/// use garden_sort::core::{CategoryDef, CategoryId, ItemId};
///
/// let mut catalog = Catalog::new();
/// catalog.add_category(CategoryDef::new(CategoryId(0), "root")).unwrap();
/// catalog.add_item(Item::new(ItemId(1), "Carrot", CategoryId(0))).unwrap();
///
/// assert_eq!(catalog.item(ItemId(1)).unwrap().name, "Carrot");
/// assert_eq!(catalog.category_by_name("ROOT"), Some(CategoryId(0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: SmallVec<[CategoryDef; 8]>,
    items: Vec<Item>,
    index: FxHashMap<ItemId, usize>,
}

/// On-disk shape of a catalog.
#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryDef>,
    items: Vec<Item>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON.
    ///
    /// Expects `{ "categories": [{"id", "name"}], "items": [{"id", "name",
    /// "image_ref", "true_category"}] }`. Validation matches `add_category`
    /// and `add_item`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for category in file.categories {
            catalog.add_category(category)?;
        }
        for item in file.items {
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }

    /// Declare a category.
    ///
    /// Both the ID and the (case-insensitive) name must be unique.
    pub fn add_category(&mut self, category: CategoryDef) -> Result<(), CatalogError> {
        let clash = self
            .categories
            .iter()
            .any(|c| c.id == category.id || c.name.eq_ignore_ascii_case(&category.name));
        if clash {
            return Err(CatalogError::DuplicateCategory {
                id: category.id,
                name: category.name,
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// Add an item.
    ///
    /// The item's true category must already be declared.
    pub fn add_item(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.index.contains_key(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id));
        }
        if self.category(item.true_category).is_none() {
            return Err(CatalogError::UnknownCategory {
                item: item.id,
                category: item.true_category,
            });
        }
        self.index.insert(item.id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Get an item by ID.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Check if an item ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Items in authoring order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item IDs in authoring order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Get a category declaration by ID.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by name, ignoring ASCII case.
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.id)
    }

    /// Display name for a category, falling back to its ID.
    #[must_use]
    pub fn category_name(&self, id: CategoryId) -> String {
        self.category(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone())
    }

    /// Categories in authoring order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// Category IDs in authoring order.
    pub fn category_ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().map(|c| c.id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
