//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `CategoryDef`: Defines a category bin (root, fruit, ...)
//! - `GameConfig`: Session options (seed, shuffling)
//!
//! The engine never hardcodes categories - catalogs declare them.

use serde::{Deserialize, Serialize};

/// Category identifier. Catalogs define what categories exist.
///
/// The engine doesn't interpret category IDs - they're opaque identifiers
/// compared for equality. Catalogs assign meaning via `CategoryDef`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Declaration of a single category bin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Unique identifier for this category.
    pub id: CategoryId,

    /// Short tag shown on the bin (e.g. "root").
    pub name: String,
}

impl CategoryDef {
    /// Create a new category declaration.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Session configuration.
///
/// ## Defaults
///
/// - `seed`: 0
/// - `shuffle_on_start`: false (items appear in catalog order)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deterministic RNG.
    pub seed: u64,

    /// Shuffle the unplaced pool on every `start()`.
    pub shuffle_on_start: bool,
}

impl GameConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Shuffle the unplaced pool on start.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_on_start = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id() {
        let id = CategoryId::new(4);
        assert_eq!(id.raw(), 4);
        assert_eq!(format!("{}", id), "Category(4)");
    }

    #[test]
    fn test_category_def() {
        let def = CategoryDef::new(CategoryId::new(0), "root");
        assert_eq!(def.name, "root");
        assert_eq!(def.id, CategoryId(0));
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new().with_seed(7).shuffled();

        assert_eq!(config.seed, 7);
        assert!(config.shuffle_on_start);
    }

    #[test]
    fn test_game_config_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();

        assert_eq!(config.seed, 9);
        assert!(!config.shuffle_on_start);
    }
}
