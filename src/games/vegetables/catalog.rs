//! The built-in vegetable catalog.

use strum::IntoEnumIterator;

use crate::catalog::{Catalog, Item};
use crate::core::{CategoryDef, CategoryId, ItemId};

/// The part of the plant a vegetable is.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VegetableCategory {
    Root,
    Fruit,
    Stem,
    Leaves,
    Flower,
}

impl VegetableCategory {
    /// Category ID used in the catalog (declaration order).
    #[must_use]
    pub const fn id(self) -> CategoryId {
        CategoryId::new(self as u16)
    }

    /// Map a catalog ID back to the enum.
    #[must_use]
    pub fn from_id(id: CategoryId) -> Option<Self> {
        Self::iter().find(|c| c.id() == id)
    }

    /// Label shown next to the bin icon on the intro screen.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            VegetableCategory::Root => "Root Vegetables",
            VegetableCategory::Fruit => "Fruit Vegetables",
            VegetableCategory::Stem => "Stem Vegetables",
            VegetableCategory::Leaves => "Leafy Vegetables",
            VegetableCategory::Flower => "Flower Vegetables",
        }
    }
}

impl From<VegetableCategory> for CategoryId {
    fn from(category: VegetableCategory) -> Self {
        category.id()
    }
}

/// (id, name, image, category)
pub const VEGETABLES: [(u32, &str, &str, VegetableCategory); 10] = [
    (
        1,
        "Carrot",
        "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?w=300",
        VegetableCategory::Root,
    ),
    (
        2,
        "Tomato",
        "https://images.unsplash.com/photo-1592924357228-91a4daadcfea?w=300",
        VegetableCategory::Fruit,
    ),
    (
        3,
        "Celery",
        "https://images.unsplash.com/photo-1615485290382-441e4d049cb5?w=300",
        VegetableCategory::Stem,
    ),
    (
        4,
        "Spinach",
        "https://images.unsplash.com/photo-1576045057995-568f588f82fb?w=300",
        VegetableCategory::Leaves,
    ),
    (
        5,
        "Broccoli",
        "https://images.unsplash.com/photo-1584270354949-c26b0d5b4a0c?w=300",
        VegetableCategory::Flower,
    ),
    (
        6,
        "Radish",
        "https://images.unsplash.com/photo-1586767240180-f99c22df0a24?w=300",
        VegetableCategory::Root,
    ),
    (
        7,
        "Eggplant",
        "https://images.unsplash.com/photo-1628784230353-5bee16e2f005?w=300",
        VegetableCategory::Fruit,
    ),
    (
        8,
        "Asparagus",
        "https://images.unsplash.com/photo-1515471209610-dae1c92d8777?w=300",
        VegetableCategory::Stem,
    ),
    (
        9,
        "Lettuce",
        "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?w=300",
        VegetableCategory::Leaves,
    ),
    (
        10,
        "Cauliflower",
        "https://images.unsplash.com/photo-1568584711075-3d021a7c3ca3?w=300",
        VegetableCategory::Flower,
    ),
];

/// Build the vegetable catalog: five bins, ten vegetables.
#[must_use]
pub fn vegetable_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for category in VegetableCategory::iter() {
        catalog
            .add_category(CategoryDef::new(category.id(), category.to_string()))
            .expect("vegetable categories are distinct");
    }

    for (id, name, image, category) in VEGETABLES {
        catalog
            .add_item(Item::new(ItemId(id), name, category.id()).with_image(image))
            .expect("vegetable ids are distinct");
    }

    catalog
}
