//! Catalog system: item definitions and the catalog registry.
//!
//! ## Key Types
//!
//! - `Item`: Static item data (name, image, true category)
//! - `Catalog`: Declared categories plus the items to sort

pub mod definition;
pub mod registry;

pub use definition::Item;
pub use registry::Catalog;
