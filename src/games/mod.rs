//! Built-in games.

pub mod vegetables;
