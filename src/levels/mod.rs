//! Levels: static definitions and the catalog that orders them.
//!
//! A level fixes the grid size and the face pairs to deal. Level `n + 1`
//! unlocks when level `n` is won.

pub mod catalog;
pub mod definition;

pub use catalog::LevelCatalog;
pub use definition::{LevelDefinition, LevelId};
