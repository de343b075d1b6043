//! Matching rules.
//!
//! `GameEngine` defines:
//! - How a level or free-play board is dealt
//! - What a flip does and which flips are ignored
//! - How a pending pair resolves
//! - Win/loss conditions
//!
//! It holds no game state of its own; callers own the `GameState`.

pub mod engine;

pub use engine::{Flip, FlipOutcome, GameEngine, IgnoreReason, FREE_PLAY_GRID};
