//! # memory-maze
//!
//! A memory-matching ("concentration") card game engine.
//!
//! ## Design Principles
//!
//! 1. **State Is a Value**: Engine operations take a `&GameState` and return
//!    the next one. Nothing is mutated behind the caller's back.
//!
//! 2. **Presentation-Agnostic**: No rendering, no timers, no audio. A UI
//!    drives a `Session` with clicks and clock ticks and draws `state()`.
//!
//! 3. **Deterministic by Seed**: Every deal comes from a forked `GameRng`,
//!    so a seeded session replays exactly.
//!
//! ## Architecture
//!
//! - **Delayed Resolution**: A second flip leaves the pair face up and hands
//!   a `PendingResolution` to a `ResolutionSystem`. The pair resolves once
//!   its delay has elapsed. Tickets tie each resolution to the deal and
//!   step that created it, so a reset abandons stale ones.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` keeps the
//!   value-style API cheap.
//!
//! ## Modules
//!
//! - `core`: State, RNG, configuration, errors
//! - `cards`: Cards and deck dealing
//! - `levels`: Level definitions and the built-in catalog
//! - `resolution`: Resolution systems (immediate and timed)
//! - `rules`: `GameEngine`, the matching rules
//! - `session`: Unlock progress and the presentation-facing session
//! - `python`: Python bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod levels;
pub mod resolution;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, FreePlayRules, EngineError, LevelRejection,
    GameRng,
    GameMode, GameState, GameStatus,
};

pub use crate::cards::{Card, CardIndex, FacePair, PairId};

pub use crate::levels::{LevelCatalog, LevelDefinition, LevelId};

pub use crate::resolution::{
    ResolutionKind, ResolutionSystem, ResolutionTicket, PendingResolution,
    ImmediateResolution, TimedResolution,
};

pub use crate::rules::{Flip, FlipOutcome, GameEngine, IgnoreReason};

pub use crate::session::{Session, UnlockProgress};
