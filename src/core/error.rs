//! Engine errors.
//!
//! Only structurally invalid requests are errors. Clicks the rules simply
//! ignore (double click, click while busy, click after the game ended) are
//! reported as [`IgnoreReason`](crate::rules::IgnoreReason)s, not failures.

use crate::cards::CardIndex;
use crate::levels::LevelId;

/// Why a level request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelRejection {
    /// No level with this id in the catalog.
    NotInCatalog,
    /// The level exists but has not been unlocked yet.
    Locked {
        /// Highest level currently unlocked.
        unlocked: LevelId,
    },
}

impl std::fmt::Display for LevelRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelRejection::NotInCatalog => write!(f, "not in catalog"),
            LevelRejection::Locked { unlocked } => write!(f, "locked (unlocked up to {})", unlocked),
        }
    }
}

/// Errors returned by the engine, catalog and session.
///
/// A rejected call never modifies state; the caller may retry with valid input.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid level {level}: {reason}")]
    InvalidLevel {
        level: LevelId,
        reason: LevelRejection,
    },
    #[error("invalid card {index}: deck has {deck_size} cards")]
    InvalidCardId { index: CardIndex, deck_size: usize },
    #[error("invalid level definition: {0}")]
    InvalidDefinition(String),
    #[error("grid size {0} outside supported range 2..=10")]
    InvalidGridSize(u32),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Shorthand for a level missing from the catalog.
    #[must_use]
    pub fn unknown_level(level: LevelId) -> Self {
        Self::InvalidLevel {
            level,
            reason: LevelRejection::NotInCatalog,
        }
    }

    /// Shorthand for a level that is not unlocked yet.
    #[must_use]
    pub fn locked_level(level: LevelId, unlocked: LevelId) -> Self {
        Self::InvalidLevel {
            level,
            reason: LevelRejection::Locked { unlocked },
        }
    }
}
