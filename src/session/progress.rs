//! Level unlock progress.

use serde::{Deserialize, Serialize};

use crate::levels::{LevelCatalog, LevelId};

/// Highest level the player may select.
///
/// Only ever grows: a win on level `n` raises it to `max(current, n + 1)`.
/// Losses and resets leave it untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockProgress {
    unlocked: LevelId,
}

impl UnlockProgress {
    /// Start with `first` unlocked.
    #[must_use]
    pub fn new(first: LevelId) -> Self {
        Self { unlocked: first }
    }

    #[must_use]
    pub fn unlocked(&self) -> LevelId {
        self.unlocked
    }

    /// Is `level` at or below the unlock line?
    #[must_use]
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        level <= self.unlocked
    }

    /// Record a win on `level`. Returns true if this unlocked something new.
    ///
    /// A win on the highest possible id unlocks nothing further.
    pub fn record_win(&mut self, level: LevelId) -> bool {
        let Some(candidate) = level.next() else {
            return false;
        };
        if candidate > self.unlocked {
            self.unlocked = candidate;
            true
        } else {
            false
        }
    }

    /// Unlocked levels that exist in `catalog`, in order.
    pub fn selectable<'a>(&'a self, catalog: &'a LevelCatalog) -> impl Iterator<Item = LevelId> + 'a {
        catalog
            .iter()
            .map(|l| l.id())
            .filter(move |&id| self.is_unlocked(id))
    }
}
