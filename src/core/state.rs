//! Game state for a single deal.
//!
//! ## GameState
//!
//! - The shuffled deck
//! - Flipped (face-up, unresolved) and solved cards
//! - Step counter and step budget (none on free-play boards)
//! - Status: Playing, Won or Lost
//! - The pending resolution, if two cards are face up
//!
//! States are values. Every engine operation takes `&GameState` and
//! returns a new one; `im` collections keep those clones O(1).
//!
//! ## Invariants
//!
//! - `flipped.len() <= 2`, and `pending.is_some()` iff `flipped.len() == 2`
//! - `solved.len()` is even
//! - `step_count <= max_steps` when the deal has a budget
//! - `status` leaves `Playing` at most once per deal

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardIndex};
use crate::levels::LevelId;
use crate::resolution::PendingResolution;

/// Status of a deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Every card solved.
    Won,
    /// Step budget exhausted.
    Lost,
}

impl GameStatus {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What produced a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// A catalog level. Winning unlocks the next one.
    Level(LevelId),
    /// A free-play number board. Never unlocks anything.
    FreePlay { grid_size: u32 },
}

/// Complete state of one deal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) mode: GameMode,
    pub(crate) grid_size: u32,
    /// Random tag distinguishing this deal from every other.
    pub(crate) deal: u64,
    pub(crate) deck: Vector<Card>,
    pub(crate) flipped: SmallVec<[CardIndex; 2]>,
    pub(crate) solved: OrdSet<CardIndex>,
    pub(crate) step_count: u32,
    /// `None` for an unlimited deal.
    pub(crate) max_steps: Option<u32>,
    pub(crate) status: GameStatus,
    pub(crate) pending: Option<PendingResolution>,
}

impl GameState {
    /// Fresh state for a newly dealt deck.
    pub(crate) fn new(mode: GameMode, grid_size: u32, deal: u64, deck: Vector<Card>, max_steps: Option<u32>) -> Self {
        Self {
            mode,
            grid_size,
            deal,
            deck,
            flipped: SmallVec::new(),
            solved: OrdSet::new(),
            step_count: 0,
            max_steps,
            status: GameStatus::Playing,
            pending: None,
        }
    }

    // === Deal ===

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Level this deal belongs to, if any.
    #[must_use]
    pub fn level(&self) -> Option<LevelId> {
        match self.mode {
            GameMode::Level(id) => Some(id),
            GameMode::FreePlay { .. } => None,
        }
    }

    /// Side length of the grid. Odd grids have one empty cell.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn deal_id(&self) -> u64 {
        self.deal
    }

    // === Cards ===

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.get(index.index())
    }

    /// Face-up, unresolved cards in flip order.
    #[must_use]
    pub fn flipped(&self) -> &[CardIndex] {
        &self.flipped
    }

    #[must_use]
    pub fn solved(&self) -> &OrdSet<CardIndex> {
        &self.solved
    }

    #[must_use]
    pub fn is_flipped(&self, index: CardIndex) -> bool {
        self.flipped.contains(&index)
    }

    #[must_use]
    pub fn is_solved(&self, index: CardIndex) -> bool {
        self.solved.contains(&index)
    }

    /// Flipped or solved.
    #[must_use]
    pub fn is_face_up(&self, index: CardIndex) -> bool {
        self.is_flipped(index) || self.is_solved(index)
    }

    /// The face a renderer should show, or `None` for a hidden card.
    #[must_use]
    pub fn visible_face(&self, index: CardIndex) -> Option<&str> {
        if self.is_face_up(index) {
            self.card(index).map(|c| c.face.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub fn solved_pairs(&self) -> usize {
        self.solved.len() / 2
    }

    // === Steps ===

    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Step budget; `None` when the deal cannot be lost.
    #[must_use]
    pub fn max_steps(&self) -> Option<u32> {
        self.max_steps
    }

    #[must_use]
    pub fn steps_remaining(&self) -> Option<u32> {
        self.max_steps.map(|max| max.saturating_sub(self.step_count))
    }

    // === Status ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while a resolution is pending; flips are ignored.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }
}
