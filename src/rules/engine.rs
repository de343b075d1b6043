//! The matching rules.
//!
//! `GameEngine` is stateless apart from its configuration. Every operation
//! takes a `&GameState` and returns a new state:
//!
//! - `start_level` / `start_free_play`: deal a fresh deck
//! - `flip_card`: reveal a card, count the step, pair it with the first
//! - `resolve`: apply the pending match or mismatch once its delay elapsed
//! - `check_win`: every card solved

use crate::cards::{deal_pairs, number_pairs, pair_count, CardIndex, FacePair};
use crate::core::{EngineConfig, EngineError, GameMode, GameRng, GameState, GameStatus};
use crate::levels::LevelDefinition;
use crate::resolution::{PendingResolution, ResolutionKind, ResolutionTicket};

/// Smallest and largest free-play grid.
pub const FREE_PLAY_GRID: std::ops::RangeInclusive<u32> = 2..=10;

/// Why a flip was ignored. Ignored flips never count as a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The deal is already won or lost.
    NotPlaying,
    /// Two cards are face up awaiting resolution.
    Busy,
    /// The card is the one already face up.
    AlreadyFlipped,
    /// The card belongs to a solved pair.
    AlreadySolved,
}

/// What a flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair is face up.
    Revealed,
    /// Second card is face up; a resolution of this kind is pending.
    PairFlipped(ResolutionKind),
    /// The step budget ran out on this flip. The card stays hidden.
    OutOfSteps,
}

/// Result of [`GameEngine::flip_card`].
#[derive(Clone, Debug)]
pub struct Flip {
    pub state: GameState,
    pub outcome: FlipOutcome,
}

impl Flip {
    /// The resolution to schedule, if this flip completed a pair.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        match self.outcome {
            FlipOutcome::PairFlipped(_) => self.state.pending(),
            _ => None,
        }
    }
}

/// Memory-matching rules engine.
///
/// ## Example
///
/// ```
/// use memory_maze::cards::CardIndex;
/// use memory_maze::core::{EngineConfig, GameRng, GameStatus};
/// use memory_maze::levels::{LevelCatalog, LevelId};
/// use memory_maze::rules::{FlipOutcome, GameEngine};
///
/// let engine = GameEngine::new(EngineConfig::default());
/// let catalog = LevelCatalog::builtin();
/// let level = catalog.get(LevelId::new(1)).unwrap();
///
/// let state = engine.start_level(level, &mut GameRng::new(42));
/// assert_eq!(state.deck_size(), 4);
/// assert_eq!(state.max_steps(), Some(7));
///
/// let flip = engine.flip_card(&state, CardIndex::new(0)).unwrap();
/// assert_eq!(flip.outcome, FlipOutcome::Revealed);
/// assert_eq!(flip.state.status(), GameStatus::Playing);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Dealing ===

    /// Deal a level: the first `grid²/2` face pairs, both faces of each,
    /// shuffled. Counters reset, status Playing.
    pub fn start_level(&self, level: &LevelDefinition, rng: &mut GameRng) -> GameState {
        self.deal(
            GameMode::Level(level.id()),
            level.grid_size(),
            level.pairs(),
            level.pair_count(),
            rng,
        )
    }

    /// Deal a free-play number board of any size in [`FREE_PLAY_GRID`].
    ///
    /// Odd sizes deal `floor(grid²/2)` pairs and leave one cell empty.
    /// The board has no step budget and uses the free-play delays.
    pub fn start_free_play(&self, grid_size: u32, rng: &mut GameRng) -> Result<GameState, EngineError> {
        if !FREE_PLAY_GRID.contains(&grid_size) {
            return Err(EngineError::InvalidGridSize(grid_size));
        }
        let count = pair_count(grid_size);
        let pairs = number_pairs(count);
        Ok(self.deal(GameMode::FreePlay { grid_size }, grid_size, &pairs, count, rng))
    }

    fn deal(
        &self,
        mode: GameMode,
        grid_size: u32,
        pairs: &[FacePair],
        count: usize,
        rng: &mut GameRng,
    ) -> GameState {
        let deal = rng.gen_u64();
        let deck = deal_pairs(pairs, count, rng);
        let max_steps = self.config.step_budget(mode, grid_size);

        log::debug!(
            "dealt {:?}: {} cards, step budget {:?} (deal {:#x})",
            mode,
            deck.len(),
            max_steps,
            deal
        );

        GameState::new(mode, grid_size, deal, deck, max_steps)
    }

    // === Flipping ===

    /// Flip a card.
    ///
    /// Out-of-range indices are an error. Flips the rules refuse (game over,
    /// busy, already face up) return the state unchanged with
    /// [`FlipOutcome::Ignored`]. Otherwise the flip costs one step; on a deal
    /// with a budget, the flip that reaches it loses the game without
    /// revealing the card.
    pub fn flip_card(&self, state: &GameState, index: CardIndex) -> Result<Flip, EngineError> {
        if index.index() >= state.deck_size() {
            return Err(EngineError::InvalidCardId {
                index,
                deck_size: state.deck_size(),
            });
        }

        if let Some(reason) = Self::ignore_reason(state, index) {
            log::trace!("flip {} ignored: {:?}", index, reason);
            return Ok(Flip {
                state: state.clone(),
                outcome: FlipOutcome::Ignored(reason),
            });
        }

        let mut next = state.clone();
        next.step_count += 1;

        if let Some(max_steps) = next.max_steps.filter(|&max| next.step_count >= max) {
            next.step_count = max_steps;
            next.status = GameStatus::Lost;
            log::info!("{:?} lost: out of steps ({})", next.mode, max_steps);
            return Ok(Flip {
                state: next,
                outcome: FlipOutcome::OutOfSteps,
            });
        }

        let Some(first) = next.flipped.first().copied() else {
            next.flipped.push(index);
            log::trace!("revealed {} (step {})", index, next.step_count);
            return Ok(Flip {
                state: next,
                outcome: FlipOutcome::Revealed,
            });
        };

        next.flipped.push(index);
        let kind = if next.deck[first.index()].matches(&next.deck[index.index()]) {
            ResolutionKind::Match
        } else {
            ResolutionKind::Mismatch
        };
        let (match_delay, mismatch_delay) = self.config.delays(next.mode);
        let delay = match kind {
            ResolutionKind::Match => match_delay,
            ResolutionKind::Mismatch => mismatch_delay,
        };
        next.pending = Some(PendingResolution {
            ticket: ResolutionTicket {
                deal: next.deal,
                step: next.step_count,
            },
            kind,
            cards: [first, index],
            delay,
        });

        log::trace!("flipped {} and {}: {:?} (step {})", first, index, kind, next.step_count);
        Ok(Flip {
            state: next,
            outcome: FlipOutcome::PairFlipped(kind),
        })
    }

    fn ignore_reason(state: &GameState, index: CardIndex) -> Option<IgnoreReason> {
        if state.status.is_terminal() {
            Some(IgnoreReason::NotPlaying)
        } else if state.is_busy() {
            Some(IgnoreReason::Busy)
        } else if state.is_flipped(index) {
            Some(IgnoreReason::AlreadyFlipped)
        } else if state.is_solved(index) {
            Some(IgnoreReason::AlreadySolved)
        } else {
            None
        }
    }

    /// Cards a flip would act on right now.
    #[must_use]
    pub fn legal_flips(&self, state: &GameState) -> Vec<CardIndex> {
        if state.status.is_terminal() || state.is_busy() {
            return Vec::new();
        }
        state
            .deck
            .iter()
            .map(|c| c.index)
            .filter(|&i| !state.is_face_up(i))
            .collect()
    }

    // === Resolution ===

    /// Apply the pending resolution identified by `ticket`.
    ///
    /// A match moves both cards to the solved set and runs the win check; a
    /// mismatch hides them. Stale or unknown tickets leave the state as is.
    #[must_use]
    pub fn resolve(&self, state: &GameState, ticket: ResolutionTicket) -> GameState {
        let Some(pending) = state.pending.as_ref() else {
            return state.clone();
        };
        if pending.ticket != ticket {
            log::debug!("dropping stale resolution {:?}", ticket);
            return state.clone();
        }

        let mut next = state.clone();
        let pending = next.pending.take();
        next.flipped.clear();

        if let Some(PendingResolution {
            kind: ResolutionKind::Match,
            cards,
            ..
        }) = pending
        {
            for card in cards {
                next.solved.insert(card);
            }
            if next.status == GameStatus::Playing && Self::check_win(&next) {
                next.status = GameStatus::Won;
                log::info!("{:?} won in {} steps", next.mode, next.step_count);
            }
        }

        next
    }

    /// Every card solved (and there is at least one card).
    #[must_use]
    pub fn check_win(state: &GameState) -> bool {
        !state.deck.is_empty() && state.solved.len() == state.deck.len()
    }
}
