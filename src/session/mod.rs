//! Game session: the boundary a presentation layer talks to.
//!
//! A `Session` owns the current `GameState`, the unlock progress and the
//! resolution scheduler. The presentation layer renders `state()` and
//! forwards input:
//!
//! - card click → [`Session::on_card_click`]
//! - reset button → [`Session::on_reset`]
//! - level picker → [`Session::on_level_select`]
//! - every frame → [`Session::tick`]
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_maze::cards::CardIndex;
//! use memory_maze::core::EngineConfig;
//! use memory_maze::levels::LevelCatalog;
//! use memory_maze::session::Session;
//!
//! let mut session = Session::new(LevelCatalog::builtin(), EngineConfig::default().with_seed(1)).unwrap();
//!
//! session.on_card_click(CardIndex::new(0)).unwrap();
//! session.on_card_click(CardIndex::new(1)).unwrap();
//! assert!(session.is_busy());
//!
//! // Both delays have passed after 550 ms
//! session.tick(Duration::from_millis(550));
//! assert!(!session.is_busy());
//! ```

mod progress;

pub use progress::UnlockProgress;

use std::time::Duration;

use crate::cards::CardIndex;
use crate::core::{EngineConfig, EngineError, GameMode, GameRng, GameState, GameStatus};
use crate::levels::{LevelCatalog, LevelDefinition, LevelId};
use crate::resolution::{ResolutionKind, ResolutionSystem, TimedResolution};
use crate::rules::{FlipOutcome, GameEngine};

/// A single player's session.
#[derive(Debug)]
pub struct Session<R: ResolutionSystem = TimedResolution> {
    engine: GameEngine,
    catalog: LevelCatalog,
    progress: UnlockProgress,
    /// Last level dealt. Free play leaves it unchanged.
    current: LevelId,
    state: GameState,
    rng: GameRng,
    resolver: R,
}

impl Session<TimedResolution> {
    /// Start a session on the first catalog level with a virtual-clock
    /// resolver driven by [`tick`](Session::tick).
    pub fn new(catalog: LevelCatalog, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_resolver(catalog, config, TimedResolution::new())
    }
}

impl<R: ResolutionSystem> Session<R> {
    /// Start a session on the first catalog level with a custom resolver.
    pub fn with_resolver(catalog: LevelCatalog, config: EngineConfig, resolver: R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let engine = GameEngine::new(config);
        let first = catalog.first();
        let current = first.id();
        let state = engine.start_level(first, &mut rng.fork());

        log::info!(
            "session started: {} levels, seed {:#x}",
            catalog.len(),
            rng.seed()
        );

        Ok(Self {
            engine,
            catalog,
            progress: UnlockProgress::new(current),
            current,
            state,
            rng,
            resolver,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &UnlockProgress {
        &self.progress
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Level most recently selected (or reset to).
    #[must_use]
    pub fn current_level(&self) -> LevelId {
        self.current
    }

    #[must_use]
    pub fn current_definition(&self) -> Option<&LevelDefinition> {
        self.catalog.get(self.current)
    }

    #[must_use]
    pub fn unlocked_level(&self) -> LevelId {
        self.progress.unlocked()
    }

    /// True while a pair is face up awaiting resolution.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Face to draw for every cell in deck order; `None` for hidden cards.
    #[must_use]
    pub fn visible_faces(&self) -> Vec<Option<&str>> {
        self.state
            .deck()
            .iter()
            .map(|card| self.state.visible_face(card.index))
            .collect()
    }

    // === Input ===

    /// Handle a click on a card.
    ///
    /// A completed pair is handed to the resolver; it resolves on a later
    /// [`tick`](Self::tick).
    pub fn on_card_click(&mut self, index: CardIndex) -> Result<FlipOutcome, EngineError> {
        let flip = self.engine.flip_card(&self.state, index)?;
        if let Some(pending) = flip.pending() {
            self.resolver.schedule(pending.clone());
        }
        let outcome = flip.outcome;
        self.state = flip.state;
        Ok(outcome)
    }

    /// Advance the clock and apply every resolution now due.
    ///
    /// Returns the kinds applied, in order.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<ResolutionKind> {
        let mut applied = Vec::new();

        for pending in self.resolver.advance(elapsed) {
            if self.state.pending().map(|p| p.ticket) != Some(pending.ticket) {
                log::debug!("skipping abandoned resolution {:?}", pending.ticket);
                continue;
            }
            self.state = self.engine.resolve(&self.state, pending.ticket);
            applied.push(pending.kind);
        }

        if !applied.is_empty() {
            self.check_win();
        }
        applied
    }

    /// Record the unlock if the current deal has been won.
    ///
    /// Returns true when the deal is won. Safe to call repeatedly; the
    /// unlock line only moves forward.
    pub fn check_win(&mut self) -> bool {
        if self.state.status() != GameStatus::Won {
            return false;
        }
        if let Some(level) = self.state.level() {
            if self.progress.record_win(level) {
                log::info!("unlocked {}", self.progress.unlocked());
            }
        }
        true
    }

    /// Redeal the current board. Pending resolutions are abandoned.
    pub fn on_reset(&mut self) -> Result<(), EngineError> {
        let mode = self.state.mode();
        self.redeal(mode)
    }

    /// Switch to `level`. Only unlocked catalog levels are accepted;
    /// otherwise the session is unchanged.
    pub fn on_level_select(&mut self, level: LevelId) -> Result<(), EngineError> {
        self.catalog.require(level)?;
        if !self.progress.is_unlocked(level) {
            log::warn!("{} selected but only {} is unlocked", level, self.progress.unlocked());
            return Err(EngineError::locked_level(level, self.progress.unlocked()));
        }
        self.redeal(GameMode::Level(level))
    }

    /// Deal a free-play number board. The current level is kept for the
    /// next level reset.
    pub fn start_free_play(&mut self, grid_size: u32) -> Result<(), EngineError> {
        self.redeal(GameMode::FreePlay { grid_size })
    }

    fn redeal(&mut self, mode: GameMode) -> Result<(), EngineError> {
        let mut deal_rng = self.rng.fork();
        let state = match mode {
            GameMode::Level(id) => {
                let level = self.catalog.require(id)?;
                self.engine.start_level(level, &mut deal_rng)
            }
            GameMode::FreePlay { grid_size } => self.engine.start_free_play(grid_size, &mut deal_rng)?,
        };

        if !self.resolver.is_idle() {
            log::debug!("abandoning {} pending resolution(s)", self.resolver.pending_count());
        }
        self.resolver.clear();
        if let GameMode::Level(id) = mode {
            self.current = id;
        }
        self.state = state;
        Ok(())
    }
}
