//! Session bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::cards::CardIndex;
use crate::core::{EngineConfig, EngineError, GameStatus};
use crate::levels::{LevelCatalog, LevelId};
use crate::resolution::ResolutionKind;
use crate::rules::FlipOutcome;
use crate::session::Session;

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

fn outcome_name(outcome: FlipOutcome) -> &'static str {
    match outcome {
        FlipOutcome::Ignored(_) => "ignored",
        FlipOutcome::Revealed => "revealed",
        FlipOutcome::PairFlipped(ResolutionKind::Match) => "match",
        FlipOutcome::PairFlipped(ResolutionKind::Mismatch) => "mismatch",
        FlipOutcome::OutOfSteps => "out_of_steps",
    }
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}

/// Python wrapper for a game session.
///
/// Drive it from a UI loop: forward clicks to `click`, call `tick` every
/// frame with the elapsed milliseconds, render `faces()`.
#[pyclass(name = "MemorySession")]
pub struct PyMemorySession {
    inner: Session,
}

#[pymethods]
impl PyMemorySession {
    /// Create a session on the built-in levels.
    ///
    /// # Arguments
    /// - seed: RNG seed; `None` seeds from OS entropy
    /// - catalog_json: optional JSON level list replacing the built-in levels
    #[new]
    #[pyo3(signature = (seed = None, catalog_json = None))]
    fn new(seed: Option<u64>, catalog_json: Option<String>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(text) => LevelCatalog::from_json(&text).map_err(to_py_err)?,
            None => LevelCatalog::builtin(),
        };
        let config = EngineConfig {
            seed,
            ..EngineConfig::default()
        };
        let inner = Session::new(catalog, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Click a card. Returns "ignored", "revealed", "match", "mismatch" or
    /// "out_of_steps".
    fn click(&mut self, index: u32) -> PyResult<&'static str> {
        self.inner
            .on_card_click(CardIndex::new(index))
            .map(outcome_name)
            .map_err(to_py_err)
    }

    /// Advance the clock. Returns how many pairs were resolved.
    fn tick(&mut self, elapsed_ms: u64) -> usize {
        self.inner.tick(Duration::from_millis(elapsed_ms)).len()
    }

    /// Redeal the current board.
    fn reset(&mut self) -> PyResult<()> {
        self.inner.on_reset().map_err(to_py_err)
    }

    /// Select an unlocked level.
    fn select_level(&mut self, level: u32) -> PyResult<()> {
        self.inner
            .on_level_select(LevelId::new(level))
            .map_err(to_py_err)
    }

    /// Deal a free-play number board (grid 2-10).
    fn free_play(&mut self, grid_size: u32) -> PyResult<()> {
        self.inner.start_free_play(grid_size).map_err(to_py_err)
    }

    /// Visible face per cell; `None` for hidden cards.
    fn faces(&self) -> Vec<Option<String>> {
        self.inner
            .visible_faces()
            .into_iter()
            .map(|f| f.map(str::to_string))
            .collect()
    }

    #[getter]
    fn status(&self) -> &'static str {
        status_name(self.inner.state().status())
    }

    #[getter]
    fn steps(&self) -> u32 {
        self.inner.state().step_count()
    }

    /// Step budget; `None` on free-play boards.
    #[getter]
    fn max_steps(&self) -> Option<u32> {
        self.inner.state().max_steps()
    }

    #[getter]
    fn grid_size(&self) -> u32 {
        self.inner.state().grid_size()
    }

    #[getter]
    fn level(&self) -> u32 {
        self.inner.current_level().raw()
    }

    #[getter]
    fn unlocked(&self) -> u32 {
        self.inner.unlocked_level().raw()
    }

    #[getter]
    fn busy(&self) -> bool {
        self.inner.is_busy()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "MemorySession(level={}, status={}, steps={}/{})",
            self.inner.current_level().raw(),
            status_name(state.status()),
            state.step_count(),
            state.max_steps().map_or_else(|| "-".to_string(), |max| max.to_string())
        )
    }
}
