//! Core engine types: state, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, FreePlayRules};
pub use error::{EngineError, LevelRejection};
pub use rng::GameRng;
pub use state::{GameMode, GameState, GameStatus};
