//! Core types: players, RNG, configuration, errors.
//!
//! These are the building blocks every other module leans on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ChoiceError, ConfigError, DeckError, GameError, PlacementError, StageError};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
