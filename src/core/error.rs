//! Error types.
//!
//! Two classes of failure exist in the engine:
//!
//! - **Recoverable input errors** (`PlacementError`, `StageError`, `ChoiceError`):
//!   reported to the view, and the same decision is asked again. A rejected
//!   placement never mutates state.
//! - **Fatal errors** (`GameError`): resource exhaustion, bad configuration,
//!   or a view that can no longer answer.
//!   These propagate to the caller, which decides whether the game ends.

use thiserror::Error;

use crate::cards::WeaponType;
use crate::view::ViewError;

/// Drawing from a deck whose draw and discard piles are both empty.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("no cards left in deck")]
    Empty,
}

/// A card could not be placed into a stage or an attack.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("a stage can hold only one foe")]
    DuplicateFoe,
    #[error("a {0} is already in use")]
    DuplicateWeapon(WeaponType),
    #[error("only foe and weapon cards can be placed in a stage")]
    NotAdventureCard,
    #[error("only weapon cards can be used in attacks")]
    NotAWeapon,
    #[error("that card is already committed to this quest")]
    AlreadyCommitted,
}

/// A built stage was refused by its quest.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("stage cannot be empty: place a foe")]
    Invalid,
    #[error("insufficient value for this stage ({value} < {previous})")]
    InsufficientValue { value: u32, previous: u32 },
}

/// A card choice returned by the view could not be used.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("choice {choice} is out of range (hand has {hand_size} cards)")]
    OutOfRange { choice: usize, hand_size: usize },
    #[error("a card must be chosen")]
    Mandatory,
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max} (got {value})")]
    PlayerCount { min: usize, max: usize, value: usize },
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u32,
        value: u32,
    },
    #[error("starting hand size {starting} exceeds hand limit {limit}")]
    StartingHandTooLarge { starting: usize, limit: usize },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fatal errors that end the current operation.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    View(#[from] ViewError),
}
