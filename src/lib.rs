//! # round-table
//!
//! Quest lifecycle and card circulation engine for a multiplayer quest card game.
//!
//! Players sponsor multi-stage quests built from foes and weapons, other players
//! choose to join, participants draw and attack each stage in turn, and the
//! survivors of the final stage earn shields.
//!
//! ## Design Principles
//!
//! 1. **Closed card set**: `CardKind` is a tagged union over weapons, foes,
//!    quests and event actions. Rules match on it directly.
//!
//! 2. **Two boundaries**: Rules code reaches players and decks only through
//!    the `Game` trait, and player decisions only through the `View` trait.
//!
//! 3. **Recoverable vs fatal**: Input mistakes are reported and re-asked;
//!    only deck exhaustion, bad configuration and a closed view escape as
//!    `GameError`.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, RNG, configuration, errors
//! - `cards`: The card set and deck composition
//! - `zones`: Two-pile decks with reshuffle-on-exhaustion
//! - `quest`: Stages, attacks, and the quest aggregate
//! - `rules`: Game boundary, quest engine, hand trimming, events, turn loop
//! - `view`: View boundary, scripted and terminal views
//! - `games`: The standard game table

pub mod cards;
pub mod core;
pub mod games;
pub mod quest;
pub mod rules;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ChoiceError, ConfigError, DeckError, GameConfig, GameError, GameRng, PlacementError, Player,
    PlayerId, StageError,
};

pub use crate::cards::{Card, CardCatalog, CardFamily, CardId, CardKind, EventEffect, WeaponType};

pub use crate::zones::Deck;

pub use crate::quest::{Attack, Quest, Stage};

pub use crate::rules::{
    resolve_event, Game, HandTrimmer, QuestEngine, QuestOutcome, QuestPhase, TurnController,
    TurnOutcome,
};

pub use crate::view::{ScriptedView, TerminalView, View, ViewError};

pub use crate::games::round_table::{RoundTableGame, RoundTableGameBuilder};
