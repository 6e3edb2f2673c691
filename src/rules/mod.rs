//! Game rules: the game boundary, quest lifecycle, events and the turn loop.
//!
//! Rules code calls into a `Game` for cards and player state and into a
//! `View` for every decision. It never touches a concrete table directly.

pub mod events;
pub mod game;
pub mod hand;
pub mod quest_engine;
pub mod turn;

pub use events::resolve_event;
pub use game::Game;
pub use hand::HandTrimmer;
pub use quest_engine::{QuestEngine, QuestOutcome, QuestPhase};
pub use turn::{TurnController, TurnOutcome};
