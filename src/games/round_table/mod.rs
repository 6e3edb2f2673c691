//! The standard quest game.
//!
//! - 2-8 players, each dealt 12 adventure cards
//! - 100-card adventure deck (foes and weapons), 17-card event deck
//!   (quests and event actions)
//! - On your turn: draw an event card, then run the quest or resolve the event
//! - First player to 7 shields wins

mod game;

pub use game::{RoundTableGame, RoundTableGameBuilder};
