//! Card piles.
//!
//! ## Key Types
//!
//! - `Deck`: Draw pile + discard pile with reshuffle-on-exhaustion

pub mod deck;

pub use deck::Deck;
