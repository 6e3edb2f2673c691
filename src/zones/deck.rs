//! Draw/discard deck with reshuffle-on-exhaustion.
//!
//! A `Deck` holds two piles: a draw pile (last-in, first-out) and a discard
//! pile. `draw_card` is the single entry point for taking cards out: when the
//! draw pile is empty it recycles the discard pile, shuffled, before drawing.
//! Callers never see the two-pile bookkeeping.
//!
//! ## Usage
//!
//! ```
//! use round_table::core::GameRng;
//! use round_table::zones::Deck;
//!
//! let mut deck = Deck::new(GameRng::new(42));
//! deck.add_card(1);
//! deck.discard(2);
//!
//! assert_eq!(deck.draw_card(), Ok(1));
//! assert_eq!(deck.draw_card(), Ok(2)); // recycled from the discard pile
//! assert!(deck.draw_card().is_err());
//! ```

use tracing::{debug, warn};

use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// Two-pile deck of cards of one family.
///
/// The multiset of cards across both piles only changes through `add_card`,
/// `draw_card` and `discard`.
#[derive(Clone, Debug)]
pub struct Deck<T> {
    /// Draw pile; the last element is the top.
    draw_pile: Vec<T>,
    discard_pile: Vec<T>,
    rng: GameRng,
}

impl<T> Deck<T> {
    /// Create an empty deck that shuffles with `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Create a deck whose draw pile holds `cards` (last element on top).
    #[must_use]
    pub fn from_cards(cards: Vec<T>, rng: GameRng) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Put a card on top of the draw pile.
    pub fn add_card(&mut self, card: T) {
        self.draw_pile.push(card);
    }

    /// Draw the top card.
    ///
    /// An empty draw pile is first refilled from the shuffled discard pile.
    /// Fails only when both piles are empty.
    pub fn draw_card(&mut self) -> Result<T, DeckError> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.reshuffle_discard_pile();
        }
        match self.draw_pile.pop() {
            Some(card) => Ok(card),
            None => {
                warn!("draw from exhausted deck");
                Err(DeckError::Empty)
            }
        }
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: T) {
        self.discard_pile.push(card);
    }

    /// Randomly permute the draw pile in place.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn size(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards waiting in the discard pile.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// True when both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[T] {
        &self.discard_pile
    }

    /// Move every card out of both piles.
    pub fn clear(&mut self) -> Vec<T> {
        let mut cards = std::mem::take(&mut self.draw_pile);
        cards.append(&mut self.discard_pile);
        cards
    }

    fn reshuffle_discard_pile(&mut self) {
        debug!(cards = self.discard_pile.len(), "reshuffling discard pile into draw pile");
        std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
    }
}
