//! The game boundary.
//!
//! Rules code gets players, decks and turn order through `Game`. It never
//! reaches into a concrete game's storage, so the quest engine and turn loop
//! work against any table implementation.

use crate::cards::{Card, CardId};
use crate::core::config::GameConfig;
use crate::core::error::{DeckError, GameError};
use crate::core::player::{Player, PlayerId};

/// Game boundary trait.
///
/// ## Implementation Notes
///
/// - `player_ids` returns seating order; turn order and sponsorship offers follow it
/// - `player` / `player_mut` may panic on an ID not returned by `player_ids`
/// - `draw_adventure_card` fails only when both adventure piles are empty
pub trait Game {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Set up a fresh game: build and shuffle decks, deal hands, reset shields.
    fn initialize(&mut self) -> Result<(), GameError>;

    /// Whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// All players in seating order.
    fn player_ids(&self) -> Vec<PlayerId>;

    fn player(&self, id: PlayerId) -> &Player;

    fn player_mut(&mut self, id: PlayerId) -> &mut Player;

    fn draw_event_card(&mut self) -> Result<Card, DeckError>;

    /// Return a resolved event card to its deck's discard pile.
    fn discard_event_card(&mut self, card: Card);

    fn draw_adventure_card(&mut self) -> Result<Card, DeckError>;

    fn discard_adventure_card(&mut self, card: Card);

    /// Pass the turn to the next seat.
    fn next_turn(&mut self);

    fn is_game_over(&self) -> bool;

    /// Players who have reached the win threshold, in seating order.
    fn winners(&self) -> Vec<PlayerId>;

    // === Convenience Methods ===

    /// Seating order starting at `first` and wrapping around.
    fn seats_from(&self, first: PlayerId) -> Vec<PlayerId> {
        let seats = self.player_ids();
        let start = seats.iter().position(|&p| p == first).unwrap_or(0);
        seats[start..].iter().chain(&seats[..start]).copied().collect()
    }

    /// Draw `count` adventure cards into a player's hand.
    ///
    /// Cards drawn before a failure stay in the hand.
    fn draw_into_hand(&mut self, player: PlayerId, count: usize) -> Result<(), DeckError> {
        for _ in 0..count {
            let card = self.draw_adventure_card()?;
            self.player_mut(player).add_card(card);
        }
        Ok(())
    }

    /// Move a card from a player's hand to the adventure discard pile.
    ///
    /// Returns `false` if the card was not in the hand.
    fn discard_from_hand(&mut self, player: PlayerId, card: CardId) -> bool {
        match self.player_mut(player).remove_card(card) {
            Some(card) => {
                self.discard_adventure_card(card);
                true
            }
            None => false,
        }
    }
}
