//! Player identification and per-player card state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 255 players.
//!
//! ## Player
//!
//! A player's hand (insertion-ordered) and shield count. The hand is only
//! mutated through `add_card` and `remove_card`; everything else reads it.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Seat identifier.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`, shown as `P1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use round_table::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 as u16 + 1)
    }
}

/// A seated player.
///
/// Shields are signed: with `clamp_shields_at_zero` disabled a Plague can push
/// them below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Vec<Card>,
    shields: i32,
}

impl Player {
    /// Create a player with an empty hand and no shields.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            shields: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The hand, in the order cards were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Get the card at a 1-based choice index, as returned by the view.
    #[must_use]
    pub fn card_at_choice(&self, choice: usize) -> Option<&Card> {
        choice.checked_sub(1).and_then(|i| self.hand.get(i))
    }

    /// Append a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove a card from the hand by identity.
    ///
    /// Returns `None` if the card is not in the hand.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    #[must_use]
    pub fn shields(&self) -> i32 {
        self.shields
    }

    pub fn add_shields(&mut self, amount: u32) {
        self.shields = self.shields.saturating_add(amount as i32);
    }

    /// Lose shields. With `clamp` the count never drops below zero.
    pub fn lose_shields(&mut self, amount: u32, clamp: bool) {
        let next = self.shields.saturating_sub(amount as i32);
        self.shields = if clamp { next.max(0) } else { next };
    }

    /// Reset hand and shields for a new game.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.shields = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} shields)", self.id, self.shields)
    }
}
