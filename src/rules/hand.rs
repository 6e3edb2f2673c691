//! Hand size enforcement.

use tracing::debug;

use super::game::Game;
use crate::core::error::{ChoiceError, GameError};
use crate::core::player::PlayerId;
use crate::view::{View, DONE};

/// Enforces the maximum hand size after any card influx.
///
/// While a hand is over the limit the player must pick a card to discard.
/// There is no "skip": the done answer is refused and asked again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandTrimmer {
    limit: usize,
}

impl Default for HandTrimmer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl HandTrimmer {
    pub const DEFAULT_LIMIT: usize = 12;

    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Trim `player`'s hand down to the limit.
    ///
    /// Each chosen card goes to the adventure discard pile. Returns the number
    /// of cards discarded.
    pub fn trim<G, V>(&self, game: &mut G, view: &mut V, player: PlayerId) -> Result<usize, GameError>
    where
        G: Game + ?Sized,
        V: View + ?Sized,
    {
        let mut discarded = 0;

        while game.player(player).hand_size() > self.limit {
            let hand = game.player(player);
            let excess = hand.hand_size() - self.limit;
            view.display_player_hand(hand);
            view.display_message(&format!("{player}, you must discard {excess} card(s)."));

            let choice = view.card_choice(game.player(player))?;
            if choice == DONE {
                view.display_error(&ChoiceError::Mandatory.to_string());
                continue;
            }
            let Some(card) = game.player(player).card_at_choice(choice).map(|c| c.id) else {
                let hand_size = game.player(player).hand_size();
                view.display_error(&ChoiceError::OutOfRange { choice, hand_size }.to_string());
                continue;
            };

            game.discard_from_hand(player, card);
            discarded += 1;
            debug!(%player, card = card.raw(), "trimmed card from hand");
        }

        Ok(discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardCatalog, CardId};
    use crate::games::round_table::{RoundTableGame, RoundTableGameBuilder};
    use crate::view::ScriptedView;

    fn table_with_hand(size: u32) -> RoundTableGame {
        let mut game = RoundTableGameBuilder::new()
            .player_count(2)
            .seed(1)
            .starting_hand_size(0)
            .catalog(CardCatalog::new())
            .build()
            .unwrap();
        game.initialize().unwrap();
        for i in 1..=size {
            game.player_mut(PlayerId(0)).add_card(Card::foe(CardId(i), 5));
        }
        game
    }

    #[test]
    fn test_no_prompt_at_limit() {
        let mut game = table_with_hand(12);
        let mut view = ScriptedView::new();

        let discarded = HandTrimmer::default().trim(&mut game, &mut view, PlayerId(0)).unwrap();

        assert_eq!(discarded, 0);
        assert!(view.card_prompts.is_empty());
    }

    #[test]
    fn test_trims_to_limit() {
        let mut game = table_with_hand(14);
        let mut view = ScriptedView::new().with_cards([1, 1]);

        let discarded = HandTrimmer::default().trim(&mut game, &mut view, PlayerId(0)).unwrap();

        assert_eq!(discarded, 2);
        assert_eq!(game.player(PlayerId(0)).hand_size(), 12);
        let pile: Vec<_> = game.adventure_deck().discard_pile().iter().map(|c| c.id).collect();
        assert_eq!(pile, vec![CardId(1), CardId(2)]);
        assert!(game.player(PlayerId(0)).hand().iter().all(|c| c.id.raw() > 2));
    }

    #[test]
    fn test_done_and_out_of_range_are_reprompted() {
        let mut game = table_with_hand(13);
        let mut view = ScriptedView::new().with_cards([0, 14, 13]);

        HandTrimmer::default().trim(&mut game, &mut view, PlayerId(0)).unwrap();

        assert_eq!(view.errors.len(), 2);
        assert_eq!(view.errors[0], "a card must be chosen");
        assert!(view.errors[1].contains("out of range"));
        assert_eq!(game.player(PlayerId(0)).hand_size(), 12);
        assert_eq!(game.adventure_deck().discard_pile()[0].id, CardId(13));
    }

    #[test]
    fn test_closed_view_is_fatal() {
        let mut game = table_with_hand(13);
        let mut view = ScriptedView::new();
        let result = HandTrimmer::new(12).trim(&mut game, &mut view, PlayerId(0));
        assert!(matches!(result, Err(GameError::View(_))));
    }
}
