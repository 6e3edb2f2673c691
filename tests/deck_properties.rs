//! Deck and hand-size properties.

use proptest::prelude::*;
use round_table::{
    Card, CardCatalog, CardId, Deck, DeckError, Game, GameRng, HandTrimmer, PlayerId,
    RoundTableGameBuilder, ScriptedView,
};

#[test]
fn test_reshuffle_on_exhaustion() {
    let mut deck = Deck::from_cards(vec![1u32], GameRng::new(5));
    for card in [2, 3, 4] {
        deck.discard(card);
    }

    assert_eq!(deck.draw_card(), Ok(1));
    assert_eq!(deck.size(), 0);

    let second = deck.draw_card().unwrap();
    assert!([2, 3, 4].contains(&second));
    assert_eq!(deck.size(), 2);
    assert_eq!(deck.discard_size(), 0);

    deck.draw_card().unwrap();
    deck.draw_card().unwrap();
    assert_eq!(deck.draw_card(), Err(DeckError::Empty));
}

#[test]
fn test_empty_deck_fails() {
    let mut deck: Deck<u32> = Deck::new(GameRng::new(0));
    assert_eq!(deck.draw_card(), Err(DeckError::Empty));
    assert!(deck.is_empty());
}

#[test]
fn test_same_seed_same_deal() {
    let deal = |seed| {
        let mut game = RoundTableGameBuilder::new().player_count(3).seed(seed).build().unwrap();
        game.initialize().unwrap();
        game.players()
            .iter()
            .map(|p| p.hand().iter().map(|c| c.id).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };
    assert_eq!(deal(77), deal(77));
    assert_ne!(deal(77), deal(78));
}

proptest! {
    /// Draws and discards never create or destroy cards.
    #[test]
    fn prop_deck_conserves_cards(
        size in 1usize..40,
        ops in prop::collection::vec(any::<bool>(), 0..120),
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::from_cards((0..size as u32).collect(), GameRng::new(seed));
        let mut held = Vec::new();

        for draw in ops {
            if draw {
                match deck.draw_card() {
                    Ok(card) => held.push(card),
                    Err(DeckError::Empty) => {
                        prop_assert_eq!(held.len(), size);
                    }
                }
            } else if let Some(card) = held.pop() {
                deck.discard(card);
            }
            prop_assert_eq!(deck.total() + held.len(), size);
        }

        let mut all = deck.clear();
        all.extend(held);
        all.sort_unstable();
        prop_assert_eq!(all, (0..size as u32).collect::<Vec<_>>());
    }

    /// Trimming leaves exactly the limit and discards the excess.
    #[test]
    fn prop_trim_to_limit(hand in 0u32..30, limit in 1usize..15) {
        let mut game = RoundTableGameBuilder::new()
            .player_count(2)
            .seed(1)
            .starting_hand_size(0)
            .catalog(CardCatalog::new())
            .build()
            .unwrap();
        game.initialize().unwrap();
        for i in 0..hand {
            game.player_mut(PlayerId(1)).add_card(Card::foe(CardId(i + 1), 5));
        }
        let excess = (hand as usize).saturating_sub(limit);
        let mut view = ScriptedView::new().with_cards(std::iter::repeat(1).take(excess));

        let discarded = HandTrimmer::new(limit).trim(&mut game, &mut view, PlayerId(1)).unwrap();

        prop_assert_eq!(discarded, excess);
        prop_assert_eq!(game.player(PlayerId(1)).hand_size(), (hand as usize).min(limit));
        prop_assert_eq!(game.adventure_deck().discard_size(), excess);
        prop_assert!(view.errors.is_empty());
    }

    /// Dealing any table keeps every card of the standard set in play.
    #[test]
    fn prop_deal_conserves_catalog(players in 2usize..=8, seed in any::<u64>()) {
        let mut game = RoundTableGameBuilder::new().player_count(players).seed(seed).build().unwrap();
        game.initialize().unwrap();

        prop_assert_eq!(game.cards_in_circulation(), 117);
        prop_assert_eq!(game.event_deck().size(), 17);
        prop_assert_eq!(game.adventure_deck().size(), 100 - 12 * players);
        for player in game.players() {
            prop_assert_eq!(player.hand_size(), 12);
        }
    }
}
