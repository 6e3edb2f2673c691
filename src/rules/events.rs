//! Event action resolution.

use tracing::info;

use super::game::Game;
use super::hand::HandTrimmer;
use crate::cards::EventEffect;
use crate::core::error::GameError;
use crate::view::View;

/// Apply an event action drawn by the current player.
///
/// - `Plague`: the current player loses shields
/// - `QueensFavor`: the current player draws, then trims
/// - `Prosperity`: every player in seating order draws, then trims
pub fn resolve_event<G, V>(game: &mut G, view: &mut V, effect: EventEffect) -> Result<(), GameError>
where
    G: Game + ?Sized,
    V: View + ?Sized,
{
    let config = game.config();
    let trimmer = HandTrimmer::new(config.hand_limit);
    let draws = config.event_draw_count as usize;
    let loss = config.plague_shield_loss;
    let clamp = config.clamp_shields_at_zero;
    let current = game.current_player();

    info!(player = %current, event = %effect, "resolving event");
    match effect {
        EventEffect::Plague => {
            game.player_mut(current).lose_shields(loss, clamp);
            view.display_message(&format!("{current} loses {loss} shields!"));
        }
        EventEffect::QueensFavor => {
            game.draw_into_hand(current, draws)?;
            view.display_message(&format!("{current} draws {draws} cards."));
            trimmer.trim(game, view, current)?;
        }
        EventEffect::Prosperity => {
            view.display_message(&format!("All players draw {draws} cards."));
            for player in game.player_ids() {
                game.draw_into_hand(player, draws)?;
                trimmer.trim(game, view, player)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardCatalog, CardId};
    use crate::core::{GameConfig, PlayerId};
    use crate::games::round_table::{RoundTableGame, RoundTableGameBuilder};
    use crate::view::ScriptedView;

    fn table(config: GameConfig, deck: u32) -> RoundTableGame {
        let mut game = RoundTableGameBuilder::new()
            .config(config.with_seed(3).with_starting_hand_size(0))
            .catalog(CardCatalog::new())
            .build()
            .unwrap();
        game.initialize().unwrap();
        for i in 0..deck {
            game.adventure_deck_mut().add_card(Card::foe(CardId(500 + i), 10));
        }
        game
    }

    #[test]
    fn test_plague_clamps_at_zero() {
        let mut game = table(GameConfig::new(2), 0);
        game.player_mut(PlayerId(0)).add_shields(1);
        let mut view = ScriptedView::new();

        resolve_event(&mut game, &mut view, EventEffect::Plague).unwrap();

        assert_eq!(game.player(PlayerId(0)).shields(), 0);
        assert_eq!(view.messages, vec!["P1 loses 2 shields!"]);
    }

    #[test]
    fn test_plague_can_go_negative() {
        let mut game = table(GameConfig::new(2).allow_negative_shields(), 0);
        game.player_mut(PlayerId(0)).add_shields(1);

        resolve_event(&mut game, &mut ScriptedView::new(), EventEffect::Plague).unwrap();

        assert_eq!(game.player(PlayerId(0)).shields(), -1);
        assert_eq!(game.player(PlayerId(1)).shields(), 0);
    }

    #[test]
    fn test_queens_favor_draws_and_trims() {
        let mut game = table(GameConfig::new(2), 4);
        for i in 0..11 {
            game.player_mut(PlayerId(0)).add_card(Card::foe(CardId(i + 1), 5));
        }
        let mut view = ScriptedView::new().with_cards([1]);

        resolve_event(&mut game, &mut view, EventEffect::QueensFavor).unwrap();

        assert_eq!(game.player(PlayerId(0)).hand_size(), 12);
        assert_eq!(game.player(PlayerId(1)).hand_size(), 0);
        assert_eq!(game.adventure_deck().size(), 2);
        assert_eq!(view.card_prompts, vec![PlayerId(0)]);
    }

    #[test]
    fn test_prosperity_deals_in_seating_order() {
        let mut game = table(GameConfig::new(3), 6);
        let mut view = ScriptedView::new();

        resolve_event(&mut game, &mut view, EventEffect::Prosperity).unwrap();

        for player in game.players() {
            assert_eq!(player.hand_size(), 2);
        }
        // Draws come off the top, so the first seat gets the last cards added.
        let first: Vec<u32> = game.player(PlayerId(0)).hand().iter().map(|c| c.id.raw()).collect();
        assert_eq!(first, vec![505, 504]);
        assert!(game.adventure_deck().is_empty());
    }

    #[test]
    fn test_exhausted_deck_is_fatal() {
        let mut game = table(GameConfig::new(2), 1);
        let result = resolve_event(&mut game, &mut ScriptedView::new(), EventEffect::QueensFavor);
        assert!(matches!(result, Err(GameError::Deck(_))));
    }
}
