//! The turn loop.

use tracing::{info, warn};

use super::events::resolve_event;
use super::game::Game;
use super::quest_engine::{QuestEngine, QuestOutcome};
use crate::cards::{CardKind, EventEffect};
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::view::View;

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Quest(QuestOutcome),
    Event(EventEffect),
    /// The event deck produced an adventure card; nothing was resolved.
    Skipped,
}

/// Drives a game turn by turn until someone wins.
///
/// ## Example
///
/// ```
/// use round_table::games::round_table::RoundTableGameBuilder;
/// use round_table::rules::TurnController;
/// use round_table::view::ScriptedView;
///
/// let game = RoundTableGameBuilder::new().player_count(2).seed(7).build().unwrap();
/// let mut controller = TurnController::new(game, ScriptedView::new());
///
/// // The scripted view has no answers queued, so the first prompt fails.
/// assert!(controller.run().is_err());
/// ```
pub struct TurnController<G, V> {
    game: G,
    view: V,
}

impl<G: Game, V: View> TurnController<G, V> {
    pub fn new(game: G, view: V) -> Self {
        Self { game, view }
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (G, V) {
        (self.game, self.view)
    }

    /// Initialize, play turns until the game is over, then announce winners.
    pub fn run(&mut self) -> Result<Vec<PlayerId>, GameError> {
        self.game.initialize()?;
        while !self.game.is_game_over() {
            self.play_turn()?;
        }
        Ok(self.announce_winners())
    }

    /// Play the current player's turn and pass to the next seat.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let current = self.game.current_player();
        self.view.clear_screen();
        self.view.display_message(&format!("It's {current}'s turn!"));
        self.view.display_player_hand(self.game.player(current));

        let card = self.game.draw_event_card()?;
        info!(player = %current, card = %card, "event card drawn");
        self.view.display_message(&format!("Drew event card: {card}"));

        let outcome = match card.kind {
            CardKind::Quest { stages } => {
                TurnOutcome::Quest(QuestEngine::new(&mut self.game, &mut self.view).run(stages)?)
            }
            CardKind::Event(effect) => {
                resolve_event(&mut self.game, &mut self.view, effect)?;
                TurnOutcome::Event(effect)
            }
            CardKind::Weapon { .. } | CardKind::Foe { .. } => {
                warn!(card = %card, "adventure card found in event deck");
                TurnOutcome::Skipped
            }
        };
        self.game.discard_event_card(card);

        self.end_turn()?;
        Ok(outcome)
    }

    fn end_turn(&mut self) -> Result<(), GameError> {
        self.view.display_message("End of turn");
        self.view.wait_for_key_press()?;
        self.game.next_turn();
        Ok(())
    }

    fn announce_winners(&mut self) -> Vec<PlayerId> {
        let winners = self.game.winners();
        if winners.is_empty() {
            self.view.display_message("Game over! No winners yet.");
        } else {
            self.view.display_message("Game over! Winners:");
            for &winner in &winners {
                let shields = self.game.player(winner).shields();
                self.view.display_message(&format!("{winner} with {shields} shields!"));
            }
        }
        info!(winners = winners.len(), "game over");
        winners
    }
}
