//! A view that replays queued answers.
//!
//! Used by tests and headless simulations. Answers are consumed in the order
//! prompts are asked; an exhausted queue answers with `ViewError::Closed`
//! rather than blocking. Everything displayed is recorded for inspection.

use std::collections::VecDeque;

use super::{View, ViewError};
use crate::core::player::{Player, PlayerId};
use crate::quest::{Attack, Stage};

/// Replays scripted answers and records output.
///
/// ```
/// use round_table::core::{Player, PlayerId};
/// use round_table::view::{ScriptedView, View};
///
/// let mut view = ScriptedView::new().with_yes_no([true]).with_cards([2, 0]);
/// let player = Player::new(PlayerId::new(0));
///
/// assert!(view.yes_no_choice("Sponsor?").unwrap());
/// assert_eq!(view.card_choice(&player).unwrap(), 2);
/// assert_eq!(view.card_choice(&player).unwrap(), 0);
/// assert!(view.card_choice(&player).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedView {
    yes_no: VecDeque<bool>,
    cards: VecDeque<usize>,

    /// Messages passed to `display_message`, in order.
    pub messages: Vec<String>,
    /// Messages passed to `display_error`, in order.
    pub errors: Vec<String>,
    /// Prompts passed to `yes_no_choice`, in order.
    pub prompts: Vec<String>,
    /// Players asked for a card choice, in order.
    pub card_prompts: Vec<PlayerId>,
    /// Stages shown through `display_current_stage`.
    pub stages_shown: Vec<Stage>,
    /// Attacks shown through `display_attack`.
    pub attacks_shown: Vec<Attack>,
}

impl ScriptedView {
    /// Create a view with no queued answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue yes/no answers.
    #[must_use]
    pub fn with_yes_no(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.yes_no.extend(answers);
        self
    }

    /// Queue card choices.
    #[must_use]
    pub fn with_cards(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.cards.extend(choices);
        self
    }

    /// Queue more yes/no answers.
    pub fn push_yes_no(&mut self, answers: impl IntoIterator<Item = bool>) {
        self.yes_no.extend(answers);
    }

    /// Queue more card choices.
    pub fn push_cards(&mut self, choices: impl IntoIterator<Item = usize>) {
        self.cards.extend(choices);
    }

    /// Answers not yet consumed: (yes/no, card choices).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.yes_no.len(), self.cards.len())
    }
}

impl View for ScriptedView {
    fn display_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn display_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn display_player_hand(&mut self, _player: &Player) {}

    fn display_current_stage(&mut self, stage: &Stage) {
        self.stages_shown.push(stage.clone());
    }

    fn display_attack(&mut self, attack: &Attack) {
        self.attacks_shown.push(attack.clone());
    }

    fn yes_no_choice(&mut self, prompt: &str) -> Result<bool, ViewError> {
        self.prompts.push(prompt.to_string());
        self.yes_no.pop_front().ok_or(ViewError::Closed)
    }

    fn card_choice(&mut self, player: &Player) -> Result<usize, ViewError> {
        self.card_prompts.push(player.id());
        self.cards.pop_front().ok_or(ViewError::Closed)
    }

    fn wait_for_key_press(&mut self) -> Result<(), ViewError> {
        Ok(())
    }

    fn clear_screen(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_output() {
        let mut view = ScriptedView::new();
        view.display_message("hello");
        view.display_error("oops");
        view.display_current_stage(&Stage::new());

        assert_eq!(view.messages, vec!["hello"]);
        assert_eq!(view.errors, vec!["oops"]);
        assert_eq!(view.stages_shown.len(), 1);
    }

    #[test]
    fn test_exhausted_queue_closes() {
        let mut view = ScriptedView::new().with_yes_no([false]);
        assert!(!view.yes_no_choice("?").unwrap());
        assert!(matches!(view.yes_no_choice("?"), Err(ViewError::Closed)));
        assert_eq!(view.prompts.len(), 2);
    }

    #[test]
    fn test_push_and_remaining() {
        let mut view = ScriptedView::new();
        view.push_cards([1, 2, 3]);
        view.push_yes_no([true]);
        assert_eq!(view.remaining(), (1, 3));

        let player = Player::new(PlayerId::new(1));
        view.card_choice(&player).unwrap();
        assert_eq!(view.card_prompts, vec![PlayerId::new(1)]);
        assert_eq!(view.remaining(), (1, 2));
    }
}
