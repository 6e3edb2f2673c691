//! Quest lifecycle.
//!
//! The `QuestEngine` runs one quest from sponsorship to cleanup:
//!
//! ```text
//! SponsorSelection ─┬─> Unsponsored ──────────────────────────────┐
//!                   └─> Building ─┬─> BuildFailed ────────────────┤
//!                                 └─> ParticipantSelection        │
//!                                       └─> ResolvingStage(i)     │
//!                                             ├─> StageSurvived(i) ─> next i / Completed
//!                                             └─> StageEliminated(i) ─> Completed
//!                                   Completed ─> Cleanup ─> Done <┘
//! ```
//!
//! Input mistakes (bad index, illegal placement, weak stage) are shown to the
//! view and the same decision is asked again. Only `GameError` leaves the engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::game::Game;
use super::hand::HandTrimmer;
use crate::cards::{Card, CardId, WeaponType};
use crate::core::error::{ChoiceError, GameError, PlacementError};
use crate::core::player::PlayerId;
use crate::quest::{Attack, Quest, Stage};
use crate::view::{View, DONE};

/// Where a quest is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestPhase {
    SponsorSelection,
    Building,
    ParticipantSelection,
    /// Resolving the stage at this 0-based index.
    ResolvingStage(usize),
    /// At least one participant beat the stage.
    StageSurvived(usize),
    /// Every remaining participant was eliminated by the stage.
    StageEliminated(usize),
    Completed,
    Cleanup,
    Unsponsored,
    BuildFailed,
    Done,
}

/// How a quest ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestOutcome {
    /// Nobody accepted sponsorship.
    Unsponsored,
    /// The sponsor could not build every stage.
    BuildFailed { sponsor: PlayerId },
    /// The quest was resolved and cleaned up.
    Completed(Quest),
}

impl QuestOutcome {
    /// Winners of a completed quest; empty otherwise.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            QuestOutcome::Completed(quest) => quest.winners(),
            _ => &[],
        }
    }
}

/// Runs a single quest against a game and a view.
///
/// The engine owns the quest for its lifetime and borrows the game and view.
pub struct QuestEngine<'a, G: Game + ?Sized, V: View + ?Sized> {
    game: &'a mut G,
    view: &'a mut V,
    trimmer: HandTrimmer,
    phase: QuestPhase,
    history: Vec<QuestPhase>,
}

impl<'a, G: Game + ?Sized, V: View + ?Sized> QuestEngine<'a, G, V> {
    /// Create an engine using the game's configured hand limit.
    pub fn new(game: &'a mut G, view: &'a mut V) -> Self {
        let trimmer = HandTrimmer::new(game.config().hand_limit);
        Self {
            game,
            view,
            trimmer,
            phase: QuestPhase::SponsorSelection,
            history: Vec::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuestPhase {
        self.phase
    }

    /// Every phase entered so far, in order.
    #[must_use]
    pub fn history(&self) -> &[QuestPhase] {
        &self.history
    }

    /// Run a quest of `stage_count` stages drawn by the current player.
    pub fn run(&mut self, stage_count: u32) -> Result<QuestOutcome, GameError> {
        self.enter(QuestPhase::SponsorSelection);
        let Some(sponsor) = self.find_sponsor()? else {
            self.enter(QuestPhase::Unsponsored);
            self.view.display_message("No one sponsored the quest.");
            self.enter(QuestPhase::Done);
            return Ok(QuestOutcome::Unsponsored);
        };
        info!(%sponsor, stage_count, "quest sponsored");

        let mut quest = Quest::new(stage_count, sponsor);
        self.enter(QuestPhase::Building);
        if !self.build_quest(&mut quest)? {
            self.enter(QuestPhase::BuildFailed);
            self.view.display_message("Failed to build quest properly.");
            self.enter(QuestPhase::Done);
            return Ok(QuestOutcome::BuildFailed { sponsor });
        }

        self.enter(QuestPhase::ParticipantSelection);
        let active = self.select_participants(&mut quest)?;

        self.resolve_stages(&mut quest, active)?;
        self.enter(QuestPhase::Completed);

        self.enter(QuestPhase::Cleanup);
        self.cleanup(&quest)?;
        self.enter(QuestPhase::Done);

        Ok(QuestOutcome::Completed(quest))
    }

    fn enter(&mut self, phase: QuestPhase) {
        info!(from = ?self.phase, to = ?phase, "quest phase");
        self.phase = phase;
        self.history.push(phase);
    }

    // === Sponsorship ===

    /// Offer the quest around the table, starting with the current player.
    fn find_sponsor(&mut self) -> Result<Option<PlayerId>, GameError> {
        let first = self.game.current_player();
        for player in self.game.seats_from(first) {
            self.view.display_player_hand(self.game.player(player));
            let prompt = format!("{player}, do you want to sponsor this quest?");
            if self.view.yes_no_choice(&prompt)? {
                return Ok(Some(player));
            }
        }
        Ok(None)
    }

    // === Building ===

    /// Build every stage. Returns `false` once the sponsor cannot possibly finish.
    fn build_quest(&mut self, quest: &mut Quest) -> Result<bool, GameError> {
        let sponsor = quest.sponsor();
        self.view.display_player_hand(self.game.player(sponsor));
        for stage_number in 1..=quest.stage_count() {
            self.view.display_message(&format!("Building stage {stage_number}"));
            let Some(stage) = self.build_stage(quest)? else {
                warn!(%sponsor, stage = stage_number, "sponsor cannot build quest");
                return Ok(false);
            };
            info!(%sponsor, stage = stage_number, value = stage.value(), "stage built");
        }
        Ok(true)
    }

    /// Build one stage and commit it to the quest. Returns a copy of the stage,
    /// or `None` when no further choice can make it acceptable.
    fn build_stage(&mut self, quest: &mut Quest) -> Result<Option<Stage>, GameError> {
        let sponsor = quest.sponsor();
        let mut stage = Stage::new();

        loop {
            if !self.stage_reachable(quest, &stage) {
                return Ok(None);
            }
            let choice = self.view.card_choice(self.game.player(sponsor))?;
            if choice == DONE {
                match quest.add_stage(stage.clone()) {
                    Ok(()) => return Ok(Some(stage)),
                    Err(err) => {
                        debug!(%sponsor, %err, "stage refused");
                        self.view.display_error(&err.to_string());
                        continue;
                    }
                }
            }

            let Some(card) = self.chosen_card(sponsor, choice) else {
                continue;
            };
            let placed = if quest.is_committed(card.id) {
                Err(PlacementError::AlreadyCommitted)
            } else {
                stage.add_card(&card)
            };
            match placed {
                Ok(()) => {
                    debug!(%sponsor, card = %card, value = stage.value(), "card placed in stage");
                    self.view.display_current_stage(&stage);
                }
                Err(err) => {
                    debug!(%sponsor, card = %card, %err, "placement rejected");
                    self.view.display_error(&err.to_string());
                }
            }
        }
    }

    /// Whether the sponsor's free cards can still complete `stage` and leave a
    /// foe for every later stage.
    ///
    /// Free cards are hand cards neither committed to the quest nor already in
    /// `stage`. The best finish adds the strongest free foe (if the stage has
    /// none) and the strongest free weapon of every type not yet in the stage.
    fn stage_reachable(&self, quest: &Quest, stage: &Stage) -> bool {
        let hand = self.game.player(quest.sponsor()).hand();
        let free: Vec<&Card> = hand
            .iter()
            .filter(|c| !quest.is_committed(c.id) && !stage.contains(c.id))
            .collect();

        let built = quest.stages().len() as u32;
        let later_stages = quest.stage_count().saturating_sub(built + 1) as usize;
        let free_foes = free.iter().filter(|c| c.is_foe()).count();
        let needed_foes = if stage.is_valid() { later_stages } else { later_stages + 1 };
        if free_foes < needed_foes {
            return false;
        }

        let foe_bonus = if stage.is_valid() {
            0
        } else {
            free.iter().filter(|c| c.is_foe()).map(|c| c.value()).max().unwrap_or(0)
        };
        let weapon_bonus: u32 = WeaponType::ALL
            .iter()
            .filter(|&&w| !stage.cards().iter().any(|c| c.weapon_type() == Some(w)))
            .filter_map(|&w| {
                free.iter()
                    .filter(|c| c.weapon_type() == Some(w))
                    .map(|c| c.value())
                    .max()
            })
            .sum();

        let best = stage.value() + foe_bonus + weapon_bonus;
        best >= quest.last_stage_value().unwrap_or(0)
    }

    /// Resolve a 1-based choice against a hand, reporting out-of-range picks.
    fn chosen_card(&mut self, player: PlayerId, choice: usize) -> Option<Card> {
        let hand = self.game.player(player);
        match hand.card_at_choice(choice) {
            Some(card) => Some(card.clone()),
            None => {
                let err = ChoiceError::OutOfRange {
                    choice,
                    hand_size: hand.hand_size(),
                };
                self.view.display_error(&err.to_string());
                None
            }
        }
    }

    // === Participants ===

    /// Ask every other player once, in seating order.
    fn select_participants(&mut self, quest: &mut Quest) -> Result<Vec<PlayerId>, GameError> {
        let mut active = Vec::new();
        for player in self.game.player_ids() {
            if player == quest.sponsor() {
                continue;
            }
            let prompt = format!("{player}, do you want to participate?");
            if self.view.yes_no_choice(&prompt)? {
                quest.add_participant(player);
                active.push(player);
            }
        }
        info!(participants = active.len(), "participants selected");
        Ok(active)
    }

    // === Resolution ===

    fn resolve_stages(&mut self, quest: &mut Quest, mut active: Vec<PlayerId>) -> Result<(), GameError> {
        let stage_total = quest.stages().len();

        for index in 0..stage_total {
            if active.is_empty() {
                break;
            }
            self.enter(QuestPhase::ResolvingStage(index));
            self.view.display_message(&format!("Resolving Stage {}", index + 1));

            for &player in &active {
                let card = self.game.draw_adventure_card()?;
                debug!(%player, card = %card, "participant draws");
                self.game.player_mut(player).add_card(card);
                self.trimmer.trim(self.game, self.view, player)?;
            }

            let stage_value = quest.stages()[index].value();
            let mut survivors = Vec::with_capacity(active.len());
            for &player in &active {
                let attack = self.build_attack(player)?;
                if attack.value() >= stage_value {
                    info!(%player, stage = index + 1, attack = attack.value(), stage_value, "survived stage");
                    self.view.display_message(&format!(
                        "{player} survives stage {} ({} vs {stage_value})",
                        index + 1,
                        attack.value()
                    ));
                    survivors.push(player);
                } else {
                    info!(%player, stage = index + 1, attack = attack.value(), stage_value, "eliminated");
                    self.view.display_message(&format!(
                        "{player} is eliminated at stage {} ({} vs {stage_value})",
                        index + 1,
                        attack.value()
                    ));
                }
                self.discard_attack(player, &attack);
            }

            active = survivors;
            if active.is_empty() {
                self.enter(QuestPhase::StageEliminated(index));
            } else {
                self.enter(QuestPhase::StageSurvived(index));
            }

            if index == stage_total - 1 {
                for &winner in &active {
                    self.game.player_mut(winner).add_shields(quest.stage_count());
                    quest.add_winner(winner);
                    info!(player = %winner, shields = quest.stage_count(), "quest won");
                    self.view.display_message(&format!(
                        "{winner} completes the quest and earns {} shields!",
                        quest.stage_count()
                    ));
                }
            }
        }
        Ok(())
    }

    /// Let a participant pick weapons until they answer done.
    fn build_attack(&mut self, player: PlayerId) -> Result<Attack, GameError> {
        let mut attack = Attack::new();
        self.view.display_player_hand(self.game.player(player));

        loop {
            let choice = self.view.card_choice(self.game.player(player))?;
            if choice == DONE {
                return Ok(attack);
            }
            let Some(card) = self.chosen_card(player, choice) else {
                continue;
            };
            match attack.add_weapon(&card) {
                Ok(()) => self.view.display_attack(&attack),
                Err(err) => {
                    debug!(%player, card = %card, %err, "weapon rejected");
                    self.view.display_error(&err.to_string());
                }
            }
        }
    }

    /// Weapons used in an attack are discarded whatever the outcome.
    fn discard_attack(&mut self, player: PlayerId, attack: &Attack) {
        for card in attack.weapon_ids() {
            self.game.discard_from_hand(player, card);
        }
    }

    // === Cleanup ===

    /// Discard the sponsor's committed cards and refill their hand.
    fn cleanup(&mut self, quest: &Quest) -> Result<(), GameError> {
        let sponsor = quest.sponsor();
        let committed: Vec<CardId> = quest
            .stages()
            .iter()
            .flat_map(|s| s.cards().iter().map(|c| c.id))
            .collect();

        let mut discarded = 0usize;
        for card in committed {
            if self.game.discard_from_hand(sponsor, card) {
                discarded += 1;
            }
        }

        let redraw = discarded + quest.stage_count() as usize;
        info!(%sponsor, discarded, redraw, "sponsor cleanup");
        self.game.draw_into_hand(sponsor, redraw)?;
        self.trimmer.trim(self.game, self.view, sponsor)?;
        Ok(())
    }
}
