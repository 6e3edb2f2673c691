//! A sponsored quest: its stages plus sponsor, participant and winner bookkeeping.

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::cards::CardId;
use crate::core::error::StageError;
use crate::core::player::PlayerId;

/// A quest under construction or resolution.
///
/// Stages are accepted in order and never weaken: a stage whose value is below
/// the previous stage's is refused. Participants and winners keep the order in
/// which they were recorded, and recording the same player twice is a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    stage_count: u32,
    sponsor: PlayerId,
    stages: Vec<Stage>,
    participants: Vec<PlayerId>,
    winners: Vec<PlayerId>,
}

impl Quest {
    /// Create a quest of `stage_count` stages sponsored by `sponsor`.
    #[must_use]
    pub fn new(stage_count: u32, sponsor: PlayerId) -> Self {
        Self {
            stage_count,
            sponsor,
            stages: Vec::with_capacity(stage_count as usize),
            participants: Vec::new(),
            winners: Vec::new(),
        }
    }

    /// Append a built stage.
    ///
    /// Fails with `Invalid` if the stage has no foe, and with
    /// `InsufficientValue` if it is weaker than the last accepted stage.
    /// Equal values are accepted.
    pub fn add_stage(&mut self, stage: Stage) -> Result<(), StageError> {
        if !stage.is_valid() {
            return Err(StageError::Invalid);
        }
        if let Some(previous) = self.stages.last() {
            if stage.value() < previous.value() {
                return Err(StageError::InsufficientValue {
                    value: stage.value(),
                    previous: previous.value(),
                });
            }
        }
        self.stages.push(stage);
        Ok(())
    }

    pub fn add_participant(&mut self, player: PlayerId) {
        if !self.participants.contains(&player) {
            self.participants.push(player);
        }
    }

    pub fn add_winner(&mut self, player: PlayerId) {
        if !self.winners.contains(&player) {
            self.winners.push(player);
        }
    }

    #[must_use]
    pub fn sponsor(&self) -> PlayerId {
        self.sponsor
    }

    /// Stage count fixed by the quest card.
    #[must_use]
    pub fn stage_count(&self) -> u32 {
        self.stage_count
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// True once every required stage has been accepted.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.stages.len() >= self.stage_count as usize
    }

    /// Value of the last accepted stage, the floor for the next one.
    #[must_use]
    pub fn last_stage_value(&self) -> Option<u32> {
        self.stages.last().map(Stage::value)
    }

    /// True if the card sits in any accepted stage.
    #[must_use]
    pub fn is_committed(&self, id: CardId) -> bool {
        self.stages.iter().any(|s| s.contains(id))
    }

    /// Number of cards placed across all stages.
    #[must_use]
    pub fn committed_card_count(&self) -> usize {
        self.stages.iter().map(|s| s.cards().len()).sum()
    }

    #[must_use]
    pub fn participants(&self) -> &[PlayerId] {
        &self.participants
    }

    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }
}
