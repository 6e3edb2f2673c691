//! Quest stages.
//!
//! A stage is built by the sponsor from one foe and any number of weapons of
//! distinct types. Its value is the sum of the placed cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardKind};
use crate::core::error::PlacementError;

/// One step of a quest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    cards: SmallVec<[Card; 4]>,
    value: u32,
    foe: Option<CardId>,
}

impl Stage {
    /// Create an empty stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card.
    ///
    /// Rejects a second foe, a weapon whose type is already present, and any
    /// event-deck card. A rejected card leaves the stage unchanged.
    pub fn add_card(&mut self, card: &Card) -> Result<(), PlacementError> {
        match card.kind {
            CardKind::Foe { .. } => {
                if self.foe.is_some() {
                    return Err(PlacementError::DuplicateFoe);
                }
                self.foe = Some(card.id);
            }
            CardKind::Weapon { weapon, .. } => {
                if self.cards.iter().any(|c| c.weapon_type() == Some(weapon)) {
                    return Err(PlacementError::DuplicateWeapon(weapon));
                }
            }
            CardKind::Quest { .. } | CardKind::Event(_) => {
                return Err(PlacementError::NotAdventureCard);
            }
        }

        self.cards.push(card.clone());
        self.value += card.value();
        Ok(())
    }

    /// A stage is valid once it has a foe.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.foe.is_some()
    }

    /// Sum of the placed cards' values.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] value {}", self.value)
    }
}
