//! A participant's attack against one stage.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardKind};
use crate::core::error::PlacementError;

/// Weapons assembled by one participant for one stage, one per weapon type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    weapons: SmallVec<[Card; 6]>,
    value: u32,
}

impl Attack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon. Non-weapons and repeated weapon types are rejected.
    pub fn add_weapon(&mut self, card: &Card) -> Result<(), PlacementError> {
        let CardKind::Weapon { weapon, strength } = card.kind else {
            return Err(PlacementError::NotAWeapon);
        };
        if self.weapons.iter().any(|w| w.weapon_type() == Some(weapon)) {
            return Err(PlacementError::DuplicateWeapon(weapon));
        }
        self.weapons.push(card.clone());
        self.value += strength;
        Ok(())
    }

    /// Total attack value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn weapons(&self) -> &[Card] {
        &self.weapons
    }

    /// IDs of the weapons used, for discarding after the stage.
    pub fn weapon_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.weapons.iter().map(|w| w.id)
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attack [")?;
        for (i, card) in self.weapons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] value {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::WeaponType;

    #[test]
    fn test_value_is_sum_of_weapons() {
        let mut attack = Attack::new();
        attack.add_weapon(&Card::weapon(CardId(1), WeaponType::Dagger)).unwrap();
        attack.add_weapon(&Card::weapon(CardId(2), WeaponType::Excalibur)).unwrap();
        assert_eq!(attack.value(), 35);
        assert_eq!(attack.weapon_ids().collect::<Vec<_>>(), vec![CardId(1), CardId(2)]);
    }

    #[test]
    fn test_duplicate_type_not_counted() {
        let mut attack = Attack::new();
        attack.add_weapon(&Card::weapon(CardId(1), WeaponType::Horse)).unwrap();
        assert_eq!(
            attack.add_weapon(&Card::weapon(CardId(2), WeaponType::Horse)),
            Err(PlacementError::DuplicateWeapon(WeaponType::Horse))
        );
        assert_eq!(attack.value(), 10);
        assert_eq!(attack.weapons().len(), 1);
    }

    #[test]
    fn test_foe_rejected() {
        let mut attack = Attack::new();
        assert_eq!(
            attack.add_weapon(&Card::foe(CardId(1), 5)),
            Err(PlacementError::NotAWeapon)
        );
        assert_eq!(attack.value(), 0);
    }

    #[test]
    fn test_empty_attack() {
        let attack = Attack::new();
        assert_eq!(attack.value(), 0);
        assert_eq!(attack.to_string(), "attack [] value 0");
    }
}
