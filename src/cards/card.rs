//! Cards.
//!
//! The card set is closed: weapons and foes circulate through the adventure
//! deck, quests and event actions through the event deck. `CardKind` is the
//! tagged union over those four variants and rules code matches on it directly.

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card in a game.
///
/// Two copies of "Sword" are different cards with different IDs. Hands, piles
/// and stages find cards by this ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Weapon type. A stage or an attack holds at most one weapon of each type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Dagger,
    Horse,
    Sword,
    BattleAxe,
    Lance,
    Excalibur,
}

impl WeaponType {
    /// All weapon types, weakest first.
    pub const ALL: [WeaponType; 6] = [
        WeaponType::Dagger,
        WeaponType::Horse,
        WeaponType::Sword,
        WeaponType::BattleAxe,
        WeaponType::Lance,
        WeaponType::Excalibur,
    ];

    /// Strength of the standard printing of this weapon.
    #[must_use]
    pub const fn standard_strength(self) -> u32 {
        match self {
            WeaponType::Dagger => 5,
            WeaponType::Horse | WeaponType::Sword => 10,
            WeaponType::BattleAxe => 15,
            WeaponType::Lance => 20,
            WeaponType::Excalibur => 30,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WeaponType::Dagger => "Dagger",
            WeaponType::Horse => "Horse",
            WeaponType::Sword => "Sword",
            WeaponType::BattleAxe => "Battle-axe",
            WeaponType::Lance => "Lance",
            WeaponType::Excalibur => "Excalibur",
        }
    }
}

impl std::fmt::Display for WeaponType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Effect of an event action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventEffect {
    /// Current player loses shields.
    Plague,
    /// Current player draws adventure cards.
    QueensFavor,
    /// Every player draws adventure cards.
    Prosperity,
}

impl EventEffect {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventEffect::Plague => "Plague",
            EventEffect::QueensFavor => "Queen's Favor",
            EventEffect::Prosperity => "Prosperity",
        }
    }
}

impl std::fmt::Display for EventEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which deck a card circulates through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFamily {
    Adventure,
    Event,
}

/// Card variant with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Weapon { weapon: WeaponType, strength: u32 },
    Foe { strength: u32 },
    Quest { stages: u32 },
    Event(EventEffect),
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier in this game.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Variant and payload.
    pub kind: CardKind,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// A weapon with its standard strength.
    #[must_use]
    pub fn weapon(id: CardId, weapon: WeaponType) -> Self {
        Self::weapon_with_strength(id, weapon, weapon.standard_strength())
    }

    /// A weapon with a non-standard strength.
    #[must_use]
    pub fn weapon_with_strength(id: CardId, weapon: WeaponType, strength: u32) -> Self {
        Self::new(id, weapon.name(), CardKind::Weapon { weapon, strength })
    }

    /// A foe, named after its strength (`F15`).
    #[must_use]
    pub fn foe(id: CardId, strength: u32) -> Self {
        Self::new(id, format!("F{strength}"), CardKind::Foe { strength })
    }

    /// A quest, named after its stage count (`Q3`).
    #[must_use]
    pub fn quest(id: CardId, stages: u32) -> Self {
        Self::new(id, format!("Q{stages}"), CardKind::Quest { stages })
    }

    /// An event action.
    #[must_use]
    pub fn event(id: CardId, effect: EventEffect) -> Self {
        Self::new(id, effect.name(), CardKind::Event(effect))
    }

    /// Strength contributed to a stage or attack. Event-deck cards are worth 0.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self.kind {
            CardKind::Weapon { strength, .. } | CardKind::Foe { strength } => strength,
            CardKind::Quest { .. } | CardKind::Event(_) => 0,
        }
    }

    #[must_use]
    pub fn family(&self) -> CardFamily {
        match self.kind {
            CardKind::Weapon { .. } | CardKind::Foe { .. } => CardFamily::Adventure,
            CardKind::Quest { .. } | CardKind::Event(_) => CardFamily::Event,
        }
    }

    #[must_use]
    pub fn is_foe(&self) -> bool {
        matches!(self.kind, CardKind::Foe { .. })
    }

    /// The weapon type, if this is a weapon.
    #[must_use]
    pub fn weapon_type(&self) -> Option<WeaponType> {
        match self.kind {
            CardKind::Weapon { weapon, .. } => Some(weapon),
            _ => None,
        }
    }

    /// The stage count, if this is a quest.
    #[must_use]
    pub fn quest_stages(&self) -> Option<u32> {
        match self.kind {
            CardKind::Quest { stages } => Some(stages),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Weapon { strength, .. } => write!(f, "{} ({})", self.name, strength),
            _ => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_values() {
        assert_eq!(Card::foe(CardId(1), 25).value(), 25);
        assert_eq!(Card::weapon(CardId(2), WeaponType::Lance).value(), 20);
        assert_eq!(Card::weapon_with_strength(CardId(3), WeaponType::Dagger, 4).value(), 4);
        assert_eq!(Card::quest(CardId(4), 3).value(), 0);
        assert_eq!(Card::event(CardId(5), EventEffect::Plague).value(), 0);
    }

    #[test]
    fn test_families() {
        assert_eq!(Card::foe(CardId(1), 5).family(), CardFamily::Adventure);
        assert_eq!(Card::weapon(CardId(2), WeaponType::Horse).family(), CardFamily::Adventure);
        assert_eq!(Card::quest(CardId(3), 2).family(), CardFamily::Event);
        assert_eq!(Card::event(CardId(4), EventEffect::Prosperity).family(), CardFamily::Event);
    }

    #[test]
    fn test_accessors() {
        let sword = Card::weapon(CardId(1), WeaponType::Sword);
        assert_eq!(sword.weapon_type(), Some(WeaponType::Sword));
        assert!(!sword.is_foe());
        assert_eq!(sword.quest_stages(), None);

        let quest = Card::quest(CardId(2), 4);
        assert_eq!(quest.quest_stages(), Some(4));
        assert_eq!(quest.weapon_type(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::foe(CardId(1), 15).to_string(), "F15");
        assert_eq!(Card::weapon(CardId(2), WeaponType::BattleAxe).to_string(), "Battle-axe (15)");
        assert_eq!(Card::quest(CardId(3), 2).to_string(), "Q2");
        assert_eq!(Card::event(CardId(4), EventEffect::QueensFavor).to_string(), "Queen's Favor");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::weapon(CardId(9), WeaponType::Excalibur);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
