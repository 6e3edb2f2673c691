//! Deck composition.
//!
//! A `CardCatalog` lists how many copies of each card a game uses and
//! builds the physical cards, allocating a fresh `CardId` for every copy.
//!
//! ```
//! use round_table::cards::CardCatalog;
//!
//! let cards = CardCatalog::standard().build();
//! assert_eq!(cards.adventure.len(), 100);
//! assert_eq!(cards.event.len(), 17);
//! ```

use super::card::{Card, CardId, EventEffect, WeaponType};

/// Copy counts for every card in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCatalog {
    foes: Vec<(u32, usize)>,
    weapons: Vec<(WeaponType, usize)>,
    quests: Vec<(u32, usize)>,
    events: Vec<(EventEffect, usize)>,
}

/// Cards produced by `CardCatalog::build`, split by deck.
#[derive(Clone, Debug)]
pub struct CatalogCards {
    pub adventure: Vec<Card>,
    pub event: Vec<Card>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 100-card adventure deck and 17-card event deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_foe(5, 8)
            .with_foe(10, 7)
            .with_foe(15, 8)
            .with_foe(20, 7)
            .with_foe(25, 7)
            .with_foe(30, 4)
            .with_foe(35, 4)
            .with_foe(40, 2)
            .with_foe(50, 2)
            .with_foe(70, 1)
            .with_weapon(WeaponType::Dagger, 6)
            .with_weapon(WeaponType::Horse, 12)
            .with_weapon(WeaponType::Sword, 16)
            .with_weapon(WeaponType::BattleAxe, 8)
            .with_weapon(WeaponType::Lance, 6)
            .with_weapon(WeaponType::Excalibur, 2)
            .with_quest(2, 3)
            .with_quest(3, 4)
            .with_quest(4, 3)
            .with_quest(5, 2)
            .with_event(EventEffect::Plague, 1)
            .with_event(EventEffect::QueensFavor, 2)
            .with_event(EventEffect::Prosperity, 2)
    }

    /// Add `count` foes of the given strength.
    #[must_use]
    pub fn with_foe(mut self, strength: u32, count: usize) -> Self {
        self.foes.push((strength, count));
        self
    }

    /// Add `count` standard weapons of the given type.
    #[must_use]
    pub fn with_weapon(mut self, weapon: WeaponType, count: usize) -> Self {
        self.weapons.push((weapon, count));
        self
    }

    /// Add `count` quests with the given stage count.
    #[must_use]
    pub fn with_quest(mut self, stages: u32, count: usize) -> Self {
        self.quests.push((stages, count));
        self
    }

    /// Add `count` event actions.
    #[must_use]
    pub fn with_event(mut self, effect: EventEffect, count: usize) -> Self {
        self.events.push((effect, count));
        self
    }

    /// Number of adventure cards `build` will produce.
    #[must_use]
    pub fn adventure_size(&self) -> usize {
        self.foes.iter().map(|(_, n)| n).sum::<usize>()
            + self.weapons.iter().map(|(_, n)| n).sum::<usize>()
    }

    /// Number of event cards `build` will produce.
    #[must_use]
    pub fn event_size(&self) -> usize {
        self.quests.iter().map(|(_, n)| n).sum::<usize>()
            + self.events.iter().map(|(_, n)| n).sum::<usize>()
    }

    /// Build every card. IDs are allocated from 1 upward, adventure cards first.
    #[must_use]
    pub fn build(&self) -> CatalogCards {
        let mut next_id = 1u32;
        let mut alloc = || {
            let id = CardId::new(next_id);
            next_id += 1;
            id
        };

        let mut adventure = Vec::with_capacity(self.adventure_size());
        for &(strength, count) in &self.foes {
            for _ in 0..count {
                adventure.push(Card::foe(alloc(), strength));
            }
        }
        for &(weapon, count) in &self.weapons {
            for _ in 0..count {
                adventure.push(Card::weapon(alloc(), weapon));
            }
        }

        let mut event = Vec::with_capacity(self.event_size());
        for &(stages, count) in &self.quests {
            for _ in 0..count {
                event.push(Card::quest(alloc(), stages));
            }
        }
        for &(effect, count) in &self.events {
            for _ in 0..count {
                event.push(Card::event(alloc(), effect));
            }
        }

        CatalogCards { adventure, event }
    }
}
