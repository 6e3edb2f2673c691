//! Card system: the closed card set and deck composition.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card
//! - `Card` / `CardKind`: Weapon, Foe, Quest or Event action
//! - `CardFamily`: Which deck a card circulates through
//! - `CardCatalog`: Copy counts, and the standard game's decks

pub mod card;
pub mod catalog;

pub use card::{Card, CardFamily, CardId, CardKind, EventEffect, WeaponType};
pub use catalog::{CardCatalog, CatalogCards};
