//! Quest aggregates.
//!
//! ## Key Types
//!
//! - `Stage`: Cards placed by the sponsor for one step, with a total value
//! - `Attack`: Weapons played by one participant against one stage
//! - `Quest`: Ordered stages plus sponsor, participants and winners
//!
//! These types only enforce placement and ordering rules. The flow that
//! builds and resolves them lives in `rules::QuestEngine`.

mod attack;
#[allow(clippy::module_inception)]
mod quest;
mod stage;

pub use attack::Attack;
pub use quest::Quest;
pub use stage::Stage;
