//! The view boundary.
//!
//! Rules code talks to players only through `View`. Every call is synchronous:
//! a prompt is answered before the next one is asked.
//!
//! ## Card choices
//!
//! `card_choice` returns a 1-based index into the player's hand. `0` is the
//! universal "done / none" answer.
//!
//! ## Implementations
//!
//! - [`TerminalView`]: stdin/stdout hot-seat play
//! - [`ScriptedView`]: replays queued answers and records everything shown

mod scripted;
mod terminal;

pub use scripted::ScriptedView;
pub use terminal::TerminalView;

use thiserror::Error;

use crate::core::player::Player;
use crate::quest::{Attack, Stage};

/// The "done / none" card choice.
pub const DONE: usize = 0;

/// The view could not produce an answer.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No more input will arrive (end of stdin, script exhausted).
    #[error("input closed")]
    Closed,
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Presentation and input for the players at the table.
pub trait View {
    fn display_message(&mut self, text: &str);

    fn display_error(&mut self, text: &str);

    fn display_player_hand(&mut self, player: &Player);

    fn display_current_stage(&mut self, stage: &Stage);

    fn display_attack(&mut self, attack: &Attack);

    /// Ask a yes/no question.
    fn yes_no_choice(&mut self, prompt: &str) -> Result<bool, ViewError>;

    /// Ask `player` to pick a card: `0` for done, `1..=n` for the nth hand card.
    ///
    /// The returned index is not range-checked; callers validate it.
    fn card_choice(&mut self, player: &Player) -> Result<usize, ViewError>;

    fn wait_for_key_press(&mut self) -> Result<(), ViewError>;

    fn clear_screen(&mut self);
}
