//! Line-oriented terminal view for hot-seat play.

use std::io::{self, BufRead, Write};

use super::{View, ViewError};
use crate::core::player::Player;
use crate::quest::{Attack, Stage};

/// Reads answers line by line from `R` and writes output to `W`.
///
/// Output write failures are ignored; only input failures are reported.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
}

impl TerminalView<io::StdinLock<'static>, io::Stdout> {
    /// A view over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the view, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, ViewError> {
        let _ = self.output.flush();
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ViewError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn println(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }
}

impl<R: BufRead, W: Write> View for TerminalView<R, W> {
    fn display_message(&mut self, text: &str) {
        self.println(text);
    }

    fn display_error(&mut self, text: &str) {
        self.println(&format!("Error: {text}"));
    }

    fn display_player_hand(&mut self, player: &Player) {
        self.println(&format!("{player} hand:"));
        let lines: Vec<String> = player
            .hand()
            .iter()
            .enumerate()
            .map(|(i, card)| format!("  {:>2}. {card}", i + 1))
            .collect();
        for line in lines {
            self.println(&line);
        }
    }

    fn display_current_stage(&mut self, stage: &Stage) {
        self.println(&format!("Current stage: {stage}"));
    }

    fn display_attack(&mut self, attack: &Attack) {
        self.println(&format!("Current {attack}"));
    }

    fn yes_no_choice(&mut self, prompt: &str) -> Result<bool, ViewError> {
        loop {
            let _ = write!(self.output, "{prompt} (y/n): ");
            match self.read_line()?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.println("Please answer y or n."),
            }
        }
    }

    fn card_choice(&mut self, player: &Player) -> Result<usize, ViewError> {
        loop {
            let _ = write!(
                self.output,
                "{}, choose a card (1-{}, 0 when done): ",
                player.id(),
                player.hand_size()
            );
            match self.read_line()?.parse::<usize>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.println("Parse failed. Please try again."),
            }
        }
    }

    fn wait_for_key_press(&mut self) -> Result<(), ViewError> {
        let _ = write!(self.output, "Press Enter to continue...");
        self.read_line().map(|_| ())
    }

    fn clear_screen(&mut self) {
        let _ = write!(self.output, "\x1B[2J\x1B[H");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::core::player::PlayerId;

    fn view(input: &str) -> TerminalView<&[u8], Vec<u8>> {
        TerminalView::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_yes_no_retries_until_valid() {
        let mut view = view("maybe\nY\n");
        assert!(view.yes_no_choice("Sponsor?").unwrap());
        let out = String::from_utf8(view.into_output()).unwrap();
        assert!(out.contains("Please answer y or n."));
    }

    #[test]
    fn test_card_choice_parses_index() {
        let mut view = view("abc\n3\n");
        let player = Player::new(PlayerId::new(0));
        assert_eq!(view.card_choice(&player).unwrap(), 3);
    }

    #[test]
    fn test_eof_is_closed() {
        let mut view = view("");
        assert!(matches!(view.yes_no_choice("?"), Err(ViewError::Closed)));
    }

    #[test]
    fn test_hand_listing() {
        let mut view = view("");
        let mut player = Player::new(PlayerId::new(1));
        player.add_card(Card::foe(CardId(1), 10));
        view.display_player_hand(&player);
        let out = String::from_utf8(view.into_output()).unwrap();
        assert!(out.contains("P2 (0 shields) hand:"));
        assert!(out.contains(" 1. F10"));
    }
}
