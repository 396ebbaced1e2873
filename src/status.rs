//! Terminal game states as reported by the rules engine.

use std::fmt;

use crate::color::Color;

/// Represents the state of the game after the last move.
///
/// Only used to build the status line; nothing in the interaction state depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is in progress.
    InProgress,
    /// Checkmate - the specified color is mated (it is the side to move).
    Checkmate(Color),
    /// The side to move has no legal moves but is not in check.
    Stalemate,
    /// The same position occurred three times.
    ThreefoldRepetition,
    /// Neither side has enough material left to mate.
    InsufficientMaterial,
    /// Any other draw, such as the fifty-move rule.
    Draw,
}

impl GameStatus {
    /// Returns true if the game is over.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the single-line status message, empty while the game is ongoing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::{Color, GameStatus};
    ///
    /// assert_eq!("Black in Checkmate", GameStatus::Checkmate(Color::Dark).message());
    /// assert_eq!("", GameStatus::InProgress.message());
    /// ```
    pub fn message(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Checkmate(c) => format!("{} in Checkmate", c.name()),
            GameStatus::Stalemate => "Stalemate".to_string(),
            GameStatus::ThreefoldRepetition => "Threefold Repetition".to_string(),
            GameStatus::InsufficientMaterial => "Insufficient Material".to_string(),
            GameStatus::Draw => "Draw".to_string(),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message())
    }
}
