//! Move recording.
//!
//! Records are produced by a rules engine when it confirms a move and are never
//! modified afterwards.

use std::fmt;

use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

/// A confirmed move, as reported by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    /// Standard algebraic notation including any check suffix, e.g. `Nf3`, `exd8=Q+`.
    pub san: String,
}

impl MoveRecord {
    pub fn new(
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        san: impl Into<String>,
    ) -> Self {
        MoveRecord {
            from,
            to,
            promotion,
            san: san.into(),
        }
    }

    /// Converts the move into UCI formatted string.
    ///
    /// Castling is written with the king's destination (`e1g1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::{MoveRecord, PieceKind};
    /// use chess_board_ui::square::consts::*;
    ///
    /// let record = MoveRecord::new(SQ_E7, SQ_E8, Some(PieceKind::Queen), "e8=Q");
    /// assert_eq!("e7e8q", record.to_uci());
    /// ```
    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

/// Position of a move in the game: full move number and the side making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNumber {
    /// Starts at 1 and is incremented after the dark side moves.
    pub fullmove: u32,
    pub turn: Color,
}

impl MoveNumber {
    /// Returns the number of the move that follows this one.
    #[must_use]
    pub fn next(self) -> MoveNumber {
        let fullmove = match self.turn {
            Color::Light => self.fullmove,
            Color::Dark => self.fullmove + 1,
        };

        MoveNumber {
            fullmove,
            turn: self.turn.flip(),
        }
    }
}

impl Default for MoveNumber {
    fn default() -> Self {
        MoveNumber {
            fullmove: 1,
            turn: Color::Light,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.san)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::consts::*;

    #[test]
    fn to_uci() {
        let cases = [
            (MoveRecord::new(SQ_E2, SQ_E4, None, "e4"), "e2e4"),
            (MoveRecord::new(SQ_E1, SQ_G1, None, "O-O"), "e1g1"),
            (
                MoveRecord::new(SQ_B2, SQ_A1, Some(PieceKind::Knight), "bxa1=N"),
                "b2a1n",
            ),
        ];

        for case in cases.iter() {
            assert_eq!(case.1, case.0.to_uci());
        }
    }

    #[test]
    fn move_number_advances_after_dark() {
        let mut number = MoveNumber::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push((number.fullmove, number.turn));
            number = number.next();
        }

        assert_eq!(
            vec![
                (1, Color::Light),
                (1, Color::Dark),
                (2, Color::Light),
                (2, Color::Dark)
            ],
            seen
        );
    }

    #[test]
    fn displays_san() {
        assert_eq!("Nf3", MoveRecord::new(SQ_G1, SQ_F3, None, "Nf3").to_string());
    }
}
