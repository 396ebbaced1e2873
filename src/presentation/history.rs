//! Text renderings of the move history.

use std::fmt;

use itertools::Itertools;

use crate::color::Color;
use crate::record::{MoveNumber, MoveRecord};

const ARROW: &str = "->";

/// Plain-text move table: origin, arrow, destination, promotion, notation.
///
/// # Examples
///
/// ```
/// use chess_board_ui::MoveRecord;
/// use chess_board_ui::presentation::HistoryTable;
/// use chess_board_ui::square::consts::*;
///
/// let history = [
///     MoveRecord::new(SQ_E2, SQ_E4, None, "e4"),
///     MoveRecord::new(SQ_E7, SQ_E5, None, "e5"),
/// ];
/// assert_eq!("e2 -> e4  e4\ne7 -> e5  e5", HistoryTable::new(&history).to_string());
/// ```
pub struct HistoryTable<'a> {
    history: &'a [MoveRecord],
}

impl<'a> HistoryTable<'a> {
    pub fn new(history: &'a [MoveRecord]) -> Self {
        HistoryTable { history }
    }

    /// Returns the cells of each row, in history order.
    pub fn rows(&self) -> impl Iterator<Item = [String; 5]> + 'a {
        let history = self.history;
        history.iter().map(|r| {
            [
                r.from.to_string(),
                ARROW.to_string(),
                r.to.to_string(),
                r.promotion.map(|k| k.to_string()).unwrap_or_default(),
                r.san.clone(),
            ]
        })
    }
}

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.rows().map(|cells| cells.join(" ")).join("\n");
        f.write_str(&text)
    }
}

/// Numbered SAN movetext, e.g. `1. e4 e5 2. Nf3`.
///
/// Numbering starts at `first`. A history opened by the dark side begins with
/// an ellipsis, as in `12... a1=N`.
///
/// # Examples
///
/// ```
/// use chess_board_ui::{Color, MoveNumber, MoveRecord, PieceKind};
/// use chess_board_ui::presentation::movetext;
/// use chess_board_ui::square::consts::*;
///
/// let history = [
///     MoveRecord::new(SQ_A2, SQ_A1, Some(PieceKind::Knight), "a1=N"),
///     MoveRecord::new(SQ_E1, SQ_E2, None, "Ke2"),
/// ];
/// let first = MoveNumber { fullmove: 12, turn: Color::Dark };
/// assert_eq!("12... a1=N 13. Ke2", movetext(&history, first));
/// ```
pub fn movetext(history: &[MoveRecord], first: MoveNumber) -> String {
    history
        .iter()
        .scan(first, |number, record| {
            let current = *number;
            *number = current.next();
            Some((current, record))
        })
        .enumerate()
        .map(|(i, (number, record))| match number.turn {
            Color::Light => format!("{}. {}", number.fullmove, record.san),
            Color::Dark if i == 0 => format!("{}... {}", number.fullmove, record.san),
            Color::Dark => record.san.clone(),
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;
    use crate::square::consts::*;

    #[test]
    fn empty_history() {
        assert_eq!("", HistoryTable::new(&[]).to_string());
        assert_eq!("", movetext(&[], MoveNumber::default()));
    }

    #[test]
    fn promotion_column() {
        let history = [MoveRecord::new(SQ_B7, SQ_A8, Some(PieceKind::Queen), "bxa8=Q+")];
        let rows: Vec<[String; 5]> = HistoryTable::new(&history).rows().collect();

        assert_eq!(
            vec![[
                "b7".to_string(),
                "->".to_string(),
                "a8".to_string(),
                "q".to_string(),
                "bxa8=Q+".to_string()
            ]],
            rows
        );
        assert_eq!("b7 -> a8 q bxa8=Q+", HistoryTable::new(&history).to_string());
    }

    #[test]
    fn movetext_numbering() {
        let history = [
            MoveRecord::new(SQ_E2, SQ_E4, None, "e4"),
            MoveRecord::new(SQ_E7, SQ_E5, None, "e5"),
            MoveRecord::new(SQ_G1, SQ_F3, None, "Nf3"),
        ];

        let first = MoveNumber::default();
        assert_eq!("1. e4", movetext(&history[..1], first));
        assert_eq!("1. e4 e5", movetext(&history[..2], first));
        assert_eq!("1. e4 e5 2. Nf3", movetext(&history, first));
    }

    #[test]
    fn movetext_from_dark_to_move() {
        let history = [
            MoveRecord::new(SQ_A2, SQ_A1, Some(PieceKind::Knight), "a1=N"),
            MoveRecord::new(SQ_E1, SQ_F2, None, "Kf2"),
            MoveRecord::new(SQ_E8, SQ_E7, None, "Ke7"),
        ];
        let cases = [
            (1, "1... a1=N 2. Kf2 Ke7"),
            (30, "30... a1=N 31. Kf2 Ke7"),
        ];

        for case in cases.iter() {
            let first = MoveNumber {
                fullmove: case.0,
                turn: Color::Dark,
            };
            assert_eq!(case.1, movetext(&history, first));
        }
    }
}
