//! Piece kinds and the transient piece descriptor handed over by the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::Role;

use crate::color::Color;
use crate::square::Square;

/// Represents a kind of piece in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Returns an iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = PieceKind> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }

    /// Returns the upper-case letter used in renderer tokens (`P`, `N`, ...).
    pub fn token_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses the kind letter of a renderer token. Only upper-case letters are accepted.
    pub fn from_token_char(c: char) -> Option<PieceKind> {
        PieceKind::iter().find(|k| k.token_char() == c)
    }

    /// Returns true if a pawn may promote to this kind.
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    /// Lower-case letter, as used in UCI moves and the history table.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token_char().to_ascii_lowercase())
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn,
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }
}

/// A piece as reported by a drop event: its color and kind.
///
/// Displays as the renderer token it was decoded from, e.g. `wN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceDescriptor {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceDescriptor {
    pub fn new(color: Color, kind: PieceKind) -> PieceDescriptor {
        PieceDescriptor { color, kind }
    }

    /// Returns true if moving this piece to `target` could be a promotion:
    /// the piece is a pawn and `target` lies on the farthest rank for its color.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::{Color, PieceDescriptor, PieceKind};
    /// use chess_board_ui::square::consts::*;
    ///
    /// let pawn = PieceDescriptor::new(Color::Light, PieceKind::Pawn);
    /// assert!(pawn.is_promotion_candidate(SQ_E8));
    /// assert!(!pawn.is_promotion_candidate(SQ_E1));
    ///
    /// let dark_pawn = PieceDescriptor::new(Color::Dark, PieceKind::Pawn);
    /// assert!(dark_pawn.is_promotion_candidate(SQ_A1));
    /// ```
    pub fn is_promotion_candidate(&self, target: Square) -> bool {
        self.kind == PieceKind::Pawn && target.is_last_rank(self.color)
    }
}

impl fmt::Display for PieceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.color.token_char(), self.kind.token_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::consts::*;

    #[test]
    fn token_chars() {
        for kind in PieceKind::iter() {
            assert_eq!(Some(kind), PieceKind::from_token_char(kind.token_char()));
        }
        assert_eq!(None, PieceKind::from_token_char('p'));
        assert_eq!(None, PieceKind::from_token_char('X'));
    }

    #[test]
    fn promotion_targets() {
        let targets: Vec<PieceKind> = PieceKind::iter()
            .filter(|k| k.is_promotion_target())
            .collect();
        assert_eq!(
            vec![
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen
            ],
            targets
        );
    }

    #[test]
    fn promotion_candidate() {
        let cases = [
            (Color::Light, PieceKind::Pawn, SQ_H8, true),
            (Color::Light, PieceKind::Pawn, SQ_H7, false),
            (Color::Light, PieceKind::Pawn, SQ_H1, false),
            (Color::Dark, PieceKind::Pawn, SQ_C1, true),
            (Color::Dark, PieceKind::Pawn, SQ_C8, false),
            (Color::Light, PieceKind::Rook, SQ_A8, false),
            (Color::Dark, PieceKind::Queen, SQ_A1, false),
        ];

        for case in cases.iter() {
            let piece = PieceDescriptor::new(case.0, case.1);
            assert_eq!(case.3, piece.is_promotion_candidate(case.2), "{piece} to {}", case.2);
        }
    }

    #[test]
    fn display() {
        assert_eq!("wN", PieceDescriptor::new(Color::Light, PieceKind::Knight).to_string());
        assert_eq!("bP", PieceDescriptor::new(Color::Dark, PieceKind::Pawn).to_string());
        assert_eq!("q", PieceKind::Queen.to_string());
    }

    #[test]
    fn role_conversion() {
        for kind in PieceKind::iter() {
            assert_eq!(kind, PieceKind::from(Role::from(kind)));
        }
    }
}
