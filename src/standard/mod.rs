//! Standard chess rules, backed by [`shakmaty`].
//!
//! [`StandardRules`] is the default [`RulesEngine`]: it keeps the authoritative
//! position, answers legality queries and reports terminal states. Castling is
//! addressed the way a board user drags it, by the king's destination square.

use itertools::Itertools;
use log::debug;
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position};

use crate::error::PositionError;
use crate::piece::PieceKind;
use crate::record::{MoveNumber, MoveRecord};
use crate::square::Square;
use crate::status::GameStatus;
use crate::traits::{MoveAttempt, RulesEngine};

/// Number of halfmoves without capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Standard chess rules engine.
///
/// # Examples
///
/// ```
/// use chess_board_ui::{MoveAttempt, RulesEngine, StandardRules};
/// use chess_board_ui::square::consts::*;
///
/// let mut rules = StandardRules::new();
/// match rules.attempt_move(SQ_E2, SQ_E4, None) {
///     MoveAttempt::Accepted { record, .. } => assert_eq!("e4", record.san),
///     MoveAttempt::Rejected => unreachable!(),
/// }
/// assert_eq!(
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
///     rules.position()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StandardRules {
    pos: Chess,
    // Repetition keys of every position reached, the current one last.
    position_log: Vec<String>,
}

impl StandardRules {
    /// Creates an engine with the standard starting setup.
    pub fn new() -> StandardRules {
        StandardRules::from_chess(Chess::default())
    }

    /// Creates an engine from a FEN string.
    pub fn from_fen(fen: &str) -> Result<StandardRules, PositionError> {
        let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
            PositionError::Malformed {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        let pos: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| PositionError::Illegal {
                    fen: fen.to_string(),
                    reason: e.to_string(),
                })?;

        Ok(StandardRules::from_chess(pos))
    }

    fn from_chess(pos: Chess) -> StandardRules {
        let key = repetition_key(&pos);
        StandardRules {
            pos,
            position_log: vec![key],
        }
    }

    /// Returns the side to move.
    pub fn turn(&self) -> crate::Color {
        self.pos.turn().into()
    }

    fn find_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        let from = shakmaty::Square::from(from);
        let to = shakmaty::Square::from(to);

        self.pos.legal_moves().into_iter().find(|m| {
            board_squares(m) == Some((from, to)) && m.promotion().map(PieceKind::from) == promotion
        })
    }

    fn is_threefold_repetition(&self) -> bool {
        if self.position_log.len() < 5 {
            return false;
        }

        let Some(current) = self.position_log.last() else {
            return false;
        };
        let count = self.position_log.iter().filter(|key| *key == current).count();

        count >= 3
    }
}

impl Default for StandardRules {
    fn default() -> Self {
        StandardRules::new()
    }
}

impl RulesEngine for StandardRules {
    fn position(&self) -> String {
        fen_of(&self.pos)
    }

    fn move_number(&self) -> MoveNumber {
        MoveNumber {
            fullmove: self.pos.fullmoves().get(),
            turn: self.turn(),
        }
    }

    fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> MoveAttempt {
        let Some(m) = self.find_move(from, to, promotion) else {
            debug!("no legal move {from}{to} (promotion: {promotion:?})");
            return MoveAttempt::Rejected;
        };

        let promoted = m.promotion().map(PieceKind::from);
        let san = San::from_move(&self.pos, m.clone());
        let after = match self.pos.clone().play(m) {
            Ok(after) => after,
            Err(e) => {
                debug!("engine refused generated move {from}{to}: {e}");
                return MoveAttempt::Rejected;
            }
        };

        let suffix = if after.is_checkmate() {
            "#"
        } else if after.is_check() {
            "+"
        } else {
            ""
        };
        let record = MoveRecord::new(from, to, promoted, format!("{san}{suffix}"));

        self.position_log.push(repetition_key(&after));
        self.pos = after;

        MoveAttempt::Accepted {
            position: self.position(),
            record,
        }
    }

    fn legal_destinations(&self, origin: Square) -> Vec<Square> {
        let origin = shakmaty::Square::from(origin);

        self.pos
            .legal_moves()
            .iter()
            .filter_map(board_squares)
            .filter(|(from, _)| *from == origin)
            .map(|(_, to)| Square::from(to))
            .unique()
            .collect()
    }

    fn game_status(&self) -> GameStatus {
        if self.pos.is_checkmate() {
            return GameStatus::Checkmate(self.pos.turn().into());
        }

        if self.pos.is_stalemate() {
            return GameStatus::Stalemate;
        }

        if self.is_threefold_repetition() {
            return GameStatus::ThreefoldRepetition;
        }

        if self.pos.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }

        if self.pos.halfmoves() >= FIFTY_MOVE_HALFMOVES {
            return GameStatus::Draw;
        }

        GameStatus::InProgress
    }
}

fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// Placement, side to move, castling rights and en passant square.
fn repetition_key(pos: &Chess) -> String {
    fen_of(pos).split(' ').take(4).join(" ")
}

/// Returns origin and destination of a move as the board user drags it.
fn board_squares(m: &Move) -> Option<(shakmaty::Square, shakmaty::Square)> {
    match *m {
        Move::Normal { from, to, .. } => Some((from, to)),
        Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let king_file = if rook.file() == File::H { File::G } else { File::C };
            Some((king, shakmaty::Square::from_coords(king_file, rook.rank())))
        }
        Move::Put { .. } => None,
    }
}
