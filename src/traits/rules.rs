//! Rules engine trait definitions.

use crate::piece::PieceKind;
use crate::record::{MoveNumber, MoveRecord};
use crate::square::Square;
use crate::status::GameStatus;

/// Result of asking the rules engine to play a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveAttempt {
    /// The move was legal and has been played.
    Accepted {
        /// Serialization of the position after the move.
        position: String,
        record: MoveRecord,
    },
    /// The move is not legal in the current position. Nothing changed.
    Rejected,
}

/// Trait for the collaborator that owns the chess rules.
///
/// The interaction layer never inspects the board itself: legality, move generation
/// and terminal states all come through this trait.
pub trait RulesEngine {
    /// Returns the serialization of the current position.
    fn position(&self) -> String;

    /// Returns the number of the next move to be played.
    ///
    /// Engines that always start from the initial setup can keep the default.
    fn move_number(&self) -> MoveNumber {
        MoveNumber::default()
    }

    /// Plays `from` → `to` if legal.
    ///
    /// A move that needs a promotion is rejected when `promotion` is `None`, and a
    /// promotion kind on a move that does not promote is rejected too.
    fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> MoveAttempt;

    /// Returns the squares the piece on `origin` may legally move to, each once.
    ///
    /// Empty when `origin` is empty, holds a piece of the side not to move, or the
    /// piece has no legal moves.
    fn legal_destinations(&self, origin: Square) -> Vec<Square>;

    /// Returns the terminal state of the game, if any.
    fn game_status(&self) -> GameStatus;

    /// Returns true if the game is over.
    fn is_game_over(&self) -> bool {
        self.game_status().is_over()
    }
}
