//! Interaction controller: turns board input into validated moves and keeps the
//! view state the renderer draws from.
//!
//! The controller is the only place where the position and the move history
//! change, and it only changes them when the rules engine confirms a move. Every
//! transition replaces the [`GameViewState`] as a whole.

use log::{debug, info, warn};

use crate::config::PromotionConfig;
use crate::error::ConfigError;
use crate::highlight::{style_for_candidates, style_for_last_move, HighlightMap};
use crate::piece::{PieceDescriptor, PieceKind};
use crate::record::{MoveNumber, MoveRecord};
use crate::square::Square;
use crate::status::GameStatus;
use crate::traits::{MoveAttempt, RulesEngine};

/// Everything the renderer and the history panel need.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameViewState {
    /// Serialized position, as produced by the rules engine.
    pub position: String,
    /// Number of the first move in `history`.
    pub first_move: MoveNumber,
    pub history: Vec<MoveRecord>,
    pub highlights: HighlightMap,
}

/// Inbound board input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A piece was dragged from `source` and dropped on `target`.
    Drop {
        source: Square,
        target: Square,
        piece: PieceDescriptor,
    },
    /// A square was clicked.
    Click(Square),
}

/// Why a move did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The rules engine refused the move and it is not a promotion.
    IllegalMove,
    /// The move looked like a promotion but no promoted attempt was accepted.
    PromotionUnresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveRecord),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Result of handling one [`BoardEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Move(MoveOutcome),
    /// Legal destinations of the clicked square, now highlighted.
    Candidates(Vec<Square>),
}

// Steps of a single drop. A pawn reaching its last rank is first tried as a
// plain move and then re-attempted with the configured promotion kind.
enum PromotionState {
    AttemptingPlain,
    NeedsPromotionChoice { attempts: u8 },
    Resolved { position: String, record: MoveRecord },
    Abandoned,
}

/// Owns the rules engine and the current [`GameViewState`].
///
/// # Examples
///
/// ```
/// use chess_board_ui::{Highlight, InteractionController, StandardRules};
/// use chess_board_ui::{Color, PieceDescriptor, PieceKind};
/// use chess_board_ui::square::consts::*;
///
/// let mut controller = InteractionController::new(StandardRules::new());
/// let pawn = PieceDescriptor::new(Color::Light, PieceKind::Pawn);
///
/// assert!(controller.attempt_move(SQ_E2, SQ_E4, pawn).is_applied());
/// assert_eq!(1, controller.state().history.len());
/// assert_eq!(Some(&Highlight::LastMove), controller.state().highlights.get(&SQ_E4));
/// ```
#[derive(Debug)]
pub struct InteractionController<E: RulesEngine> {
    engine: E,
    promotion: PromotionConfig,
    state: GameViewState,
}

impl<E: RulesEngine> InteractionController<E> {
    /// Creates a controller promoting to a queen with a single re-attempt.
    pub fn new(engine: E) -> Self {
        InteractionController::from_parts(engine, PromotionConfig::default())
    }

    /// Creates a controller with custom promotion settings.
    ///
    /// Settings that could never resolve a promotion are refused.
    pub fn with_config(engine: E, promotion: PromotionConfig) -> Result<Self, ConfigError> {
        promotion.validate()?;
        Ok(InteractionController::from_parts(engine, promotion))
    }

    fn from_parts(engine: E, promotion: PromotionConfig) -> Self {
        let state = GameViewState {
            position: engine.position(),
            first_move: engine.move_number(),
            history: Vec::new(),
            highlights: HighlightMap::new(),
        };

        InteractionController {
            engine,
            promotion,
            state,
        }
    }

    pub fn state(&self) -> &GameViewState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the terminal state of the game as reported by the engine.
    pub fn game_status(&self) -> GameStatus {
        self.engine.game_status()
    }

    /// Returns the game-over line, empty while the game is ongoing.
    pub fn status_line(&self) -> String {
        if !self.engine.is_game_over() {
            return String::new();
        }

        self.engine.game_status().message()
    }

    /// Dispatches a board event to [`attempt_move`](Self::attempt_move) or
    /// [`show_moves`](Self::show_moves).
    pub fn handle(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::Drop {
                source,
                target,
                piece,
            } => EventOutcome::Move(self.attempt_move(source, target, piece)),
            BoardEvent::Click(square) => EventOutcome::Candidates(self.show_moves(square)),
        }
    }

    /// Tries to play `piece` from `source` to `target`.
    ///
    /// A rejected pawn move onto the last rank is re-attempted as a promotion at
    /// most `max_attempts` times.
    pub fn attempt_move(
        &mut self,
        source: Square,
        target: Square,
        piece: PieceDescriptor,
    ) -> MoveOutcome {
        let mut state = PromotionState::AttemptingPlain;

        loop {
            state = match state {
                PromotionState::AttemptingPlain => {
                    debug!("attempting {piece} {source}{target}");
                    match self.engine.attempt_move(source, target, None) {
                        MoveAttempt::Accepted { position, record } => {
                            PromotionState::Resolved { position, record }
                        }
                        MoveAttempt::Rejected if piece.is_promotion_candidate(target) => {
                            PromotionState::NeedsPromotionChoice { attempts: 0 }
                        }
                        MoveAttempt::Rejected => {
                            debug!("rejected {source}{target}");
                            return MoveOutcome::Rejected(Rejection::IllegalMove);
                        }
                    }
                }
                PromotionState::NeedsPromotionChoice { attempts }
                    if attempts >= self.promotion.max_attempts =>
                {
                    PromotionState::Abandoned
                }
                PromotionState::NeedsPromotionChoice { attempts } => {
                    let kind = self.select_promotion_target();
                    debug!("attempting {source}{target} promoting to {kind:?}");
                    match self.engine.attempt_move(source, target, Some(kind)) {
                        MoveAttempt::Accepted { position, record } => {
                            PromotionState::Resolved { position, record }
                        }
                        MoveAttempt::Rejected => PromotionState::NeedsPromotionChoice {
                            attempts: attempts + 1,
                        },
                    }
                }
                PromotionState::Resolved { position, record } => {
                    return MoveOutcome::Applied(self.apply(position, record));
                }
                PromotionState::Abandoned => {
                    warn!(
                        "promotion {source}{target} not accepted after {} attempts",
                        self.promotion.max_attempts
                    );
                    return MoveOutcome::Rejected(Rejection::PromotionUnresolved);
                }
            };
        }
    }

    /// Highlights the legal destinations of the piece on `square`, keeping the
    /// last move visible. Position and history are left untouched.
    pub fn show_moves(&mut self, square: Square) -> Vec<Square> {
        let destinations = self.engine.legal_destinations(square);
        debug!("{} destinations from {square}", destinations.len());

        let highlights = style_for_candidates(&destinations, &self.state.history);
        self.state = GameViewState {
            highlights,
            ..self.state.clone()
        };

        destinations
    }

    // Promotion is always resolved to the configured kind; the user is not asked.
    fn select_promotion_target(&self) -> PieceKind {
        self.promotion.piece
    }

    fn apply(&mut self, position: String, record: MoveRecord) -> MoveRecord {
        info!("applied {} ({})", record.to_uci(), record.san);

        let mut history = self.state.history.clone();
        history.push(record.clone());
        let highlights = style_for_last_move(&history);

        self.state = GameViewState {
            position,
            first_move: self.state.first_move,
            history,
            highlights,
        };

        record
    }
}
