use log::warn;

use crate::config::{BoardConfig, Theme};
use crate::controller::{BoardEvent, EventOutcome, InteractionController, MoveOutcome};
use crate::error::{ConfigError, InputError};
use crate::piece::PieceDescriptor;
use crate::square::Square;
use crate::traits::RulesEngine;

use super::board::BoardView;
use super::history::{movetext, HistoryTable};
use super::token::decode_piece_token;

/// Input as the renderer delivers it: square labels and piece tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererEvent {
    Drop {
        source_square: String,
        target_square: String,
        piece: String,
    },
    SquareClick {
        square: String,
    },
}

impl RendererEvent {
    /// Decodes renderer labels and tokens into a [`BoardEvent`].
    pub fn decode(&self) -> Result<BoardEvent, InputError> {
        match self {
            RendererEvent::Drop {
                source_square,
                target_square,
                piece,
            } => {
                let (source, target, piece) = decode_drop(source_square, target_square, piece)?;
                Ok(BoardEvent::Drop {
                    source,
                    target,
                    piece,
                })
            }
            RendererEvent::SquareClick { square } => Ok(BoardEvent::Click(square.parse()?)),
        }
    }
}

/// Connects a renderer to an [`InteractionController`].
///
/// Undecodable input is reported as an error and changes nothing.
///
/// # Examples
///
/// ```
/// use chess_board_ui::presentation::BoardAdapter;
/// use chess_board_ui::{BoardConfig, StandardRules};
///
/// let mut board = BoardAdapter::new(StandardRules::new(), BoardConfig::default()).unwrap();
/// assert!(board.on_drop("e2", "e4", "wP").unwrap().is_applied());
/// assert!(board.on_drop("e2", "e4", "pawn").is_err());
///
/// let view = board.view();
/// assert_eq!(2, view.square_styles.len());
/// assert_eq!("1. e4", board.movetext());
/// ```
#[derive(Debug)]
pub struct BoardAdapter<E: RulesEngine> {
    controller: InteractionController<E>,
    theme: Theme,
}

impl<E: RulesEngine> BoardAdapter<E> {
    /// Creates an adapter, refusing a configuration that fails
    /// [`BoardConfig::validate`].
    pub fn new(engine: E, config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(BoardAdapter {
            controller: InteractionController::with_config(engine, config.promotion)?,
            theme: config.theme,
        })
    }

    pub fn controller(&self) -> &InteractionController<E> {
        &self.controller
    }

    pub fn handle(&mut self, event: &RendererEvent) -> Result<EventOutcome, InputError> {
        let decoded = event.decode().map_err(|e| ignored(event, e))?;
        Ok(self.controller.handle(decoded))
    }

    pub fn on_drop(
        &mut self,
        source_square: &str,
        target_square: &str,
        piece: &str,
    ) -> Result<MoveOutcome, InputError> {
        let (source, target, piece) = decode_drop(source_square, target_square, piece)
            .map_err(|e| {
                warn!("ignoring drop {source_square}{target_square} of {piece:?}: {e}");
                e
            })?;

        Ok(self.controller.attempt_move(source, target, piece))
    }

    pub fn on_square_click(&mut self, square: &str) -> Result<Vec<Square>, InputError> {
        let square = square.parse::<Square>().map_err(|e| {
            warn!("ignoring click on {square:?}: {e}");
            InputError::from(e)
        })?;

        Ok(self.controller.show_moves(square))
    }

    /// Returns what the board should draw now.
    pub fn view(&self) -> BoardView {
        BoardView::new(self.controller.state(), &self.theme)
    }

    pub fn history_table(&self) -> String {
        HistoryTable::new(&self.controller.state().history).to_string()
    }

    pub fn movetext(&self) -> String {
        let state = self.controller.state();
        movetext(&state.history, state.first_move)
    }

    pub fn status_line(&self) -> String {
        self.controller.status_line()
    }
}

fn decode_drop(
    source: &str,
    target: &str,
    piece: &str,
) -> Result<(Square, Square, PieceDescriptor), InputError> {
    Ok((source.parse()?, target.parse()?, decode_piece_token(piece)?))
}

fn ignored(event: &RendererEvent, e: InputError) -> InputError {
    warn!("ignoring renderer event {event:?}: {e}");
    e
}
