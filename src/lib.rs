//! A library for the interaction layer of a chessboard user interface.
//!
//! `chess_board_ui` turns drag/drop and click input on a rendered board into
//! validated moves, resolves pawn promotions, and derives the square highlights,
//! move history table and game-over line the board displays. Legality is always
//! decided by a [`RulesEngine`]; [`StandardRules`] is the default one.
//!
//! # Module Organization
//!
//! - **domain**: `color`, `piece`, `square`, `record`, `status`
//! - **traits**: the [`RulesEngine`] seam
//! - **standard**: standard chess rules backed by `shakmaty`
//! - **highlight**: pure highlight derivation
//! - **controller**: the [`InteractionController`] state machine
//! - **presentation**: renderer tokens, board view and history panel
//! - **config**: TOML board configuration
//!
//! # Examples
//!
//! ```
//! use chess_board_ui::{Highlight, InteractionController, StandardRules};
//! use chess_board_ui::presentation::decode_piece_token;
//! use chess_board_ui::square::consts::*;
//!
//! let mut controller = InteractionController::new(StandardRules::new());
//!
//! let pawn = decode_piece_token("wP").unwrap();
//! assert!(controller.attempt_move(SQ_E2, SQ_E4, pawn).is_applied());
//!
//! // Clicking a piece marks its destinations and keeps the last move visible.
//! controller.show_moves(SQ_E7);
//! let highlights = &controller.state().highlights;
//! assert_eq!(Some(&Highlight::LastMove), highlights.get(&SQ_E4));
//! assert_eq!(Some(&Highlight::Candidate), highlights.get(&SQ_E5));
//! ```

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod piece;
pub mod presentation;
pub mod record;
pub mod square;
pub mod standard;
pub mod status;
pub mod traits;

pub use self::color::Color;
pub use self::config::{BoardConfig, PromotionConfig, Theme};
pub use self::controller::{
    BoardEvent, EventOutcome, GameViewState, InteractionController, MoveOutcome, Rejection,
};
pub use self::error::{ConfigError, DecodeError, InputError, ParseSquareError, PositionError};
pub use self::highlight::{style_for_candidates, style_for_last_move, Highlight, HighlightMap};
pub use self::piece::{PieceDescriptor, PieceKind};
pub use self::record::{MoveNumber, MoveRecord};
pub use self::square::Square;
pub use self::standard::StandardRules;
pub use self::status::GameStatus;
pub use self::traits::{MoveAttempt, RulesEngine};
