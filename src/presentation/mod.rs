//! Translation between the board renderer and the interaction controller.
//!
//! The renderer speaks in square labels (`e4`) and two-character piece tokens
//! (`wN`); the controller speaks in [`Square`](crate::Square) and
//! [`PieceDescriptor`](crate::PieceDescriptor). This module converts both ways
//! and renders the history panel.

pub mod board;
pub mod history;
pub mod port;
pub mod token;

pub use board::BoardView;
pub use history::{movetext, HistoryTable};
pub use port::{BoardAdapter, RendererEvent};
pub use token::{decode_piece_token, encode_piece_token};
