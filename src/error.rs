//! Error types.
//!
//! Move legality is never reported through these types: a rejected move is an
//! ordinary [`MoveOutcome`](crate::MoveOutcome), not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The label is not one of `a1`-`h8`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square label {0:?}")]
pub struct ParseSquareError(pub String);

/// A renderer piece token that does not name a piece.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("piece token {0:?} must be exactly two characters")]
    Length(String),
    #[error("unknown color {color:?} in piece token {token:?}")]
    Color { token: String, color: char },
    #[error("unknown piece kind {kind:?} in piece token {token:?}")]
    Kind { token: String, kind: char },
}

/// An inbound renderer event that could not be turned into a board event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error(transparent)]
    Piece(#[from] DecodeError),
}

/// A serialized position the rules engine cannot load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("malformed FEN {fen:?}: {reason}")]
    Malformed { fen: String, reason: String },
    #[error("illegal position {fen:?}: {reason}")]
    Illegal { fen: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("promotion piece must be knight, bishop, rook or queen, got {0:?}")]
    PromotionPiece(crate::PieceKind),
    #[error("promotion attempts must be between 1 and {max}, got {got}")]
    PromotionAttempts { got: u8, max: u8 },
}
