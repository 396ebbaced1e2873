//! Renderer piece tokens: a color character followed by a kind character, e.g. `wN`.

use crate::color::Color;
use crate::error::DecodeError;
use crate::piece::{PieceDescriptor, PieceKind};

/// Decodes a renderer piece token.
///
/// # Examples
///
/// ```
/// use chess_board_ui::presentation::decode_piece_token;
/// use chess_board_ui::{Color, PieceDescriptor, PieceKind};
///
/// let piece = decode_piece_token("bQ").unwrap();
/// assert_eq!(PieceDescriptor::new(Color::Dark, PieceKind::Queen), piece);
/// assert!(decode_piece_token("Qb").is_err());
/// ```
pub fn decode_piece_token(token: &str) -> Result<PieceDescriptor, DecodeError> {
    let mut chars = token.chars();
    let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(DecodeError::Length(token.to_string()));
    };

    let color = Color::from_token_char(color).ok_or_else(|| DecodeError::Color {
        token: token.to_string(),
        color,
    })?;
    let kind = PieceKind::from_token_char(kind).ok_or_else(|| DecodeError::Kind {
        token: token.to_string(),
        kind,
    })?;

    Ok(PieceDescriptor::new(color, kind))
}

/// Encodes a piece as the renderer token it is decoded from.
pub fn encode_piece_token(piece: PieceDescriptor) -> String {
    piece.to_string()
}
