//! Board configuration, read from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! [promotion]
//! piece = "queen"
//! max_attempts = 1
//!
//! [theme.last_move]
//! backgroundColor = "rgba(255, 255, 0, 0.4)"
//!
//! [theme.candidate]
//! background = "radial-gradient(circle, #00000066 40%, transparent 43%)"
//! borderRadius = "50%"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::highlight::Highlight;
use crate::piece::PieceKind;

/// Upper bound for [`PromotionConfig::max_attempts`].
pub const MAX_PROMOTION_ATTEMPTS: u8 = 4;

/// Style properties handed to the renderer for one square, e.g. `backgroundColor`.
pub type StyleProperties = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub promotion: PromotionConfig,
    pub theme: Theme,
}

/// How a dropped pawn on its last rank is promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromotionConfig {
    /// Kind every promotion resolves to.
    pub piece: PieceKind,
    /// Promoted re-attempts made after the plain attempt is rejected.
    pub max_attempts: u8,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        PromotionConfig {
            piece: PieceKind::Queen,
            max_attempts: 1,
        }
    }
}

/// Renderer styles for each kind of highlight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub last_move: StyleProperties,
    pub candidate: StyleProperties,
}

impl Theme {
    /// Returns the style properties for a highlight.
    pub fn style(&self, highlight: Highlight) -> &StyleProperties {
        match highlight {
            Highlight::LastMove => &self.last_move,
            Highlight::Candidate => &self.candidate,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            last_move: properties(&[("backgroundColor", "rgba(255, 255, 0, 0.4)")]),
            candidate: properties(&[
                (
                    "background",
                    "radial-gradient(circle, #00000066 40%, transparent 43%)",
                ),
                ("borderRadius", "50%"),
            ]),
        }
    }
}

fn properties(pairs: &[(&str, &str)]) -> StyleProperties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl BoardConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::{BoardConfig, PieceKind};
    ///
    /// let config = BoardConfig::from_toml_str("[promotion]\npiece = \"knight\"").unwrap();
    /// assert_eq!(PieceKind::Knight, config.promotion.piece);
    /// assert_eq!(1, config.promotion.max_attempts);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<BoardConfig, ConfigError> {
        let config: BoardConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<BoardConfig, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loading board config from {path:?}");
        BoardConfig::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.promotion.validate()
    }
}

impl PromotionConfig {
    /// Checks that the kind can be promoted to and that at least one promoted
    /// attempt, and at most [`MAX_PROMOTION_ATTEMPTS`], is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.piece.is_promotion_target() {
            return Err(ConfigError::PromotionPiece(self.piece));
        }

        if !(1..=MAX_PROMOTION_ATTEMPTS).contains(&self.max_attempts) {
            return Err(ConfigError::PromotionAttempts {
                got: self.max_attempts,
                max: MAX_PROMOTION_ATTEMPTS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(BoardConfig::default(), config);
        assert_eq!(PieceKind::Queen, config.promotion.piece);
        assert_eq!(
            Some(&"rgba(255, 255, 0, 0.4)".to_string()),
            config.theme.style(Highlight::LastMove).get("backgroundColor")
        );
        assert_eq!(
            Some(&"50%".to_string()),
            config.theme.style(Highlight::Candidate).get("borderRadius")
        );
    }

    #[test]
    fn theme_override() {
        let config = BoardConfig::from_toml_str(
            r##"
            [theme.candidate]
            backgroundColor = "#00ff0055"
            "##,
        )
        .unwrap();

        assert_eq!(1, config.theme.candidate.len());
        assert_eq!(Theme::default().last_move, config.theme.last_move);
    }

    #[test]
    fn rejects_invalid_promotion() {
        let cases = [
            "[promotion]\npiece = \"king\"",
            "[promotion]\npiece = \"pawn\"",
            "[promotion]\nmax_attempts = 0",
            "[promotion]\nmax_attempts = 5",
        ];

        for case in cases.iter() {
            let result = BoardConfig::from_toml_str(case);
            assert!(
                matches!(
                    result,
                    Err(ConfigError::PromotionPiece(_)) | Err(ConfigError::PromotionAttempts { .. })
                ),
                "{case} should be rejected"
            );
        }
    }

    #[test]
    fn validates_programmatic_promotion() {
        let cases = [
            (PieceKind::Queen, 0, false),
            (PieceKind::Queen, 1, true),
            (PieceKind::Knight, MAX_PROMOTION_ATTEMPTS, true),
            (PieceKind::Rook, MAX_PROMOTION_ATTEMPTS + 1, false),
            (PieceKind::King, 1, false),
            (PieceKind::Pawn, 1, false),
        ];

        for case in cases.iter() {
            let promotion = PromotionConfig {
                piece: case.0,
                max_attempts: case.1,
            };
            assert_eq!(case.2, promotion.validate().is_ok(), "{promotion:?}");
        }
    }

    #[test]
    fn rejects_malformed_documents() {
        let cases = [
            "[promotion]\npiece = \"emperor\"",
            "[promotion]\nretries = 2",
            "promotion = 3",
        ];

        for case in cases.iter() {
            assert!(matches!(
                BoardConfig::from_toml_str(case),
                Err(ConfigError::Parse(_))
            ));
        }
    }

    #[test]
    fn load_missing_file() {
        let result = BoardConfig::load("/nonexistent/board.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
