use std::collections::BTreeMap;

use crate::config::{StyleProperties, Theme};
use crate::controller::GameViewState;

/// What the board renderer draws: the position and per-square style overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub position: String,
    /// Style properties keyed by square label (`e4`). Squares without an entry render unstyled.
    pub square_styles: BTreeMap<String, StyleProperties>,
}

impl BoardView {
    /// Resolves the highlights of `state` through `theme`.
    pub fn new(state: &GameViewState, theme: &Theme) -> BoardView {
        let square_styles = state
            .highlights
            .iter()
            .map(|(sq, highlight)| (sq.to_string(), theme.style(*highlight).clone()))
            .collect();

        BoardView {
            position: state.position.clone(),
            square_styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Highlight, HighlightMap};
    use crate::square::consts::*;

    #[test]
    fn resolves_styles_by_label() {
        let theme = Theme::default();
        let highlights: HighlightMap = [
            (SQ_E2, Highlight::LastMove),
            (SQ_E4, Highlight::LastMove),
            (SQ_E6, Highlight::Candidate),
        ]
        .into_iter()
        .collect();
        let state = GameViewState {
            position: "fen".to_string(),
            highlights,
            ..Default::default()
        };

        let view = BoardView::new(&state, &theme);
        assert_eq!("fen", view.position);
        assert_eq!(
            vec!["e2", "e4", "e6"],
            view.square_styles.keys().map(String::as_str).collect::<Vec<_>>()
        );
        assert_eq!(&theme.last_move, &view.square_styles["e4"]);
        assert_eq!(&theme.candidate, &view.square_styles["e6"]);
    }

    #[test]
    fn no_highlights_no_styles() {
        let view = BoardView::new(&GameViewState::default(), &Theme::default());
        assert!(view.square_styles.is_empty());
    }
}
