//! Square highlighting derived from the move history and candidate destinations.
//!
//! Everything here is a pure function of its arguments. A [`HighlightMap`] is
//! always rebuilt from scratch, never patched.

use std::collections::BTreeMap;

use log::trace;

use crate::record::MoveRecord;
use crate::square::Square;

/// Visual emphasis of a single square. The concrete look is resolved by the
/// presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Origin or destination of the most recent move.
    LastMove,
    /// A square the selected piece may move to.
    Candidate,
}

/// Squares needing emphasis. Absent squares render unstyled.
pub type HighlightMap = BTreeMap<Square, Highlight>;

/// Highlights the origin and destination of the most recent move.
///
/// # Examples
///
/// ```
/// use chess_board_ui::{style_for_last_move, Highlight, MoveRecord};
/// use chess_board_ui::square::consts::*;
///
/// assert!(style_for_last_move(&[]).is_empty());
///
/// let history = [MoveRecord::new(SQ_E2, SQ_E4, None, "e4")];
/// let map = style_for_last_move(&history);
/// assert_eq!(2, map.len());
/// assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_E2));
/// assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_E4));
/// ```
pub fn style_for_last_move(history: &[MoveRecord]) -> HighlightMap {
    let mut map = HighlightMap::new();

    if let Some(last) = history.last() {
        map.insert(last.from, Highlight::LastMove);
        map.insert(last.to, Highlight::LastMove);
    }

    map
}

/// Marks every destination as a candidate, keeping the last move visible.
///
/// A square that is both a candidate and part of the last move keeps the
/// last-move style.
pub fn style_for_candidates(destinations: &[Square], history: &[MoveRecord]) -> HighlightMap {
    let mut map: HighlightMap = destinations
        .iter()
        .map(|sq| (*sq, Highlight::Candidate))
        .collect();

    merge_last_move_wins(&mut map, style_for_last_move(history));

    trace!("candidate highlights: {map:?}");
    map
}

/// Merge rule: entries of `last_move` overwrite entries already in `map`.
fn merge_last_move_wins(map: &mut HighlightMap, last_move: HighlightMap) {
    map.extend(last_move);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::consts::*;

    fn history(moves: &[(Square, Square)]) -> Vec<MoveRecord> {
        moves
            .iter()
            .map(|(from, to)| MoveRecord::new(*from, *to, None, format!("{from}{to}")))
            .collect()
    }

    #[test]
    fn last_move_only_uses_most_recent() {
        let h = history(&[(SQ_E2, SQ_E4), (SQ_E7, SQ_E5)]);
        let map = style_for_last_move(&h);

        let expected: HighlightMap = [(SQ_E7, Highlight::LastMove), (SQ_E5, Highlight::LastMove)]
            .into_iter()
            .collect();
        assert_eq!(expected, map);
    }

    #[test]
    fn candidates_without_history() {
        let map = style_for_candidates(&[SQ_E4, SQ_E5], &[]);

        let expected: HighlightMap = [(SQ_E4, Highlight::Candidate), (SQ_E5, Highlight::Candidate)]
            .into_iter()
            .collect();
        assert_eq!(expected, map);
    }

    #[test]
    fn candidates_keep_last_move() {
        let h = history(&[(SQ_E2, SQ_E4)]);
        let map = style_for_candidates(&[SQ_E5, SQ_E6], &h);

        assert_eq!(4, map.len());
        assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_E2));
        assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_E4));
        assert_eq!(Some(&Highlight::Candidate), map.get(&SQ_E5));
        assert_eq!(Some(&Highlight::Candidate), map.get(&SQ_E6));
    }

    #[test]
    fn last_move_wins_on_shared_square() {
        let h = history(&[(SQ_D1, SQ_H5)]);
        // The queen on h5 may return to d1 and e2.
        let map = style_for_candidates(&[SQ_D1, SQ_E2], &h);

        assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_D1));
        assert_eq!(Some(&Highlight::LastMove), map.get(&SQ_H5));
        assert_eq!(Some(&Highlight::Candidate), map.get(&SQ_E2));
        assert_eq!(3, map.len());
    }

    #[test]
    fn empty_candidates_leave_only_last_move() {
        assert!(style_for_candidates(&[], &[]).is_empty());

        let h = history(&[(SQ_G1, SQ_F3)]);
        assert_eq!(style_for_last_move(&h), style_for_candidates(&[], &h));
    }

    #[test]
    fn deterministic() {
        let h = history(&[(SQ_G1, SQ_F3), (SQ_B8, SQ_C6)]);
        let destinations = [SQ_A3, SQ_B4, SQ_C6];
        assert_eq!(
            style_for_candidates(&destinations, &h),
            style_for_candidates(&destinations, &h)
        );
    }
}
