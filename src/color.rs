//! Color type representing each player side.

use std::fmt;

/// Represents each side of player. Light moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Returns the opponent's color.
    #[must_use]
    pub fn flip(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Returns the color character used in renderer piece tokens (`w` or `b`).
    pub fn token_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }

    /// Parses the color character of a renderer piece token.
    pub fn from_token_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::Light),
            'b' => Some(Color::Dark),
            _ => None,
        }
    }

    /// Returns the player name shown in status messages.
    pub fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }

    /// Returns an iterator of both colors, light first.
    pub fn iter() -> ColorIter {
        ColorIter { current: Some(Color::Light) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<shakmaty::Color> for Color {
    fn from(c: shakmaty::Color) -> Self {
        match c {
            shakmaty::Color::White => Color::Light,
            shakmaty::Color::Black => Color::Dark,
        }
    }
}

/// This struct is created by the [`Color::iter`] method.
pub struct ColorIter {
    current: Option<Color>,
}

impl Iterator for ColorIter {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;

        if let Some(current) = self.current {
            self.current = match current {
                Color::Light => Some(Color::Dark),
                Color::Dark => None,
            };
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip() {
        assert_eq!(Color::Light, Color::Dark.flip());
        assert_eq!(Color::Dark, Color::Light.flip());
    }

    #[test]
    fn token_chars() {
        for c in Color::iter() {
            assert_eq!(Some(c), Color::from_token_char(c.token_char()));
        }
        assert_eq!(None, Color::from_token_char('W'));
        assert_eq!(None, Color::from_token_char('x'));
    }

    #[test]
    fn iter_order() {
        let colors: Vec<Color> = Color::iter().collect();
        assert_eq!(vec![Color::Light, Color::Dark], colors);
    }

    #[test]
    fn from_shakmaty() {
        assert_eq!(Color::Light, Color::from(shakmaty::Color::White));
        assert_eq!(Color::Dark, Color::from(shakmaty::Color::Black));
    }
}
