use crate::error::ParseSquareError;
use crate::Color;
use std::fmt;
use std::iter;
use std::str::FromStr;

const ASCII_1: u8 = b'1';
const ASCII_LOWER_A: u8 = b'a';

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Represents a position of each cell in the 8×8 board.
///
/// Files `a`-`h` and ranks `1`-`8` are both stored 0-indexed, and the square
/// index runs `a1, b1, .., h1, a2, .., h8`.
///
/// # Examples
///
/// ```
/// use chess_board_ui::Square;
///
/// let sq = Square::new(4, 3).unwrap();
/// assert_eq!("e4", sq.to_string());
/// ```
///
/// `Square` can be created by parsing an algebraic label as well.
///
/// ```
/// use chess_board_ui::Square;
///
/// let sq = Square::from_algebraic("e4").unwrap();
/// assert_eq!(4, sq.file());
/// assert_eq!(3, sq.rank());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Square {
    inner: u8,
}

impl Square {
    /// The total number of squares on the board.
    pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Creates a new instance of `Square`.
    ///
    /// `file` and `rank` both take a value from 0 to 7.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file >= BOARD_SIZE || rank >= BOARD_SIZE {
            return None;
        }

        Some(Square {
            inner: rank * BOARD_SIZE + file,
        })
    }

    /// Creates a new instance of `Square` from its algebraic label (`a1`-`h8`).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes: &[u8] = s.as_bytes();

        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(ASCII_LOWER_A..ASCII_LOWER_A + BOARD_SIZE).contains(&file)
            || !(ASCII_1..ASCII_1 + BOARD_SIZE).contains(&rank)
        {
            return None;
        }

        Square::new(file - ASCII_LOWER_A, rank - ASCII_1)
    }

    /// Returns an iterator of all squares on the board.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the file (column) of the square (0-indexed, `a` = 0).
    pub fn file(self) -> u8 {
        self.inner % BOARD_SIZE
    }

    /// Returns the rank (row) of the square (0-indexed, rank `1` = 0).
    pub fn rank(self) -> u8 {
        self.inner / BOARD_SIZE
    }

    /// Returns a relative rank as if the specified color is light.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::Color;
    /// use chess_board_ui::square::consts::*;
    ///
    /// assert_eq!(6, SQ_E7.relative_rank(Color::Light));
    /// assert_eq!(1, SQ_E7.relative_rank(Color::Dark));
    /// ```
    pub fn relative_rank(self, c: Color) -> u8 {
        match c {
            Color::Light => self.rank(),
            Color::Dark => BOARD_SIZE - 1 - self.rank(),
        }
    }

    /// Returns true if the square lies on the farthest rank from the given color's side.
    pub fn is_last_rank(self, c: Color) -> bool {
        self.relative_rank(c) == BOARD_SIZE - 1
    }

    /// Returns the file letter (`a`-`h`).
    pub fn file_char(self) -> char {
        (self.file() + ASCII_LOWER_A) as char
    }

    /// Returns the rank digit (`1`-`8`).
    pub fn rank_char(self) -> char {
        (self.rank() + ASCII_1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square from its algebraic label (e.g., "e4").
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board_ui::Square;
    ///
    /// let sq: Square = "g7".parse().unwrap();
    /// assert_eq!(sq.file(), 6);
    /// assert_eq!(sq.rank(), 6);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

impl From<shakmaty::Square> for Square {
    fn from(sq: shakmaty::Square) -> Self {
        // Both index a1, b1, .., h8 in the same order.
        Square { inner: sq as u8 }
    }
}

impl From<Square> for shakmaty::Square {
    fn from(sq: Square) -> Self {
        shakmaty::Square::new(sq.inner as u32)
    }
}

/// Square constants.
pub mod consts {
    use super::Square;

    macro_rules! make_square {
        {0, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: 0 };
            make_square!{1, $($ts)*}
        };
        {$n:expr, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: $n };
            make_square!{($n + 1), $($ts)*}
        };
        {$n:expr, $t:ident} => {
            pub const $t: Square = Square { inner: $n };
        };
    }

    make_square! {0, SQ_A1 SQ_B1 SQ_C1 SQ_D1 SQ_E1 SQ_F1 SQ_G1 SQ_H1
    SQ_A2 SQ_B2 SQ_C2 SQ_D2 SQ_E2 SQ_F2 SQ_G2 SQ_H2
    SQ_A3 SQ_B3 SQ_C3 SQ_D3 SQ_E3 SQ_F3 SQ_G3 SQ_H3
    SQ_A4 SQ_B4 SQ_C4 SQ_D4 SQ_E4 SQ_F4 SQ_G4 SQ_H4
    SQ_A5 SQ_B5 SQ_C5 SQ_D5 SQ_E5 SQ_F5 SQ_G5 SQ_H5
    SQ_A6 SQ_B6 SQ_C6 SQ_D6 SQ_E6 SQ_F6 SQ_G6 SQ_H6
    SQ_A7 SQ_B7 SQ_C7 SQ_D7 SQ_E7 SQ_F7 SQ_G7 SQ_H7
    SQ_A8 SQ_B8 SQ_C8 SQ_D8 SQ_E8 SQ_F8 SQ_G8 SQ_H8}
}

/// This struct is created by the [`Square::iter`] method.
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        if cur as usize >= Square::NUM_SQUARES {
            return None;
        }

        self.current += 1;

        Some(Square { inner: cur })
    }
}
