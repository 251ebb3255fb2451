// This file is part of the kingrace library.
// Copyright (C) 2026 The kingrace developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square")
    }
}

impl Error for ParseSquareError {}

/// A square of the 8x8 board.
///
/// Files (columns) `a` to `h` are numbered 0 to 7, ranks (rows) `1` to `8`
/// are numbered 0 to 7. The last rank, index 7, is the goal of the race.
///
/// # Examples
///
/// ```
/// use kingrace::Square;
///
/// let sq: Square = "c2".parse()?;
/// assert_eq!(sq.file(), 2);
/// assert_eq!(sq.rank(), 1);
/// assert_eq!(sq.to_string(), "c2");
/// # Ok::<_, kingrace::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Index of the last rank.
    pub const LAST_RANK: u8 = 7;

    /// Creates a square from zero based file and rank.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in `0..8`.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        assert!(file < 8 && rank < 8, "square coordinates out of range");
        Square(file | (rank << 3))
    }

    /// Creates a square from zero based file and rank, or `None` if either
    /// coordinate is off the board.
    #[inline]
    pub fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Parses a square name like `a2`: a lowercase file letter followed by a
    /// rank digit.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not exactly a letter and
    /// a digit, or if the letter or digit is off the board.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let &[file, rank] = s else {
            return Err(ParseSquareError);
        };
        if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
            return Err(ParseSquareError);
        }

        let file = i32::from(file) - i32::from(b'a');
        let rank: u8 = btoi::btou(&s[1..]).map_err(|_| ParseSquareError)?;
        Square::from_coords(file, i32::from(rank) - 1).ok_or(ParseSquareError)
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline]
    pub fn offset(self, df: i32, dr: i32) -> Option<Square> {
        Square::from_coords(i32::from(self.file()) + df, i32::from(self.rank()) + dr)
    }

    /// Absolute file distance.
    #[inline]
    pub fn file_distance(self, other: Square) -> u8 {
        self.file().abs_diff(other.file())
    }

    /// Absolute rank distance.
    #[inline]
    pub fn rank_distance(self, other: Square) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    /// King distance: the larger of file and rank distance.
    #[inline]
    pub fn distance(self, other: Square) -> u8 {
        self.file_distance(other).max(self.rank_distance(other))
    }

    #[inline]
    pub fn is_last_rank(self) -> bool {
        self.rank() == Square::LAST_RANK
    }

    /// All 64 squares, from `a1` to `h8`, rank by rank.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file()),
            char::from(b'1' + self.rank())
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'A' + self.file()),
            char::from(b'1' + self.rank())
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        for file in 0..8 {
            for rank in 0..8 {
                let square = Square::new(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::new(0, 0)));
        assert_eq!("h8".parse::<Square>(), Ok(Square::new(7, 7)));
        assert_eq!("d5".parse::<Square>(), Ok(Square::new(3, 4)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for name in ["", "a", "a22", "22", "aa", "a0", "a9", "i1", "A1", "é1", " 1"] {
            assert_eq!(name.parse::<Square>(), Err(ParseSquareError), "{name:?}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
        assert_eq!(format!("{:?}", Square::new(4, 1)), "E2");
    }

    #[test]
    fn test_distance() {
        let d2 = Square::new(3, 1);
        let g3 = Square::new(6, 2);
        assert_eq!(d2.distance(g3), 3);
        assert_eq!(d2.file_distance(g3), 3);
        assert_eq!(d2.rank_distance(g3), 1);
    }

    #[test]
    fn test_last_rank() {
        assert_eq!(Square::all().filter(|sq| sq.is_last_rank()).count(), 8);
        assert!(Square::new(3, 7).is_last_rank());
        assert!(!Square::new(3, 6).is_last_rank());
    }

    #[test]
    fn test_offset() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }
}
