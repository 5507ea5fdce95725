//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back rank ("rank 8"), row 7 is White's ("rank 1").
/// Col 0..7 maps to files a..h. Coordinates may be out of range: off-board
/// squares are legal values that every board accessor treats as empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (row, col)

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub fn new(row: i8, col: i8) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_in_bounds().then_some(sq)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    /// Both coordinates in 0..8
    #[inline]
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.0 >= 0 && self.0 < 8 && self.1 >= 0 && self.1 < 8
    }

    /// The square shifted by (d_row, d_col); may land off the board
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square(self.0 + d_row, self.1 + d_col)
    }

    /// Row-major index (0-63); only meaningful for in-bounds squares
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize * 8 + self.1 as usize
    }

    /// Create a square from a row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx / 8) as i8, (idx % 8) as i8)
    }

    /// Iterate all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_in_bounds() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfBounds { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 8 - (b - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
