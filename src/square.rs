use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the chess board, addressed by (row, column) with
/// each coordinate in 0..=7.  Row 0 is the top of the board as rendered
/// (Black's home row), row 7 the bottom (White's home row).
///
/// The two coordinates are packed into one byte as `row << 3 | col`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Create a new square, given a packed index.
    /// Note: It is invalid, but allowed, to pass in a number >= 64.  Doing so
    /// will crash stuff.
    #[inline]
    pub fn new(sq: u8) -> Square {
        Square(sq)
    }

    /// Make a square given a rank and a file.
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square(rank.to_row() << 3 | file.to_col())
    }

    /// Make a square from raw (row, column) coordinates, or `None` if either
    /// coordinate is out of range.  This is the entry point for callers that
    /// address the board numerically.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square((row as u8) << 3 | col as u8))
        } else {
            None
        }
    }

    /// Return the row of this square.  Row 0 is Black's home row.
    #[inline]
    pub fn row(&self) -> u8 {
        self.0 >> 3
    }

    /// Return the column of this square.  Column 0 is the a-file.
    #[inline]
    pub fn col(&self) -> u8 {
        self.0 & 7
    }

    /// Return the rank of this square, as players name it.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::from_row(self.row())
    }

    /// Return the file of this square.
    #[inline]
    pub fn file(&self) -> File {
        File::from_index(self.col() as usize)
    }

    /// If the square `rows` down and `cols` right of me is still on the
    /// board, return it.  Otherwise, `None`.  Negative deltas go up and left.
    #[inline]
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Square> {
        let row = self.row() as i8 + rows;
        let col = self.col() as i8 + cols;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square((row as u8) << 3 | col as u8))
        } else {
            None
        }
    }

    /// If there is a square "forward", given my `Color`, go in that
    /// direction.  Otherwise, `None`.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(color.forward_step(), 0)
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parse a square name like `e4`: a file letter a-h, then a rank digit
    /// 1-8.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(Error::InvalidSquare);
        }
        let file = File::from_str(&s[0..1]).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(&s[1..2]).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
