use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a move in memory: a source square and a destination square.
///
/// This is the square-to-square form the game loop submits.  There is no
/// promotion piece; pawns reaching the far row simply stay pawns in this rule
/// set.
#[derive(Clone, Copy, Eq, Ord, PartialOrd, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination
    /// `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Parse a move written as two square names back to back.
    ///
    /// ```
    /// use gridchess::{ChessMove, Square};
    /// use std::str::FromStr;
    ///
    /// let mv = ChessMove::new(
    ///     Square::from_str("e2").unwrap(),
    ///     Square::from_str("e4").unwrap(),
    /// );
    /// assert_eq!(ChessMove::from_str("e2e4").unwrap(), mv);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(Error::InvalidMove);
        }
        let source = Square::from_str(&s[0..2]).map_err(|_| Error::InvalidMove)?;
        let dest = Square::from_str(&s[2..4]).map_err(|_| Error::InvalidMove)?;
        Ok(ChessMove::new(source, dest))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_strings() {
        assert_eq!(ChessMove::from_str(""), Err(Error::InvalidMove));
        assert_eq!(ChessMove::from_str("e2"), Err(Error::InvalidMove));
        assert_eq!(ChessMove::from_str("e2e-"), Err(Error::InvalidMove));
        assert_eq!(ChessMove::from_str("e2e44"), Err(Error::InvalidMove));
        assert_eq!(ChessMove::from_str("e7e8q"), Err(Error::InvalidMove));
    }

    #[test]
    fn valid_move_strings() {
        for s in &["e2e4", "g1f3", "a2a4", "h8h1"] {
            let mv = ChessMove::from_str(s).expect("valid move string");
            assert_eq!(&mv.to_string(), s);
        }
    }
}
