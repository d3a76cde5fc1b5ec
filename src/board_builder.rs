use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::{Square, NUM_SQUARES};
use std::ops::{Index, IndexMut};

/// Represents a chess position that has *not* been validated for legality.
///
/// This structure is useful in the following cases:
/// * You are trying to build a position manually in code, for a test or a
///   puzzle.  The `Board` structure insists on both kings being present;
///   this structure will let you place pieces arbitrarily first.
/// * You are an external store reconstructing a saved position from an
///   enumeration of occupied squares.
///
/// ```
/// use gridchess::{Board, BoardBuilder, Color, PieceKind, Square};
/// use std::convert::TryInto;
/// use std::str::FromStr;
///
/// let a1 = Square::from_str("a1").unwrap();
/// let h8 = Square::from_str("h8").unwrap();
///
/// let mut position = BoardBuilder::new();
/// position.piece(a1, PieceKind::King, Color::White);
/// position.piece(h8, PieceKind::King, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[a1], Some((PieceKind::King, Color::White)));
///
/// let board: Board = position.try_into().unwrap();
/// assert!(board.is_sane());
/// ```
#[derive(Copy, Clone)]
pub struct BoardBuilder {
    pieces: [Option<(PieceKind, Color)>; NUM_SQUARES],
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder: no pieces on any square.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
        }
    }

    /// Set up a board with everything pre-loaded.
    ///
    /// ```
    /// use gridchess::{Board, BoardBuilder, Color, PieceKind, Square};
    /// use std::convert::TryInto;
    /// use std::str::FromStr;
    ///
    /// let board: Board = BoardBuilder::setup(&[
    ///         (Square::from_str("a1").unwrap(), PieceKind::King, Color::White),
    ///         (Square::from_str("h8").unwrap(), PieceKind::King, Color::Black),
    ///     ])
    ///     .try_into()
    ///     .unwrap();
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, PieceKind, Color)>,
    ) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        for &(square, kind, color) in pieces.into_iter() {
            result.pieces[square.to_index()] = Some((kind, color));
        }
        result
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if
    /// needed.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece<'a>(&'a mut self, square: Square, kind: PieceKind, color: Color) -> &'a mut Self {
        self[square] = Some((kind, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self[square] = None;
        self
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::new()
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<(PieceKind, Color)>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.pieces[square.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.pieces[square.to_index()]
    }
}

impl From<&Board> for BoardBuilder {
    /// Pull an existing board apart into its unvalidated form, by
    /// enumerating the occupied squares of both colors.
    fn from(board: &Board) -> BoardBuilder {
        let mut builder = BoardBuilder::new();
        for &color in crate::color::ALL_COLORS.iter() {
            for piece in board.pieces(color) {
                builder.piece(piece.position(), piece.kind(), color);
            }
        }
        builder
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> BoardBuilder {
        BoardBuilder::from(&board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::convert::TryInto;
    use std::str::FromStr;

    fn sq(name: &str) -> Square {
        Square::from_str(name).expect("valid square name")
    }

    #[test]
    fn indexing_and_clearing() {
        let mut builder = BoardBuilder::new();
        builder.piece(sq("c3"), PieceKind::Bishop, Color::White);
        assert_eq!(builder[sq("c3")], Some((PieceKind::Bishop, Color::White)));

        builder.clear_square(sq("c3"));
        assert_eq!(builder[sq("c3")], None);
    }

    #[test]
    fn a_board_without_both_kings_is_invalid() {
        let empty: Result<Board, Error> = BoardBuilder::new().try_into();
        assert_eq!(empty.err(), Some(Error::InvalidBoard));

        let mut one_king = BoardBuilder::new();
        one_king.piece(sq("e1"), PieceKind::King, Color::White);
        let result: Result<Board, Error> = one_king.try_into();
        assert_eq!(result.err(), Some(Error::InvalidBoard));

        let mut two_white_kings = BoardBuilder::new();
        two_white_kings.piece(sq("e1"), PieceKind::King, Color::White);
        two_white_kings.piece(sq("a1"), PieceKind::King, Color::White);
        two_white_kings.piece(sq("e8"), PieceKind::King, Color::Black);
        let result: Result<Board, Error> = two_white_kings.try_into();
        assert_eq!(result.err(), Some(Error::InvalidBoard));
    }

    #[test]
    fn board_round_trips_through_the_builder() {
        let board = Board::new();
        let builder = BoardBuilder::from(&board);
        let rebuilt: Board = builder.try_into().expect("the starting position is sane");
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn built_pieces_carry_their_positions() {
        let mut builder = BoardBuilder::new();
        builder
            .piece(sq("e1"), PieceKind::King, Color::White)
            .piece(sq("e8"), PieceKind::King, Color::Black)
            .piece(sq("b7"), PieceKind::Queen, Color::White);
        let board: Board = builder.try_into().unwrap();

        let queen = board.piece_on(sq("b7")).unwrap();
        assert_eq!(queen.position(), sq("b7"));
        assert!(board.is_sane());
    }
}
