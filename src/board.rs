use crate::board_builder::BoardBuilder;
use crate::color::{Color, ALL_COLORS};
use crate::error::{Error, MoveError};
use crate::file::ALL_FILES;
use crate::piece::{Piece, PieceKind};
use crate::square::{Square, NUM_SQUARES};
use std::convert::TryFrom;
use std::fmt;

/// The back row layout, from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A representation of a chess board.  That's why you're here, right?
///
/// The grid is a flat array of 64 optional pieces, indexed by packed square.
/// The board is `Copy`, which is what makes probing a candidate move cheap:
/// [`Board::make_move_new`] applies the move to a copy and the original is
/// untouched on every path.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Construct a `Board` with the standard starting position: pawns on the
    /// second rank of each side, back rows in the usual order.
    ///
    /// ```
    /// use gridchess::{Board, Color, PieceKind, Square};
    /// use std::str::FromStr;
    ///
    /// let board = Board::new();
    /// let queen = board.piece_on(Square::from_str("d1").unwrap()).unwrap();
    /// assert_eq!(queen.kind(), PieceKind::Queen);
    /// assert_eq!(queen.color(), Color::White);
    /// ```
    pub fn new() -> Board {
        let mut board = Board::empty();
        for &color in ALL_COLORS.iter() {
            for &file in ALL_FILES.iter() {
                board.put(Piece::new(
                    color,
                    PieceKind::Pawn,
                    Square::make_square(color.to_second_rank(), file),
                ));
            }
            for (&file, &kind) in ALL_FILES.iter().zip(BACK_ROW.iter()) {
                board.put(Piece::new(
                    color,
                    kind,
                    Square::make_square(color.to_my_backrank(), file),
                ));
            }
        }
        board
    }

    /// A board with no pieces at all.  Not a legal position; the builder and
    /// the setup code fill it in before anyone else sees it.
    fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Store a piece in the slot its own `position` names.
    fn put(&mut self, piece: Piece) {
        self.squares[piece.position().to_index()] = Some(piece);
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.squares[square.to_index()].as_ref()
    }

    /// Enumerate the pieces of one color, in square order.  This is all an
    /// external store needs to serialize a position and later rebuild it
    /// through a [`BoardBuilder`].
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter(move |piece| piece.color() == color)
    }

    /// Where is `color`'s king?
    ///
    /// Panics if the king is gone.  Every position reachable through
    /// validated moves or a validated builder has exactly one king per
    /// color, so a missing king means the board state is corrupt, and there
    /// is nothing sensible to return.
    pub fn king_square(&self, color: Color) -> Square {
        match self.pieces(color).find(|p| p.kind() == PieceKind::King) {
            Some(king) => king.position(),
            None => panic!("no {} king on the board: the position is corrupt", color),
        }
    }

    /// Make a move for `color`, validating it first.
    ///
    /// The checks run in order: a piece must stand on `from`
    /// (`NoPieceAtSource`), it must belong to `color` (`WrongColor`), `to`
    /// must be among its pseudo-legal destinations (`IllegalDestination`),
    /// and the move must not leave `color`'s own king in check
    /// (`SelfCheck`).  On success the grid and the moving piece's position
    /// are updated together; any piece on `to` is captured.  On failure the
    /// board is left exactly as it was.
    ///
    /// ```
    /// use gridchess::{Board, Color, Square};
    /// use std::str::FromStr;
    ///
    /// let mut board = Board::new();
    /// let e2 = Square::from_str("e2").unwrap();
    /// let e4 = Square::from_str("e4").unwrap();
    /// assert_eq!(board.make_move(e2, e4, Color::White), Ok(()));
    ///
    /// // Black cannot move White's pieces
    /// let d2 = Square::from_str("d2").unwrap();
    /// let d3 = Square::from_str("d3").unwrap();
    /// assert!(board.make_move(d2, d3, Color::Black).is_err());
    /// ```
    pub fn make_move(&mut self, from: Square, to: Square, color: Color) -> Result<(), MoveError> {
        let piece = match self.piece_on(from) {
            Some(piece) => *piece,
            None => return Err(MoveError::NoPieceAtSource { square: from }),
        };
        if piece.color() != color {
            return Err(MoveError::WrongColor { square: from });
        }
        if !piece.pseudo_legal_moves(self).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        if self.make_move_new(from, to).in_check(color) {
            return Err(MoveError::SelfCheck);
        }
        self.apply(from, to);
        Ok(())
    }

    /// Apply a move onto a copy of the board, without validating it, and
    /// return the copy.  `self` is untouched.
    ///
    /// This is the probe behind the self-check filter and the checkmate
    /// search.  Note: because nothing is validated, it will happily move the
    /// wrong color or capture a king; it is a probe, not a rules gate.
    ///
    /// ```
    /// use gridchess::{Board, Square};
    /// use std::str::FromStr;
    ///
    /// let board = Board::new();
    /// let e2 = Square::from_str("e2").unwrap();
    /// let e4 = Square::from_str("e4").unwrap();
    /// let probe = board.make_move_new(e2, e4);
    /// assert!(probe.piece_on(e2).is_none());
    /// assert!(board.piece_on(e2).is_some());
    /// ```
    pub fn make_move_new(&self, from: Square, to: Square) -> Board {
        let mut result = *self;
        result.apply(from, to);
        result
    }

    /// Move the piece on `from` to `to`, capturing whatever stood there.
    /// The piece's `position` field is updated in the same step.
    fn apply(&mut self, from: Square, to: Square) {
        if let Some(mut piece) = self.squares[from.to_index()].take() {
            piece.move_to(to);
            self.squares[to.to_index()] = Some(piece);
        }
    }

    /// Is `color`'s king attacked right now?
    ///
    /// The opponent's pieces are scanned with *pseudo-legal* generation: a
    /// pinned attacker still gives check for this test.  Filtering the
    /// opponent's moves for their own king safety here would recurse without
    /// end, and the rules do not ask for it.
    ///
    /// ```
    /// use gridchess::{Board, Color};
    ///
    /// let board = Board::new();
    /// assert!(!board.in_check(Color::White));
    /// assert!(!board.in_check(Color::Black));
    /// ```
    pub fn in_check(&self, color: Color) -> bool {
        let king_square = self.king_square(color);
        self.pieces(!color)
            .any(|piece| piece.pseudo_legal_moves(self).contains(&king_square))
    }

    /// Is `color` checkmated?
    ///
    /// True iff `color` is in check and no move by any of its pieces, to any
    /// of that piece's pseudo-legal destinations, leaves the king safe.
    /// Every candidate is probed on a copy of the board, so the search never
    /// disturbs the position it is asked about.
    ///
    /// ```
    /// use gridchess::{Board, BoardBuilder, Color, PieceKind, Square};
    /// use std::convert::TryInto;
    /// use std::str::FromStr;
    ///
    /// let mut builder = BoardBuilder::new();
    /// builder.piece(Square::from_str("h8").unwrap(), PieceKind::King, Color::Black);
    /// builder.piece(Square::from_str("f7").unwrap(), PieceKind::King, Color::White);
    /// builder.piece(Square::from_str("h1").unwrap(), PieceKind::Rook, Color::White);
    /// let board: Board = builder.try_into().unwrap();
    /// assert!(board.checkmate(Color::Black));
    /// ```
    pub fn checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }
        for piece in self.pieces(color) {
            for dest in piece.pseudo_legal_moves(self) {
                if !self.make_move_new(piece.position(), dest).in_check(color) {
                    return false;
                }
            }
        }
        true
    }

    /// Does this board "make sense"?
    ///
    /// Checks that every stored piece's `position` names the slot it sits
    /// in, and that each color has exactly one king.  This is for sanity
    /// checking positions assembled by hand.
    pub fn is_sane(&self) -> bool {
        for (index, slot) in self.squares.iter().enumerate() {
            if let Some(piece) = slot {
                if piece.position().to_index() != index {
                    return false;
                }
            }
        }
        ALL_COLORS.iter().all(|&color| {
            self.pieces(color)
                .filter(|piece| piece.kind() == PieceKind::King)
                .count()
                == 1
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for index in 0..NUM_SQUARES {
            let square = Square::new(index as u8);
            if let Some((kind, color)) = builder[square] {
                board.put(Piece::new(color, kind, square));
            }
        }
        if board.is_sane() {
            Ok(board)
        } else {
            Err(Error::InvalidBoard)
        }
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}

impl fmt::Display for Board {
    /// Draw the grid with row 0 (Black's home row, rank 8) at the top.
    /// White pieces print uppercase, black pieces lowercase, empty squares
    /// as a dot.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                match self.squares[(row << 3 | col) as usize] {
                    Some(piece) => {
                        let mut glyph = piece.kind().to_char();
                        if piece.color() == Color::White {
                            glyph = glyph.to_ascii_uppercase();
                        }
                        write!(f, " {} ", glyph)?;
                    }
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a  b  c  d  e  f  g  h")
    }
}
