use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a kind of chess piece as a very simple enum.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece kinds are there?
pub const NUM_PIECE_KINDS: usize = 6;

/// An array representing each piece kind, in order of ascending value.
pub const ALL_PIECE_KINDS: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Convert the `PieceKind` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The lowercase letter used for this kind when rendering a board.
    /// White pieces are uppercased by the renderer.
    pub fn to_char(&self) -> char {
        match *self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A list of candidate destination squares for one piece.
///
/// 27 is the ceiling: a queen in the middle of an otherwise empty board.
pub type MoveList = ArrayVec<Square, 27>;

/// The four orthogonal directions, as (row, column) deltas.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal directions.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight directions.  Queens slide along these; kings take one step.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight knight offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// A piece on the board: its color, its kind, and the square it stands on.
///
/// The `position` field always equals the square the piece is stored under on
/// the `Board`; every grid mutation updates both in the same step.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    position: Square,
}

impl Piece {
    /// Create a new piece standing on `position`.
    #[inline]
    pub fn new(color: Color, kind: PieceKind, position: Square) -> Piece {
        Piece {
            color,
            kind,
            position,
        }
    }

    /// The color of this piece.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The kind of this piece.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The square this piece stands on.
    #[inline]
    pub fn position(&self) -> Square {
        self.position
    }

    /// Record that this piece now stands on `to`.  Only the `Board` moves
    /// pieces; it keeps the grid slot and this field in sync.
    #[inline]
    pub(crate) fn move_to(&mut self, to: Square) {
        self.position = to;
    }

    /// Generate the pseudo-legal destinations for this piece: every square
    /// its movement geometry reaches that is on the board and not occupied by
    /// a piece of its own color.
    ///
    /// "Pseudo-legal" means the self-check rule is *not* applied here; a
    /// destination in this list may still leave the mover's king in check.
    /// The `Board` filters for that when validating a move.
    ///
    /// ```
    /// use gridchess::{Board, Square};
    /// use std::str::FromStr;
    ///
    /// let board = Board::new();
    /// let knight = board.piece_on(Square::from_str("g1").unwrap()).unwrap();
    /// let moves = knight.pseudo_legal_moves(&board);
    /// // only f3 and h3: e2 holds a friendly pawn
    /// assert_eq!(moves.len(), 2);
    /// ```
    pub fn pseudo_legal_moves(&self, board: &Board) -> MoveList {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board),
            PieceKind::Knight => self.step_moves(board, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.ray_moves(board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.ray_moves(board, &ROOK_DIRECTIONS),
            PieceKind::Queen => self.ray_moves(board, &QUEEN_DIRECTIONS),
            PieceKind::King => self.step_moves(board, &QUEEN_DIRECTIONS),
        }
    }

    /// Single-step movement: one square per offset, kept if it is on the
    /// board and free of friendly pieces.  Knights and kings move this way;
    /// knights simply use offsets no other piece can follow, and ignore
    /// whatever stands in between.
    fn step_moves(&self, board: &Board, offsets: &[(i8, i8)]) -> MoveList {
        let mut moves = MoveList::new();
        for &(rows, cols) in offsets {
            if let Some(dest) = self.position.offset(rows, cols) {
                match board.piece_on(dest) {
                    Some(other) if other.color == self.color => {}
                    _ => moves.push(dest),
                }
            }
        }
        moves
    }

    /// Sliding movement: walk each direction from the piece's square,
    /// keeping empty squares, until the scan leaves the board or hits a
    /// piece.  An enemy piece is kept as a capture; either way the scan stops
    /// there.
    fn ray_moves(&self, board: &Board, directions: &[(i8, i8)]) -> MoveList {
        let mut moves = MoveList::new();
        for &(rows, cols) in directions {
            let mut cursor = self.position;
            while let Some(dest) = cursor.offset(rows, cols) {
                match board.piece_on(dest) {
                    Some(other) => {
                        if other.color != self.color {
                            moves.push(dest);
                        }
                        break;
                    }
                    None => {
                        moves.push(dest);
                        cursor = dest;
                    }
                }
            }
        }
        moves
    }

    /// Pawn movement: one square forward onto an empty square, two squares
    /// forward from the starting row when both are empty, and a diagonal
    /// step only when an enemy piece stands there.  No en passant.
    fn pawn_moves(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(one) = self.position.forward(self.color) {
            if board.piece_on(one).is_none() {
                moves.push(one);

                if self.position.rank() == self.color.to_second_rank() {
                    if let Some(two) = one.forward(self.color) {
                        if board.piece_on(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for &cols in &[-1, 1] {
            if let Some(diag) = self.position.offset(self.color.forward_step(), cols) {
                if let Some(other) = board.piece_on(diag) {
                    if other.color != self.color {
                        moves.push(diag);
                    }
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_builder::BoardBuilder;
    use std::convert::TryInto;
    use std::str::FromStr;

    fn sq(name: &str) -> Square {
        Square::from_str(name).expect("valid square name")
    }

    /// A board holding exactly the given pieces.  Every position needs its
    /// two kings, so tests list them explicitly.
    fn board_with(pieces: &[(&str, PieceKind, Color)]) -> Board {
        let mut builder = BoardBuilder::new();
        for &(name, kind, color) in pieces {
            builder.piece(sq(name), kind, color);
        }
        builder.try_into().expect("sane test position")
    }

    /// Kings tucked into opposite corners, far from the action, plus
    /// whatever the test places.
    fn sparse_board(extra: &[(&str, PieceKind, Color)]) -> Board {
        let mut pieces = vec![
            ("a1", PieceKind::King, Color::White),
            ("h8", PieceKind::King, Color::Black),
        ];
        pieces.extend_from_slice(extra);
        board_with(&pieces)
    }

    fn moves_of(board: &Board, name: &str) -> Vec<Square> {
        let mut moves: Vec<Square> = board
            .piece_on(sq(name))
            .expect("piece on square")
            .pseudo_legal_moves(board)
            .into_iter()
            .collect();
        moves.sort();
        moves
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        let mut list: Vec<Square> = names.iter().map(|n| sq(n)).collect();
        list.sort();
        list
    }

    #[test]
    fn knight_jumps_from_the_middle() {
        let board = sparse_board(&[("d4", PieceKind::Knight, Color::White)]);
        assert_eq!(
            moves_of(&board, "d4"),
            squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );
    }

    #[test]
    fn knight_ignores_intervening_pieces_but_not_friendly_targets() {
        // ring of pawns around the knight, friendly pawn on one target
        let board = sparse_board(&[
            ("d4", PieceKind::Knight, Color::White),
            ("c4", PieceKind::Pawn, Color::White),
            ("d5", PieceKind::Pawn, Color::White),
            ("e4", PieceKind::Pawn, Color::White),
            ("d3", PieceKind::Pawn, Color::White),
            ("f5", PieceKind::Pawn, Color::White),
            ("b5", PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(
            moves_of(&board, "d4"),
            squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3"])
        );
    }

    #[test]
    fn rook_slides_until_blocked() {
        let board = sparse_board(&[
            ("d4", PieceKind::Rook, Color::White),
            ("d6", PieceKind::Pawn, Color::White),
            ("f4", PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(
            moves_of(&board, "d4"),
            // up to d5 (d6 is friendly), right to f4 inclusive (capture),
            // the full left and down rays
            squares(&["d5", "e4", "f4", "a4", "b4", "c4", "d3", "d2", "d1"])
        );
    }

    #[test]
    fn bishop_stays_on_its_diagonals() {
        let board = sparse_board(&[("c1", PieceKind::Bishop, Color::White)]);
        assert_eq!(
            moves_of(&board, "c1"),
            squares(&["b2", "a3", "d2", "e3", "f4", "g5", "h6"])
        );
    }

    #[test]
    fn queen_covers_rook_and_bishop_rays() {
        // kings parked off every one of d4's lines so no ray is cut short
        let kings = [
            ("a2", PieceKind::King, Color::White),
            ("h3", PieceKind::King, Color::Black),
        ];
        let queen_board = board_with(&[kings[0], kings[1], ("d4", PieceKind::Queen, Color::White)]);
        let mut expected: Vec<Square> = Vec::new();
        for &kind in &[PieceKind::Rook, PieceKind::Bishop] {
            let probe = board_with(&[kings[0], kings[1], ("d4", kind, Color::White)]);
            expected.extend(moves_of(&probe, "d4"));
        }
        expected.sort();
        assert_eq!(moves_of(&queen_board, "d4"), expected);
        // the queen ceiling that sizes MoveList
        assert_eq!(expected.len(), 27);
    }

    #[test]
    fn king_takes_single_steps() {
        let board = board_with(&[
            ("a1", PieceKind::King, Color::White),
            ("d4", PieceKind::King, Color::Black),
        ]);
        assert_eq!(
            moves_of(&board, "d4"),
            squares(&["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"])
        );
    }

    #[test]
    fn pieces_never_leave_the_board() {
        // corner placements exercise every edge check
        for &kind in ALL_PIECE_KINDS.iter() {
            let mut pieces = vec![("a1", PieceKind::King, Color::White)];
            if kind != PieceKind::King {
                pieces.push(("h8", PieceKind::King, Color::Black));
            }
            pieces.push(("h1", kind, Color::Black));
            let board = board_with(&pieces);
            for dest in moves_of(&board, "h1") {
                assert!(dest.row() < 8 && dest.col() < 8);
            }
        }
    }

    #[test]
    fn no_piece_ever_targets_a_friendly_square() {
        let board = Board::new();
        for &color in &[Color::White, Color::Black] {
            for piece in board.pieces(color) {
                for dest in piece.pseudo_legal_moves(&board) {
                    assert!(dest.row() < 8 && dest.col() < 8);
                    if let Some(other) = board.piece_on(dest) {
                        assert_ne!(other.color(), piece.color());
                    }
                }
            }
        }
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = sparse_board(&[("e2", PieceKind::Pawn, Color::White)]);
        assert_eq!(moves_of(&board, "e2"), squares(&["e3", "e4"]));

        // off the starting row the double step is gone
        let board = sparse_board(&[("e3", PieceKind::Pawn, Color::White)]);
        assert_eq!(moves_of(&board, "e3"), squares(&["e4"]));

        // black pawns run the other way
        let board = sparse_board(&[("d7", PieceKind::Pawn, Color::Black)]);
        assert_eq!(moves_of(&board, "d7"), squares(&["d6", "d5"]));
    }

    #[test]
    fn pawn_blocked_straight_ahead() {
        let board = sparse_board(&[
            ("e2", PieceKind::Pawn, Color::White),
            ("e3", PieceKind::Pawn, Color::Black),
        ]);
        // a pawn cannot capture forward, and the double step needs both
        // squares empty
        assert_eq!(moves_of(&board, "e2"), squares(&[]));

        let board = sparse_board(&[
            ("e2", PieceKind::Pawn, Color::White),
            ("e4", PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(moves_of(&board, "e2"), squares(&["e3"]));
    }

    #[test]
    fn pawn_captures_only_occupied_diagonals() {
        let board = sparse_board(&[
            ("e4", PieceKind::Pawn, Color::White),
            ("d5", PieceKind::Pawn, Color::Black),
            ("f5", PieceKind::Pawn, Color::White),
        ]);
        // d5 is an enemy (capture), f5 is friendly, the empty diagonal is
        // never a destination
        assert_eq!(moves_of(&board, "e4"), squares(&["d5", "e5"]));
    }
}
