//! A chess rules engine on a classic 8x8 mailbox board.
//!
//! The [`Board`] owns a grid of optional pieces, validates square-to-square
//! moves, and detects check and checkmate.  The [`Game`] wrapper adds turn
//! alternation on top of it, and [`BoardBuilder`] lets you assemble arbitrary
//! positions (or pull apart an existing one) square by square.
//!
//! The rule set is deliberately reduced: no castling, no en passant, no
//! promotion, and no draw detection.
//!
//! ```
//! use gridchess::{ChessMove, Color, Game};
//! use std::str::FromStr;
//!
//! let mut game = Game::new();
//! game.make_move(ChessMove::from_str("e2e4").unwrap()).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

pub mod color;
pub mod piece;
pub mod square;
pub mod rank;
pub mod file;
pub mod chess_move;
pub mod error;
pub mod board;
pub mod board_builder;
pub mod game;

pub use crate::board::Board;
pub use crate::board_builder::BoardBuilder;
pub use crate::chess_move::ChessMove;
pub use crate::color::{Color, ALL_COLORS, NUM_COLORS};
pub use crate::error::{Error, MoveError};
pub use crate::file::{File, ALL_FILES, NUM_FILES};
pub use crate::game::{Game, GameResult};
pub use crate::piece::{MoveList, Piece, PieceKind, ALL_PIECE_KINDS, NUM_PIECE_KINDS};
pub use crate::rank::{Rank, ALL_RANKS, NUM_RANKS};
pub use crate::square::{Square, NUM_SQUARES};
