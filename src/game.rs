use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::MoveError;

/// What was the result of this game?
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    WhiteCheckmates,
    BlackCheckmates,
}

/// A two-player game: a board plus turn bookkeeping.
///
/// `Game` alternates the side to move, feeds each submitted move to the
/// board with the right color, and reports the winner once the side to move
/// has no way out of check.  With no draw detection in the rule set, a
/// finished game always has a checkmated side.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    moves: Vec<ChessMove>,
}

impl Game {
    /// Create a new `Game` with the initial position, White to move.
    ///
    /// ```
    /// use gridchess::{Board, Color, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::new());
    /// assert_eq!(game.side_to_move(), Color::White);
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::new())
    }

    /// Create a new `Game` from a specific position, White to move.
    pub fn new_with_board(board: Board) -> Game {
        Game {
            board,
            side_to_move: Color::White,
            moves: vec![],
        }
    }

    /// Get the current position on the board.
    pub fn current_position(&self) -> Board {
        self.board
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The moves played so far, in order.
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    /// Make a move for the side to move.  On success the turn passes to the
    /// other side; on rejection the board and the turn are unchanged and the
    /// caller is expected to re-prompt.
    ///
    /// There is no need to gate this on [`Game::result`]: a checkmated side
    /// has no move that passes validation, so a finished game rejects
    /// everything anyway.
    ///
    /// ```
    /// use gridchess::{ChessMove, Color, Game};
    /// use std::str::FromStr;
    ///
    /// let mut game = Game::new();
    /// game.make_move(ChessMove::from_str("g1f3").unwrap()).unwrap();
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// assert_eq!(game.moves().len(), 1);
    /// ```
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<(), MoveError> {
        self.board.make_move(
            chess_move.get_source(),
            chess_move.get_dest(),
            self.side_to_move,
        )?;
        self.moves.push(chess_move);
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// What is the result of this game, if it is over?
    ///
    /// `Some(WhiteCheckmates)` means Black, the side to move, is checkmated;
    /// symmetrically for `Some(BlackCheckmates)`.  `None` while the game is
    /// still going.
    pub fn result(&self) -> Option<GameResult> {
        if self.board.checkmate(self.side_to_move) {
            Some(match self.side_to_move {
                Color::White => GameResult::BlackCheckmates,
                Color::Black => GameResult::WhiteCheckmates,
            })
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
