use crate::square::Square;
use failure::Fail;

/// Something at the text or construction boundary was not right.
#[derive(Copy, Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// The file character is invalid
    #[fail(display = "Invalid file character (expected a-h)")]
    InvalidFile,

    /// The rank character is invalid
    #[fail(display = "Invalid rank character (expected 1-8)")]
    InvalidRank,

    /// The square string is invalid
    #[fail(display = "Invalid square string (expected something like e4)")]
    InvalidSquare,

    /// The move string is invalid
    #[fail(display = "Invalid move string (expected something like e2e4)")]
    InvalidMove,

    /// The board assembled from a `BoardBuilder` was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Are you sure both kings exist?"
    )]
    InvalidBoard,
}

/// Why a requested move was rejected.
///
/// These are the ordinary, expected rejections of an invalid move request.
/// They are returned to the caller and never retried internally; re-prompting
/// is the game loop's job.
#[derive(Copy, Clone, Debug, Fail, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the source square
    #[fail(display = "no piece found at {}", square)]
    NoPieceAtSource { square: Square },

    /// The piece on the source square belongs to the other player
    #[fail(display = "the piece at {} is not yours to move", square)]
    WrongColor { square: Square },

    /// The destination is not among the piece's pseudo-legal moves
    #[fail(display = "the piece at {} cannot reach {}", from, to)]
    IllegalDestination { from: Square, to: Square },

    /// The move would leave the mover's own king in check
    #[fail(display = "that move would leave your king in check")]
    SelfCheck,
}
