#[macro_use]
extern crate bencher;
extern crate gridchess;

use bencher::Bencher;
use gridchess::{Board, BoardBuilder, Color, PieceKind, Square};
use std::convert::TryInto;
use std::str::FromStr;

fn sq(name: &str) -> Square {
    Square::from_str(name).expect("valid square name")
}

/// The corner mate position used by the checkmate benchmarks.
fn corner_mate() -> Board {
    let mut builder = BoardBuilder::new();
    builder
        .piece(sq("h8"), PieceKind::King, Color::Black)
        .piece(sq("f7"), PieceKind::King, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White);
    builder.try_into().expect("sane position")
}

fn initial_pseudo_legal_moves(bench: &mut Bencher) {
    let board = Board::new();
    bench.iter(|| {
        let moves: usize = board
            .pieces(Color::White)
            .map(|p| p.pseudo_legal_moves(&board).len())
            .sum();
        // 8 single + 8 double pawn steps, 2 moves per knight
        assert_eq!(moves, 20);
    });
}

fn initial_in_check(bench: &mut Bencher) {
    let board = Board::new();
    bench.iter(|| {
        assert!(!board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
    });
}

fn board_make_move(bench: &mut Bencher) {
    let board = Board::new();
    let (e2, e4) = (sq("e2"), sq("e4"));
    bench.iter(|| {
        let mut position = board;
        assert!(position.make_move(e2, e4, Color::White).is_ok());
    });
}

fn checkmate_search_on_mate(bench: &mut Bencher) {
    let board = corner_mate();
    bench.iter(|| assert!(board.checkmate(Color::Black)));
}

fn checkmate_search_with_escape(bench: &mut Bencher) {
    // the same corner, but a rook on a2 can interpose; the search has to
    // probe its way to that move
    let mut builder = BoardBuilder::from(corner_mate());
    builder.piece(sq("a2"), PieceKind::Rook, Color::Black);
    let board: Board = builder.try_into().expect("sane position");
    bench.iter(|| assert!(!board.checkmate(Color::Black)));
}

benchmark_group!(
    benches,
    initial_pseudo_legal_moves,
    initial_in_check,
    board_make_move,
    checkmate_search_on_mate,
    checkmate_search_with_escape
);
benchmark_main!(benches);
