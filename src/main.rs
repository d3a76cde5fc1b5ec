use gridchess::{ChessMove, Game, Square};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Accept a move typed either as "e2 e4" or as "e2e4".
fn parse_move(line: &str) -> Option<ChessMove> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match *tokens.as_slice() {
        [both] => ChessMove::from_str(both).ok(),
        [from, to] => {
            let source = Square::from_str(from).ok()?;
            let dest = Square::from_str(to).ok()?;
            Some(ChessMove::new(source, dest))
        }
        _ => None,
    }
}

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        println!("\n{}", game.current_position());
        if game
            .current_position()
            .in_check(game.side_to_move())
        {
            println!("{} is in check!", game.side_to_move());
        }

        print!("{}, enter your move (e.g. e2 e4): ", game.side_to_move());
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        let chess_move = match parse_move(&line) {
            Some(chess_move) => chess_move,
            None => {
                println!("Could not read that as a move.  Try again.");
                continue;
            }
        };

        if let Err(rejection) = game.make_move(chess_move) {
            println!("Error: {}.  Try again.", rejection);
            continue;
        }

        if let Some(result) = game.result() {
            println!("\n{}", game.current_position());
            match result {
                gridchess::GameResult::WhiteCheckmates => println!("White wins!  Checkmate!"),
                gridchess::GameResult::BlackCheckmates => println!("Black wins!  Checkmate!"),
            }
            break;
        }
    }
}
