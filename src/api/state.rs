//! Game state queries

use crate::game::notation::check_piece_legal;
use crate::game::rules::get_possible_moves;
use crate::game::types::BOARD_SIZE;
use crate::game::{Coord, Game, MoveRequest, PieceColor};

/// Winning side, if a king has been captured
pub fn winner(game: &Game) -> Option<PieceColor> {
    game.winner()
}

/// The 8x8 display buffer, row 0 = rank 8
///
/// Each cell is a two-character glyph: `"K "`, `"P "`, ... or `". "`.
pub fn render(game: &Game) -> [[&'static str; BOARD_SIZE]; BOARD_SIZE] {
    game.render()
}

/// Whether the piece on the start square accepts `raw_move`
///
/// Ignores whose turn it is and who owns the piece.
pub fn is_legal(game: &Game, raw_move: &str) -> bool {
    raw_move
        .parse::<MoveRequest>()
        .ok()
        .is_some_and(|request| check_piece_legal(game.board(), &request).is_ok())
}

/// Destinations reachable by the piece on `square` (`"e2"` style)
///
/// Empty when the square is malformed or unoccupied.
pub fn legal_destinations(game: &Game, square: &str) -> Vec<Coord> {
    Coord::from_algebraic(square)
        .map(|from| get_possible_moves(game.board(), from))
        .unwrap_or_default()
}
