//! Chess piece movement rules
//!
//! One legality predicate per piece kind. Pure functions over the board:
//! nothing here mutates state.
//!
//! Only movement shape, friendly-capture blocking and path obstruction are
//! enforced. Check, castling, en passant, double pawn steps and promotion are
//! not part of these rules.

use crate::game::board::Board;
use crate::game::components::{Piece, PieceColor, PieceType, Square};
use crate::game::types::Coord;

/// Check whether `piece` may move from `start` to `end` on `board`
///
/// `piece` is normally the resident of `start`, but the predicate only reads
/// occupancy of the destination and of intermediate squares, so callers may
/// ask about a piece that has been lifted off the board.
pub fn is_valid_move(piece: &Piece, board: &Board, start: &Square, end: &Square) -> bool {
    // Can't capture your own pieces
    if let Some(target) = end.piece() {
        if target.color() == piece.color() {
            return false;
        }
    }

    let from = start.coord();
    let to = end.coord();

    // A move has to go somewhere
    if from == to {
        return false;
    }

    match piece.piece_type() {
        PieceType::King => is_valid_king_move(from, to),
        PieceType::Queen => is_valid_queen_move(from, to, board),
        PieceType::Rook => is_valid_rook_move(from, to, board),
        PieceType::Bishop => is_valid_bishop_move(from, to, board),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Pawn => is_valid_pawn_move(piece.color(), from, to, board),
    }
}

/// Check the move of whatever piece stands on `from`. Empty squares never move.
pub fn can_move(board: &Board, from: Coord, to: Coord) -> bool {
    match board.piece_at(from) {
        Some(piece) => is_valid_move(piece, board, board.square(from), board.square(to)),
        None => false,
    }
}

/// Every destination the piece on `position` may move to
pub fn get_possible_moves(board: &Board, position: Coord) -> Vec<Coord> {
    Coord::all()
        .filter(|&to| can_move(board, position, to))
        .collect()
}

/// Euclidean distance of at most 1.5, i.e. one step in any direction
fn within_one_step(d_row: i8, d_col: i8) -> bool {
    d_row * d_row + d_col * d_col <= 2
}

fn is_valid_king_move(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    within_one_step(d_row, d_col)
}

fn is_valid_queen_move(from: Coord, to: Coord, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    let straight = d_row == 0 || d_col == 0;
    let diagonal = d_row.abs() == d_col.abs();

    if !straight && !diagonal {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_rook_move(from: Coord, to: Coord, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);

    // No diagonal movement
    if d_row != 0 && d_col != 0 {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_bishop_move(from: Coord, to: Coord, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);

    if d_row.abs() != d_col.abs() {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_knight_move(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

fn is_valid_pawn_move(color: PieceColor, from: Coord, to: Coord, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);

    // One step, forward only. Sideways and backward steps fail here.
    if !within_one_step(d_row, d_col) || d_row != color.pawn_direction() {
        return false;
    }

    if d_col == 0 {
        // The square directly ahead must be free
        return board.is_empty(to);
    }

    // Diagonal steps are captures only
    matches!(board.piece_at(to), Some(target) if target.color() != color)
}

/// Whether every square strictly between `from` and `to` is empty
///
/// Callers guarantee the two squares share a row, a column or a diagonal.
fn is_path_clear(from: Coord, to: Coord, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    let step = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }

    true
}
