//! Captured pieces tracking
//!
//! Keeps every captured piece in capture order (append-only) and derives
//! per-side lists and material advantage from it.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (capturing it ends the game)
//!
//! Positive advantage means White is ahead, negative means Black is ahead.

use crate::game::components::{Piece, PieceColor, PieceType};

#[derive(Default, Debug, Clone)]
pub struct CapturedPieces {
    pieces: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a piece capture. The piece is flagged captured if it was not already.
    pub fn add_capture(&mut self, mut piece: Piece) {
        piece.set_captured();
        self.pieces.push(piece);
    }

    /// All captured pieces, oldest first
    pub fn all(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces taken by `capturer` (i.e. pieces of the other color)
    pub fn taken_by(&self, capturer: PieceColor) -> Vec<PieceType> {
        self.pieces
            .iter()
            .filter(|piece| piece.color() != capturer)
            .map(Piece::piece_type)
            .collect()
    }

    /// Material difference in pawn units, White minus Black
    pub fn material_advantage(&self) -> i32 {
        self.pieces
            .iter()
            .map(|piece| match piece.color() {
                PieceColor::Black => piece.piece_type().value(),
                PieceColor::White => -piece.piece_type().value(),
            })
            .sum()
    }
}
