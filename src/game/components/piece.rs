//! Piece definitions
//!
//! The piece set is closed: six kinds, two colors. A piece does not store its
//! own coordinates; its position is whichever square currently holds it.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Turn parity owned by this side (White moves on even turns)
    pub fn turn_parity(self) -> u32 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }

    /// Row delta of a single pawn advance
    ///
    /// White starts on row 6 and advances towards row 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Single-letter symbol (uppercase)
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }

    /// Material value in pawns
    ///
    /// King has value 0: capturing it ends the game instead.
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/// A piece on (or taken off) the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Piece {
    color: PieceColor,
    piece_type: PieceType,
    captured: bool,
}

impl Piece {
    pub fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self {
            color,
            piece_type,
            captured: false,
        }
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn is_white(&self) -> bool {
        self.color == PieceColor::White
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Flag the piece as taken. There is no way back.
    pub fn set_captured(&mut self) {
        self.captured = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
        assert_eq!(PieceColor::White.opponent().opponent(), PieceColor::White);
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(PieceColor::White.turn_parity(), 0);
        assert_eq!(PieceColor::Black.turn_parity(), 1);
    }

    #[test]
    fn test_new_piece_is_not_captured() {
        let mut piece = Piece::new(PieceColor::Black, PieceType::Knight);
        assert!(!piece.is_captured());
        assert!(!piece.is_white());
        piece.set_captured();
        assert!(piece.is_captured());
    }

    #[test]
    fn test_symbols_are_distinct() {
        let kinds = [
            PieceType::King,
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Pawn,
        ];
        let mut symbols: Vec<char> = kinds.iter().map(|k| k.symbol()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), kinds.len(), "King and Knight must not share a letter");
    }
}
