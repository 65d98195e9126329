//! A single board cell
//!
//! Pure container: no legality checks happen here.

use super::piece::Piece;
use crate::game::types::Coord;

#[derive(Clone, Debug)]
pub struct Square {
    coord: Coord,
    piece: Option<Piece>,
}

impl Square {
    pub fn new(coord: Coord) -> Self {
        Self { coord, piece: None }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Install a piece, returning the previous resident marked as captured
    pub fn occupy(&mut self, piece: Piece) -> Option<Piece> {
        let mut previous = self.piece.replace(piece);
        if let Some(resident) = previous.as_mut() {
            resident.set_captured();
        }
        previous
    }

    /// Remove and return the resident piece, leaving the square empty
    pub fn release(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }
}
