//! Board building blocks: pieces, squares and move records

mod move_record;
mod piece;
mod square;

pub use move_record::MoveRecord;
pub use piece::{Piece, PieceColor, PieceType};
pub use square::Square;
