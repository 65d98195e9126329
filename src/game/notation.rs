//! Coordinate move notation
//!
//! Moves are entered as four characters, `<file><rank><file><rank>`, for
//! example `e2e3`. Parsing runs in stages so each failure has its own
//! rejection:
//!
//! 1. [`parse`] - exactly four characters
//! 2. [`RawMove::validate_bounds`] - files `a`-`h`, ranks `1`-`8`
//! 3. [`RawMove::to_indices`] - grid coordinates (rank `8` is row 0)
//! 4. [`check_piece_legal`] - the occupying piece accepts the move
//!
//! No disambiguation, capture, check or promotion suffixes are accepted.

use crate::game::board::Board;
use crate::game::components::Piece;
use crate::game::error::{MoveRejection, MoveResult};
use crate::game::rules::is_valid_move;
use crate::game::types::{Coord, File, Rank};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Notation length in characters
pub const NOTATION_LEN: usize = 4;

/// Four notation characters, not yet bounds-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMove([char; NOTATION_LEN]);

/// Split raw input into its four characters
pub fn parse(raw: &str) -> MoveResult<RawMove> {
    let chars: Vec<char> = raw.chars().collect();
    let chars: [char; NOTATION_LEN] = chars
        .try_into()
        .map_err(|_| MoveRejection::MalformedNotation {
            input: raw.to_string(),
        })?;
    Ok(RawMove(chars))
}

impl RawMove {
    pub fn chars(&self) -> [char; NOTATION_LEN] {
        self.0
    }

    /// Files at positions 0 and 2, ranks at positions 1 and 3
    pub fn validate_bounds(&self) -> MoveResult<()> {
        for (position, &c) in self.0.iter().enumerate() {
            let valid = if position % 2 == 0 {
                File::from_char(c).is_some()
            } else {
                Rank::from_char(c).is_some()
            };
            if !valid {
                return Err(self.invalid_at(position));
            }
        }
        Ok(())
    }

    /// Map the characters to `(start, end)` grid coordinates
    pub fn to_indices(&self) -> MoveResult<MoveRequest> {
        let [from_file, from_rank, to_file, to_rank] = self.0;
        let from = Coord::from_file_rank(
            File::from_char(from_file).ok_or_else(|| self.invalid_at(0))?,
            Rank::from_char(from_rank).ok_or_else(|| self.invalid_at(1))?,
        );
        let to = Coord::from_file_rank(
            File::from_char(to_file).ok_or_else(|| self.invalid_at(2))?,
            Rank::from_char(to_rank).ok_or_else(|| self.invalid_at(3))?,
        );
        Ok(MoveRequest { from, to })
    }

    fn invalid_at(&self, position: usize) -> MoveRejection {
        MoveRejection::InvalidCoordinate {
            input: self.0.iter().collect(),
            position,
            found: self.0[position],
            expected: if position % 2 == 0 {
                "file (a-h)"
            } else {
                "rank (1-8)"
            },
        }
    }
}

/// A bounds-checked move between two squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    from: Coord,
    to: Coord,
}

impl MoveRequest {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn to(&self) -> Coord {
        self.to
    }

    /// `[start_row, start_col, end_row, end_col]`
    pub fn indices(&self) -> [usize; 4] {
        [
            self.from.row() as usize,
            self.from.col() as usize,
            self.to.row() as usize,
            self.to.col() as usize,
        ]
    }
}

impl FromStr for MoveRequest {
    type Err = MoveRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse(s)?;
        raw.validate_bounds()?;
        raw.to_indices()
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Ask the piece on the start square whether it may make the move
///
/// Returns the moving piece when the move is accepted.
pub fn check_piece_legal(board: &Board, request: &MoveRequest) -> MoveResult<Piece> {
    let start = board.square(request.from);
    let Some(piece) = start.piece().copied() else {
        debug!("[MOVE] {} rejected: empty source square", request);
        return Err(MoveRejection::EmptySquare {
            square: request.from,
        });
    };

    if !is_valid_move(&piece, board, start, board.square(request.to)) {
        debug!(
            "[MOVE] {} rejected: illegal for {:?} {:?}",
            request,
            piece.color(),
            piece.piece_type()
        );
        return Err(MoveRejection::IllegalMove {
            piece_type: piece.piece_type(),
            from: request.from,
            to: request.to,
        });
    }

    Ok(piece)
}
