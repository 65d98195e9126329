//! Type definitions for board coordinates
//!
//! Provides newtypes for files, ranks and grid coordinates so that row and
//! column indices cannot be mixed up.
//!
//! # Coordinate Convention
//!
//! The grid is indexed `(row, col)`:
//! - Row 0 is rank 8 (Black's back rank, printed first)
//! - Row 7 is rank 1 (White's back rank)
//! - Column 0 is the `a` file

use serde::Serialize;
use std::fmt;

/// Width and height of the board
pub const BOARD_SIZE: usize = 8;

/// Board file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h')
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let file = File::from_char('e').unwrap(); // column 4
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Column index (0-7)
    pub fn col(self) -> u8 {
        self.0
    }
}

/// Board rank on the chessboard, stored as its grid row
///
/// Rank '8' maps to row 0 and rank '1' to row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from a digit character ('1'..='8')
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rank = Rank::from_char('2').unwrap();
    /// assert_eq!(rank.row(), 6);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Rank(b'8' - c as u8)),
            _ => None,
        }
    }

    /// Convert rank back to its digit character ('1'..='8')
    pub fn to_char(self) -> char {
        (b'8' - self.0) as char
    }

    /// Row index (0-7)
    pub fn row(self) -> u8 {
        self.0
    }
}

/// A position on the 8×8 grid
///
/// Always in bounds: the only constructors are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate from grid indices, `None` when off the board
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Grid constructor for loops already bounded by `BOARD_SIZE`
    pub(crate) fn from_grid(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Coord {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Create a coordinate from a file and a rank
    pub fn from_file_rank(file: File, rank: Rank) -> Self {
        Coord {
            row: rank.row(),
            col: file.col(),
        }
    }

    /// Parse a two-character square such as `"e2"`
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Coord::from_file_rank(file, rank))
    }

    /// Convert to algebraic notation (e.g., "e2")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file().to_char(), self.rank().to_char())
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn file(self) -> File {
        File(self.col)
    }

    pub fn rank(self) -> Rank {
        Rank(self.row)
    }

    /// Step by a signed row/column delta, `None` if the result leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as u8, col as u8)
    }

    /// Signed displacement `(end - start)` in rows and columns
    pub fn delta(self, to: Coord) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }

    /// Every square, row-major from a8 to h1
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_from_char() {
        assert_eq!(File::from_char('a').map(File::col), Some(0));
        assert_eq!(File::from_char('e').map(File::col), Some(4));
        assert_eq!(File::from_char('h').map(File::col), Some(7));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
    }

    #[test]
    fn test_rank_maps_eight_to_row_zero() {
        assert_eq!(Rank::from_char('8').map(Rank::row), Some(0));
        assert_eq!(Rank::from_char('1').map(Rank::row), Some(7));
        assert_eq!(Rank::from_char('2').map(Rank::row), Some(6));
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('9'), None);
    }

    #[test]
    fn test_rank_char_round_trip() {
        for c in '1'..='8' {
            let rank = Rank::from_char(c).unwrap();
            assert_eq!(rank.to_char(), c);
        }
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(7, 7).is_some());
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
    }

    #[test]
    fn test_coord_algebraic() {
        let e2 = Coord::from_algebraic("e2").unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        assert_eq!(e2.to_algebraic(), "e2");
        assert_eq!(e2.to_string(), "e2");

        let a8 = Coord::from_algebraic("a8").unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        assert!(Coord::from_algebraic("e22").is_none());
        assert!(Coord::from_algebraic("z2").is_none());
    }

    #[test]
    fn test_coord_offset_stays_on_board() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Coord::new(1, 1));
        assert_eq!(Coord::new(7, 7).unwrap().offset(1, 0), None);
    }

    #[test]
    fn test_coord_all_covers_board() {
        assert_eq!(Coord::all().count(), 64);
        assert_eq!(Coord::all().next(), Coord::new(0, 0));
        assert_eq!(Coord::all().last(), Coord::new(7, 7));
    }
}
