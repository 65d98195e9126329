//! Board container and starting position
//!
//! The board owns an 8×8 grid of [`Square`]s plus a display buffer of
//! two-character glyphs. The buffer is a cached view of square occupancy:
//! call [`Board::update_display`] after mutating squares directly, or use the
//! board-level helpers which refresh it for you.
//!
//! No legality logic lives here. See [`crate::game::rules`].

use crate::game::components::{Piece, PieceColor, PieceType, Square};
use crate::game::types::{Coord, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyph shown for an empty square
pub const EMPTY_GLYPH: &str = ". ";

/// Standard back rank order from the `a` file to the `h` file
const BACK_ROW: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// How pieces are drawn in the display buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphStyle {
    /// Same letter for both colors (`"K "`, `"P "`, ...)
    #[default]
    Uniform,
    /// Uppercase for White, lowercase for Black
    CaseByColor,
}

impl FromStr for GlyphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(GlyphStyle::Uniform),
            "case_by_color" | "case-by-color" => Ok(GlyphStyle::CaseByColor),
            other => Err(format!(
                "unknown glyph style '{other}' (expected 'uniform' or 'case_by_color')"
            )),
        }
    }
}

/// Two-character glyph for a piece
pub fn glyph(piece: &Piece, style: GlyphStyle) -> &'static str {
    let lowercase = style == GlyphStyle::CaseByColor && piece.color() == PieceColor::Black;
    match (piece.piece_type(), lowercase) {
        (PieceType::King, false) => "K ",
        (PieceType::Queen, false) => "Q ",
        (PieceType::Rook, false) => "R ",
        (PieceType::Bishop, false) => "B ",
        (PieceType::Knight, false) => "N ",
        (PieceType::Pawn, false) => "P ",
        (PieceType::King, true) => "k ",
        (PieceType::Queen, true) => "q ",
        (PieceType::Rook, true) => "r ",
        (PieceType::Bishop, true) => "b ",
        (PieceType::Knight, true) => "n ",
        (PieceType::Pawn, true) => "p ",
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    display: [[&'static str; BOARD_SIZE]; BOARD_SIZE],
    glyph_style: GlyphStyle,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position
    pub fn new() -> Self {
        Self::with_glyphs(GlyphStyle::default())
    }

    /// Board in the standard starting position using the given glyph style
    pub fn with_glyphs(glyph_style: GlyphStyle) -> Self {
        let mut board = Self::empty();
        board.glyph_style = glyph_style;
        board.reset();
        board
    }

    /// Board with no pieces at all
    pub fn empty() -> Self {
        Self {
            squares: std::array::from_fn(|row| {
                std::array::from_fn(|col| Square::new(Coord::from_grid(row, col)))
            }),
            display: [[EMPTY_GLYPH; BOARD_SIZE]; BOARD_SIZE],
            glyph_style: GlyphStyle::default(),
        }
    }

    /// Put every piece on its starting square
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn reset(&mut self) {
        for row in self.squares.iter_mut() {
            for square in row.iter_mut() {
                square.release();
            }
        }

        for (color, back_row, pawn_row) in [(PieceColor::Black, 0, 1), (PieceColor::White, 7, 6)] {
            for (col, &piece_type) in BACK_ROW.iter().enumerate() {
                self.squares[back_row][col].occupy(Piece::new(color, piece_type));
                self.squares[pawn_row][col].occupy(Piece::new(color, PieceType::Pawn));
            }
        }

        self.update_display();
    }

    /// Recompute the glyph buffer from square occupancy
    pub fn update_display(&mut self) {
        for (row, squares) in self.squares.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                self.display[row][col] = match square.piece() {
                    Some(piece) => glyph(piece, self.glyph_style),
                    None => EMPTY_GLYPH,
                };
            }
        }
    }

    /// The cached glyph buffer, row 0 first
    pub fn display(&self) -> &[[&'static str; BOARD_SIZE]; BOARD_SIZE] {
        &self.display
    }

    pub fn glyph_style(&self) -> GlyphStyle {
        self.glyph_style
    }

    pub fn set_glyph_style(&mut self, glyph_style: GlyphStyle) {
        self.glyph_style = glyph_style;
        self.update_display();
    }

    pub fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.row() as usize][coord.col() as usize]
    }

    /// Mutable access to a square. The display buffer is not refreshed.
    pub fn square_mut(&mut self, coord: Coord) -> &mut Square {
        &mut self.squares[coord.row() as usize][coord.col() as usize]
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.square(coord).piece()
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        !self.square(coord).is_occupied()
    }

    /// Place a piece and refresh the display, returning any displaced piece
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        let previous = self.square_mut(coord).occupy(piece);
        self.update_display();
        previous
    }

    /// Remove a piece and refresh the display
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        let removed = self.square_mut(coord).release();
        self.update_display();
        removed
    }

    /// All occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &Piece)> {
        self.squares
            .iter()
            .flatten()
            .filter_map(|square| square.piece().map(|piece| (square.coord(), piece)))
    }

    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }

    /// Text rendering with rank labels on the left and files underneath
    pub fn render_with_coordinates(&self) -> String {
        let mut out = String::new();
        for (row, glyphs) in self.display.iter().enumerate() {
            out.push((b'8' - row as u8) as char);
            out.push(' ');
            out.push_str(glyphs.concat().trim_end());
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, glyphs) in self.display.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            f.write_str(glyphs.concat().trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_reset_places_thirty_two_pieces() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 32);

        let white = board.pieces().filter(|(_, p)| p.is_white()).count();
        let black = board.pieces().filter(|(_, p)| !p.is_white()).count();
        assert_eq!(white, 16);
        assert_eq!(black, 16);
    }

    #[test]
    fn test_reset_pawn_ranks() {
        let board = Board::new();
        for col in 0..8 {
            let black = board.piece_at(at(1, col)).unwrap();
            assert_eq!(black.piece_type(), PieceType::Pawn);
            assert_eq!(black.color(), PieceColor::Black);

            let white = board.piece_at(at(6, col)).unwrap();
            assert_eq!(white.piece_type(), PieceType::Pawn);
            assert_eq!(white.color(), PieceColor::White);
        }
    }

    #[test]
    fn test_reset_back_rank_order() {
        let board = Board::new();
        for (col, expected) in BACK_ROW.iter().enumerate() {
            let black = board.piece_at(at(0, col as u8)).unwrap();
            let white = board.piece_at(at(7, col as u8)).unwrap();
            assert_eq!(black.piece_type(), *expected);
            assert_eq!(white.piece_type(), *expected);
            assert_eq!(black.color(), PieceColor::Black);
            assert_eq!(white.color(), PieceColor::White);
        }
        assert!(board.piece_at(at(7, 4)).unwrap().is_king());
        assert_eq!(board.piece_at(at(7, 3)).unwrap().piece_type(), PieceType::Queen);
    }

    #[test]
    fn test_middle_rows_empty_after_reset() {
        let board = Board::new();
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(at(row, col)));
            }
        }
    }

    #[test]
    fn test_reset_after_mutation_restores_start() {
        let mut board = Board::new();
        board.remove(at(6, 4));
        board.place(at(3, 3), Piece::new(PieceColor::White, PieceType::Queen));
        board.reset();
        assert_eq!(board.occupied_count(), 32);
        assert!(board.is_empty(at(3, 3)));
    }

    #[test]
    fn test_display_follows_occupancy() {
        let mut board = Board::new();
        assert_eq!(board.display()[7][4], "K ");
        assert_eq!(board.display()[7][6], "N ");
        assert_eq!(board.display()[4][4], EMPTY_GLYPH);

        let pawn = board.square_mut(at(6, 4)).release().unwrap();
        board.square_mut(at(4, 4)).occupy(pawn);
        assert_eq!(board.display()[4][4], EMPTY_GLYPH, "buffer is stale until refreshed");

        board.update_display();
        assert_eq!(board.display()[4][4], "P ");
        assert_eq!(board.display()[6][4], EMPTY_GLYPH);
    }

    #[test]
    fn test_case_by_color_glyphs() {
        let board = Board::with_glyphs(GlyphStyle::CaseByColor);
        assert_eq!(board.display()[0][4], "k ");
        assert_eq!(board.display()[7][4], "K ");
        assert_eq!(board.display()[1][0], "p ");
    }

    #[test]
    fn test_board_text_rendering() {
        let board = Board::new();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "R N B Q K B N R");
        assert_eq!(lines[3], ". . . . . . . .");

        let labelled = board.render_with_coordinates();
        assert!(labelled.starts_with("8 R N B Q K B N R"));
        assert!(labelled.ends_with("a b c d e f g h"));
    }

    #[test]
    fn test_glyph_style_from_str() {
        assert_eq!("uniform".parse::<GlyphStyle>(), Ok(GlyphStyle::Uniform));
        assert_eq!("case-by-color".parse::<GlyphStyle>(), Ok(GlyphStyle::CaseByColor));
        assert!("fancy".parse::<GlyphStyle>().is_err());
    }
}
