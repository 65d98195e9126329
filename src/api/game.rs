//! Game lifecycle

use crate::game::{Game, GlyphStyle};
use tracing::debug;

/// Create a game in the standard starting position
///
/// Turn 0, White to move, no winner. The display buffer mirrors the
/// starting position.
///
/// # Examples
///
/// ```rust
/// let game = chess_rules::api::create_game();
/// assert_eq!(game.turn(), 0);
/// assert_eq!(chess_rules::api::render(&game)[7][4], "K ");
/// ```
pub fn create_game() -> Game {
    create_game_with_glyphs(GlyphStyle::default())
}

/// Create a game whose display buffer uses `glyph_style`
pub fn create_game_with_glyphs(glyph_style: GlyphStyle) -> Game {
    debug!("[GAME] New game ({:?} glyphs)", glyph_style);
    Game::with_glyphs(glyph_style)
}
