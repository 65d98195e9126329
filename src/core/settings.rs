//! User preferences
//!
//! Every field has a default, so a partial or older settings file still loads.

use crate::game::GlyphStyle;
use serde::{Deserialize, Serialize};

/// Default `tracing` filter when neither `RUST_LOG` nor the settings give one
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Glyphs used for the board display buffer
    pub glyph_style: GlyphStyle,

    /// Print file and rank labels around the board in the CLI
    pub show_coordinates: bool,

    /// `tracing` env-filter directive, e.g. `"chess_rules=debug"`
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            glyph_style: GlyphStyle::default(),
            show_coordinates: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
