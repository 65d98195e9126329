//! Core module - settings and application-level errors
//!
//! # Resources
//!
//! - [`EngineSettings`] - User preferences (glyph style, coordinates, log filter)
//! - [`CoreError`] - Settings I/O and serialization failures
//!
//! Settings live in `settings.json` under the platform configuration
//! directory; see [`settings_persistence`].

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::EngineSettings;
pub use settings_persistence::{load_or_default, load_settings, save_settings, settings_path};
