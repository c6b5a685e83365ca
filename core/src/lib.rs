//! sitelen-core
//!
//! Text-editing engine for typing sitelen pona glyphs from Latin words.
//! Language data lives in `libsitelen`; this crate only knows about glyphs in
//! the abstract.
//!
//! Public API:
//! - `GlyphRegistry` - Ordered glyph set with word, codepoint and prefix lookup
//! - `caret` - UTF-16 unit / code point / byte offset conversions
//! - `word` - Latin word bounds under the caret
//! - `ChordDetector` - Double-press recognition for marker glyphs
//! - `SuggestionEngine` - Suggestion lists and suggestion application
//! - `InputController` - Per-field state and key dispatch
//! - `Config` - Behavior switches, loadable from TOML
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub mod caret;
pub mod word;

pub mod glyph;
pub use glyph::{Glyph, GlyphEntry, GlyphRegistry, GlyphTable, RegistryError, VARIATION_SELECTOR};

pub mod span;
pub use span::SpanKind;

pub mod chord;
pub use chord::{ChordDetector, ChordKey, ChordState, DEFAULT_CHORD_WINDOW_MS};

pub mod suggestion;
pub use suggestion::{Direction, SuggestionState};

pub mod engine;
pub use engine::{Applied, SuggestionEngine};

pub mod input_buffer;
pub use input_buffer::InputState;

pub mod context;
pub use context::FieldContext;

pub mod controller;
pub use controller::{InputController, KeyEvent, KeyResponse};

/// Errors raised while loading or saving a `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Behavior switches for an input field.
///
/// Missing keys in a TOML file fall back to the defaults, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum gap between two presses of the same key that still forms a
    /// chord, in milliseconds (exclusive)
    pub chord_window_ms: u64,

    /// Tab commits the highlighted suggestion instead of moving the highlight
    pub commit_on_tab: bool,

    /// Text inserted for a space outside cartouches and long glyphs
    /// (e.g. " " or the ideographic space "\u{3000}")
    pub space: String,

    /// Inside an open cartouche or long glyph, a space inserts the span's
    /// extension glyph instead of `space`
    pub extend_spans: bool,

    /// Cap on the number of suggestion strings shown; 0 shows all
    pub max_suggestions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_window_ms: DEFAULT_CHORD_WINDOW_MS,
            commit_on_tab: false,
            space: " ".to_string(),
            extend_spans: true,
            max_suggestions: 0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The space to insert outside spans; never empty.
    pub fn space_str(&self) -> &str {
        if self.space.is_empty() {
            " "
        } else {
            &self.space
        }
    }
}
