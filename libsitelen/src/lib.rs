//! libsitelen crate root
//!
//! This crate carries the sitelen pona glyph table and wires it into the
//! language-agnostic `sitelen-core` engine.
//!
//! Public API exported here:
//! - `build_default_registry` / `default_registry` for the built-in table
//! - `new_controller` for an input field over the shared table
//! - `SitelenConfig` from `config`

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

pub mod config;
mod glyphs;

// Re-export the engine types callers need alongside the table.
pub use sitelen_core::{
    Config, ConfigError, Direction, FieldContext, Glyph, GlyphEntry, GlyphRegistry, GlyphTable,
    InputController, KeyEvent, KeyResponse, RegistryError, SpanKind, SuggestionEngine,
    SuggestionState,
};

pub use config::SitelenConfig;

static DEFAULT_REGISTRY: Lazy<Arc<GlyphRegistry>> =
    Lazy::new(|| Arc::new(build_default_registry()));

/// Number of rows in the built-in glyph table.
pub fn default_table_len() -> usize {
    glyphs::GLYPHS.len()
}

/// Build a fresh registry from the built-in glyph table.
///
/// Rows the registry rejects are logged and skipped, so a bad row costs one
/// glyph rather than the whole table.
pub fn build_default_registry() -> GlyphRegistry {
    let mut registry = GlyphRegistry::new();
    for &(word, codepoint, has_variant, is_longable) in glyphs::GLYPHS {
        if let Err(err) = registry.register(word, codepoint, has_variant, is_longable) {
            warn!(word, codepoint = %codepoint.escape_unicode(), %err, "skipping glyph");
        }
    }
    registry
}

/// The built-in registry, built once and shared by every caller.
pub fn default_registry() -> Arc<GlyphRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Controller for one input field over the built-in table.
pub fn new_controller(config: Config) -> InputController {
    InputController::with_config(default_registry(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_registers_completely() {
        let registry = build_default_registry();
        assert_eq!(registry.len(), default_table_len());
        assert_eq!(registry.len(), 146);
    }

    #[test]
    fn test_table_starts_with_a() {
        let registry = build_default_registry();
        let first = registry.iter().next().unwrap();
        assert_eq!(first.word(), "a");
        assert_eq!(first.codepoint(), '\u{F1900}');
        assert!(first.is_longable());
    }

    #[test]
    fn test_default_registry_is_shared() {
        assert!(Arc::ptr_eq(&default_registry(), &default_registry()));
    }

    #[test]
    fn test_new_controller_uses_config() {
        let config = Config {
            chord_window_ms: 120,
            ..Config::default()
        };
        let field = new_controller(config);
        assert_eq!(field.config().chord_window_ms, 120);
    }
}
