//! Input controller: per-field state and key dispatch.
//!
//! The `InputController` owns the text buffer, the suggestion list and the
//! chord state of one input field, and routes host events to the suggestion
//! engine and the chord detector. The glyph registry is shared read-only, so
//! any number of controllers can sit on top of one registry.
//!
//! Key mapping:
//! - `[ ] ( ) { }`: double-press chords, checked before anything else
//! - `ArrowUp` / `Tab`: highlight the next suggestion
//! - `ArrowDown`: highlight the previous suggestion
//! - `" "` without shift while suggestions are shown: commit the highlight
//! - `" "` otherwise: insert a space, or the span extension glyph inside an
//!   open cartouche or long glyph
//! - `Escape` while suggestions are shown: close the list
//!
//! With `Config::commit_on_tab`, Tab commits the highlight instead of moving it.

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::chord::{chord_replacement, ChordDetector, ChordKey, ChordState};
use crate::context::FieldContext;
use crate::engine::SuggestionEngine;
use crate::glyph::GlyphRegistry;
use crate::input_buffer::InputState;
use crate::span;
use crate::suggestion::{Direction, SuggestionState};
use crate::Config;

/// Host key, parsed from a DOM-style key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Printable character, including `' '`
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Tab,
    Backspace,
    Enter,
    Escape,
    /// Any other named key (modifiers, function keys, ...)
    Other(String),
}

impl KeyEvent {
    /// Parse a key name such as `"a"`, `" "`, `"ArrowUp"` or `"Tab"`.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" => KeyEvent::ArrowUp,
            "ArrowDown" => KeyEvent::ArrowDown,
            "ArrowLeft" => KeyEvent::ArrowLeft,
            "ArrowRight" => KeyEvent::ArrowRight,
            "Home" => KeyEvent::Home,
            "End" => KeyEvent::End,
            "Tab" => KeyEvent::Tab,
            "Backspace" => KeyEvent::Backspace,
            "Enter" => KeyEvent::Enter,
            "Escape" => KeyEvent::Escape,
            "Space" | "Spacebar" => KeyEvent::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyEvent::Char(ch),
                    _ => KeyEvent::Other(name.to_string()),
                }
            }
        }
    }
}

/// Answer to a key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    /// The host must not perform the key's default text insertion
    pub prevent_default_insertion: bool,
}

impl KeyResponse {
    /// The controller handled the key.
    pub fn consumed() -> Self {
        Self {
            prevent_default_insertion: true,
        }
    }

    /// The host should apply the key's default behavior.
    pub fn pass_through() -> Self {
        Self {
            prevent_default_insertion: false,
        }
    }
}

/// Per-field controller.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sitelen_core::{GlyphRegistry, InputController};
///
/// let mut registry = GlyphRegistry::new();
/// registry.register("pona", '\u{F1954}', false, false).unwrap();
///
/// let mut field = InputController::new(Arc::new(registry));
/// field.on_text_changed("po", 2);
/// assert_eq!(field.suggestions().matches(), ["\u{F1954}"]);
///
/// let response = field.on_key_down(" ", false, 0);
/// assert!(response.prevent_default_insertion);
/// assert_eq!(field.text(), "\u{F1954}");
/// assert_eq!(field.caret(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InputController {
    /// Suggestion engine over the shared registry
    engine: SuggestionEngine,

    /// Behavior switches
    config: Config,

    /// Text and caret
    input: InputState,

    /// Current suggestion list
    suggestions: SuggestionState,

    /// Chord timing for this field only
    chords: ChordDetector,
}

impl InputController {
    /// Create a controller with the default configuration.
    pub fn new(registry: Arc<GlyphRegistry>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Create a controller with the given configuration.
    pub fn with_config(registry: Arc<GlyphRegistry>, config: Config) -> Self {
        Self {
            engine: SuggestionEngine::new(registry).with_max_suggestions(config.max_suggestions),
            chords: ChordDetector::with_window(config.chord_window_ms),
            config,
            input: InputState::new(),
            suggestions: SuggestionState::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Caret in UTF-16 units.
    pub fn caret(&self) -> usize {
        self.input.caret()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn chord_state(&self) -> &ChordState {
        self.chords.state()
    }

    /// Snapshot for the presentation layer.
    pub fn context(&self) -> FieldContext {
        FieldContext {
            text: self.input.text().to_string(),
            caret: self.input.caret(),
            suggestions: self.suggestions.clone(),
        }
    }

    /// Clear text, suggestions and chord state.
    pub fn reset(&mut self) {
        self.input.clear();
        self.suggestions.hide();
        self.chords.reset();
    }

    /// The host changed the text (typing, paste, deletion).
    pub fn on_text_changed(&mut self, text: &str, caret: usize) {
        self.input.set(text, caret);
        self.refresh();
    }

    /// The host moved the caret without changing the text (click, arrows).
    pub fn on_caret_moved(&mut self, caret: usize) {
        self.input.set_caret(caret);
        self.refresh();
    }

    /// Handle a key-down before the host applies it.
    pub fn on_key_down(&mut self, key: &str, shift: bool, timestamp_ms: u64) -> KeyResponse {
        let _span = debug_span!("key_down", key, shift, timestamp_ms).entered();

        let is_chord = self.chords.classify(key, timestamp_ms);
        if let Some(chord_key) = ChordKey::from_key(key) {
            return if is_chord {
                self.apply_chord(chord_key)
            } else {
                KeyResponse::pass_through()
            };
        }

        match KeyEvent::from_key_name(key) {
            KeyEvent::ArrowUp => self.navigate(Direction::Next),
            KeyEvent::ArrowDown => self.navigate(Direction::Previous),
            KeyEvent::Tab if self.config.commit_on_tab => {
                if self.suggestions.is_visible() && !shift {
                    self.commit_highlighted()
                } else {
                    KeyResponse::pass_through()
                }
            }
            KeyEvent::Tab => self.navigate(Direction::Next),
            KeyEvent::Char(' ') if self.suggestions.is_visible() && !shift => {
                self.commit_highlighted()
            }
            KeyEvent::Char(' ') => self.insert_space(),
            KeyEvent::Escape if self.suggestions.is_visible() => {
                self.suggestions.hide();
                KeyResponse::consumed()
            }
            _ => KeyResponse::pass_through(),
        }
    }

    /// The user clicked the suggestion at `index`.
    /// Returns false when the index does not name a shown suggestion.
    pub fn on_suggestion_clicked(&mut self, index: usize) -> bool {
        if !self.suggestions.is_visible() {
            return false;
        }
        let Some(chosen) = self.suggestions.select_by_index(index).map(str::to_string) else {
            return false;
        };
        self.commit(&chosen);
        true
    }

    /// Key-down followed by the host's default handling when the controller
    /// did not consume the key: printable characters are inserted at the
    /// caret, Backspace deletes, Left/Right/Home/End move the caret.
    pub fn type_key(&mut self, key: &str, shift: bool, timestamp_ms: u64) -> KeyResponse {
        let response = self.on_key_down(key, shift, timestamp_ms);
        if response.prevent_default_insertion {
            return response;
        }

        let changed = match KeyEvent::from_key_name(key) {
            KeyEvent::Char(ch) => {
                let mut buf = [0u8; 4];
                self.input.insert_str(ch.encode_utf8(&mut buf));
                true
            }
            KeyEvent::Backspace => self.input.delete_before(),
            KeyEvent::ArrowLeft => self.input.move_left(),
            KeyEvent::ArrowRight => self.input.move_right(),
            KeyEvent::Home => {
                self.input.move_to_start();
                true
            }
            KeyEvent::End => {
                self.input.move_to_end();
                true
            }
            _ => false,
        };
        if changed {
            self.refresh();
        }
        response
    }

    /// Type every character of `text` with `type_key`, starting at
    /// `start_ms` and advancing the clock by `step_ms` per key.
    /// Returns the timestamp following the last key.
    pub fn type_text(&mut self, text: &str, start_ms: u64, step_ms: u64) -> u64 {
        let mut now = start_ms;
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.type_key(ch.encode_utf8(&mut buf), false, now);
            now += step_ms;
        }
        now
    }

    fn refresh(&mut self) {
        self.suggestions = self.engine.refresh(self.input.text(), self.input.caret());
    }

    fn navigate(&mut self, direction: Direction) -> KeyResponse {
        if !self.suggestions.is_visible() {
            return KeyResponse::pass_through();
        }
        self.engine.move_highlight(&mut self.suggestions, direction);
        KeyResponse::consumed()
    }

    fn commit_highlighted(&mut self) -> KeyResponse {
        match self.suggestions.highlighted().map(str::to_string) {
            Some(chosen) => {
                self.commit(&chosen);
                KeyResponse::consumed()
            }
            None => KeyResponse::pass_through(),
        }
    }

    fn commit(&mut self, chosen: &str) {
        let applied = self
            .engine
            .apply(self.input.text(), self.input.caret(), chosen);
        self.input.set(applied.text, applied.caret);
        self.suggestions = applied.suggestions;
    }

    fn apply_chord(&mut self, key: ChordKey) -> KeyResponse {
        let replacement = chord_replacement(
            key,
            self.input.text(),
            self.input.caret(),
            self.engine.registry(),
        );
        match replacement {
            Some(glyphs) => {
                debug!(?key, "chord replaced trigger character");
                self.input.replace_before_caret(key.trigger().len_utf16(), &glyphs);
                self.refresh();
                KeyResponse::consumed()
            }
            None => KeyResponse::pass_through(),
        }
    }

    fn insert_space(&mut self) -> KeyResponse {
        let enclosing = if self.config.extend_spans {
            span::enclosing_span(self.input.text(), self.input.caret())
        } else {
            None
        };
        let space = match enclosing {
            Some(kind) => kind.extension().to_string(),
            None => self.config.space_str().to_string(),
        };
        debug!(?enclosing, "inserting space");
        self.input.insert_str(&space);
        self.refresh();
        KeyResponse::consumed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<GlyphRegistry> {
        let mut registry = GlyphRegistry::new();
        registry.register("a", '\u{F1900}', false, true).unwrap();
        registry.register("akesi", '\u{F1901}', true, false).unwrap();
        registry.register("ala", '\u{F1902}', false, false).unwrap();
        registry.register("jan", '\u{F1911}', false, false).unwrap();
        registry.register("kama", '\u{F1916}', false, true).unwrap();
        registry.register("la", '\u{F1921}', false, false).unwrap();
        registry.register("mi", '\u{F1934}', false, false).unwrap();
        registry.register("unpa", '\u{F196F}', false, false).unwrap();
        Arc::new(registry)
    }

    fn controller() -> InputController {
        InputController::new(registry())
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyEvent::from_key_name("a"), KeyEvent::Char('a'));
        assert_eq!(KeyEvent::from_key_name(" "), KeyEvent::Char(' '));
        assert_eq!(KeyEvent::from_key_name("Space"), KeyEvent::Char(' '));
        assert_eq!(KeyEvent::from_key_name("ArrowUp"), KeyEvent::ArrowUp);
        assert_eq!(KeyEvent::from_key_name("Tab"), KeyEvent::Tab);
        assert_eq!(
            KeyEvent::from_key_name("Shift"),
            KeyEvent::Other("Shift".to_string())
        );
    }

    #[test]
    fn test_text_change_refreshes() {
        let mut field = controller();
        field.on_text_changed("mi a", 4);
        assert!(field.suggestions().is_visible());
        assert_eq!(field.suggestions().len(), 4);

        field.on_text_changed("mi a ", 5);
        assert!(!field.suggestions().is_visible());
    }

    #[test]
    fn test_caret_move_refreshes() {
        let mut field = controller();
        field.on_text_changed("mi  unpa", 3);
        assert!(!field.suggestions().is_visible());
        field.on_caret_moved(1);
        assert_eq!(field.suggestions().matches(), ["\u{F1934}"]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut field = controller();
        field.on_text_changed("a", 1);
        assert!(field.on_key_down("ArrowDown", false, 0).prevent_default_insertion);
        assert_eq!(field.suggestions().highlighted_index(), 3);
        field.on_key_down("ArrowUp", false, 1_000);
        assert_eq!(field.suggestions().highlighted_index(), 0);
        field.on_key_down("Tab", false, 2_000);
        assert_eq!(field.suggestions().highlighted_index(), 1);
    }

    #[test]
    fn test_navigation_without_suggestions_passes_through() {
        let mut field = controller();
        field.on_text_changed("", 0);
        assert!(!field.on_key_down("ArrowUp", false, 0).prevent_default_insertion);
        assert!(!field.on_key_down("Tab", false, 1_000).prevent_default_insertion);
    }

    #[test]
    fn test_space_commits_highlighted() {
        let mut field = controller();
        field.on_text_changed("mi a", 4);
        field.on_key_down("Tab", false, 0);
        field.on_key_down("Tab", false, 1_000);
        let response = field.on_key_down(" ", false, 2_000);
        assert!(response.prevent_default_insertion);
        assert_eq!(field.text(), "mi \u{F1901}\u{FE00}");
        assert_eq!(field.caret(), 6);
        assert!(!field.suggestions().is_visible());
    }

    #[test]
    fn test_shift_space_inserts_space_while_visible() {
        let mut field = controller();
        field.on_text_changed("a", 1);
        let response = field.on_key_down(" ", true, 0);
        assert!(response.prevent_default_insertion);
        assert_eq!(field.text(), "a ");
        assert_eq!(field.caret(), 2);
        assert!(!field.suggestions().is_visible());
    }

    #[test]
    fn test_space_inside_cartouche_extends_it() {
        let mut field = controller();
        field.on_text_changed("\u{F1990}\u{F1911}", 4);
        field.on_key_down(" ", false, 0);
        assert_eq!(field.text(), "\u{F1990}\u{F1911}\u{F1992}");
        assert_eq!(field.caret(), 6);
    }

    #[test]
    fn test_space_inside_long_glyph_extends_it() {
        let mut field = controller();
        field.on_text_changed("\u{F1916}\u{F1997}", 4);
        field.on_key_down(" ", false, 0);
        assert_eq!(field.text(), "\u{F1916}\u{F1997}\u{F1999}");
    }

    #[test]
    fn test_configured_space() {
        let config = Config {
            space: "\u{3000}".to_string(),
            extend_spans: false,
            ..Config::default()
        };
        let mut field = InputController::with_config(registry(), config);
        field.on_text_changed("\u{F1990}", 2);
        field.on_key_down(" ", false, 0);
        assert_eq!(field.text(), "\u{F1990}\u{3000}");
    }

    #[test]
    fn test_commit_on_tab() {
        let config = Config {
            commit_on_tab: true,
            ..Config::default()
        };
        let mut field = InputController::with_config(registry(), config);
        field.on_text_changed("mi", 2);
        assert!(field.on_key_down("Tab", false, 0).prevent_default_insertion);
        assert_eq!(field.text(), "\u{F1934}");
        assert!(!field.on_key_down("Tab", false, 1_000).prevent_default_insertion);
    }

    #[test]
    fn test_escape_closes_list() {
        let mut field = controller();
        field.on_text_changed("a", 1);
        assert!(field.on_key_down("Escape", false, 0).prevent_default_insertion);
        assert!(!field.suggestions().is_visible());
        assert!(!field.on_key_down("Escape", false, 1_000).prevent_default_insertion);
    }

    #[test]
    fn test_suggestion_click() {
        let mut field = controller();
        field.on_text_changed("a mi", 1);
        assert!(field.on_suggestion_clicked(3));
        assert_eq!(field.text(), "\u{F1902} mi");
        assert_eq!(field.caret(), 2);
        assert!(!field.on_suggestion_clicked(0));
    }

    #[test]
    fn test_suggestion_click_out_of_range() {
        let mut field = controller();
        field.on_text_changed("mi", 2);
        assert!(!field.on_suggestion_clicked(5));
        assert_eq!(field.text(), "mi");
    }

    #[test]
    fn test_double_bracket_opens_cartouche() {
        let mut field = controller();
        assert!(!field.type_key("[", false, 0).prevent_default_insertion);
        assert_eq!(field.text(), "[");
        assert!(field.type_key("[", false, 100).prevent_default_insertion);
        assert_eq!(field.text(), "\u{F1990}");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_slow_double_bracket_types_two_brackets() {
        let mut field = controller();
        field.type_key("[", false, 0);
        field.type_key("[", false, 400);
        assert_eq!(field.text(), "[[");
    }

    #[test]
    fn test_triple_bracket_keeps_glyph_whole() {
        let mut field = controller();
        field.type_text("[[[", 0, 50);
        assert_eq!(field.text(), "\u{F1990}[");
    }

    #[test]
    fn test_close_brace_appends_la() {
        let mut field = controller();
        field.type_text("}}", 0, 50);
        assert_eq!(field.text(), "\u{F199B}\u{F1921}");
        assert_eq!(field.caret(), 4);
    }

    #[test]
    fn test_long_glyph_after_kama() {
        let mut field = controller();
        field.on_text_changed("\u{F1916}", 2);
        field.type_text("((", 0, 100);
        assert_eq!(field.text(), "\u{F1916}\u{F1997}");
    }

    #[test]
    fn test_no_long_glyph_after_ala() {
        let mut field = controller();
        field.on_text_changed("\u{F1902}", 2);
        field.type_text("((", 0, 100);
        assert_eq!(field.text(), "\u{F1902}((");
    }

    #[test]
    fn test_fields_do_not_share_chord_state() {
        let registry = registry();
        let mut first = InputController::new(Arc::clone(&registry));
        let mut second = InputController::new(registry);
        first.type_key("[", false, 0);
        second.type_key("[", false, 50);
        assert_eq!(first.text(), "[");
        assert_eq!(second.text(), "[");
        first.type_key("[", false, 100);
        assert_eq!(first.text(), "\u{F1990}");
    }

    #[test]
    fn test_typing_sentence_commits_each_word() {
        let mut field = controller();
        // The space after "mi" commits the highlighted "mi" glyph.
        field.type_text("mi unpa", 0, 1_000);
        assert_eq!(field.text(), "\u{F1934}unpa");
        assert_eq!(field.suggestions().matches(), ["\u{F196F}"]);
        field.type_key(" ", false, 10_000);
        assert_eq!(field.text(), "\u{F1934}\u{F196F}");
        assert_eq!(field.caret(), 4);
    }

    #[test]
    fn test_backspace_refreshes() {
        let mut field = controller();
        field.type_text("ala", 0, 1_000);
        assert_eq!(field.suggestions().len(), 1);
        field.type_key("Backspace", false, 5_000);
        assert_eq!(field.text(), "al");
        assert_eq!(field.suggestions().len(), 1);
        field.type_key("Backspace", false, 6_000);
        assert_eq!(field.suggestions().len(), 4);
    }

    #[test]
    fn test_context_snapshot() {
        let mut field = controller();
        field.on_text_changed("mi", 2);
        let context = field.context();
        assert_eq!(context.text, "mi");
        assert_eq!(context.caret, 2);
        assert!(context.has_visible_suggestions());
        assert_eq!(context.highlighted(), Some("\u{F1934}"));
    }

    #[test]
    fn test_reset() {
        let mut field = controller();
        field.type_text("mi", 0, 1_000);
        field.reset();
        assert_eq!(field.text(), "");
        assert!(!field.suggestions().is_visible());
        assert_eq!(field.chord_state(), &ChordState::default());
    }
}
