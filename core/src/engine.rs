// core/src/engine.rs
//
// Suggestion engine: turns the word under the caret into glyph suggestions
// and splices a chosen glyph back into the text.

use std::sync::Arc;

use tracing::debug;

use crate::caret;
use crate::glyph::GlyphRegistry;
use crate::suggestion::{Direction, SuggestionState};
use crate::word;

/// Result of applying a suggestion to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Text with the word replaced by the chosen glyph string
    pub text: String,
    /// Caret right after the inserted glyph string (UTF-16 units)
    pub caret: usize,
    /// Suggestions after the edit; always hidden
    pub suggestions: SuggestionState,
}

/// Produces suggestion lists from a shared glyph registry.
///
/// The engine holds no per-field state, so one engine can serve any number
/// of input fields.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    registry: Arc<GlyphRegistry>,
    max_suggestions: usize,
}

impl SuggestionEngine {
    /// Create an engine over `registry` with no cap on the list length.
    pub fn new(registry: Arc<GlyphRegistry>) -> Self {
        Self {
            registry,
            max_suggestions: 0,
        }
    }

    /// Cap the number of display strings offered; `0` means no cap.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    pub fn registry_arc(&self) -> Arc<GlyphRegistry> {
        Arc::clone(&self.registry)
    }

    /// Suggestions for the word touching `caret`.
    ///
    /// Each matching glyph contributes its base form and, when it has one,
    /// its variant form right after it. An empty word or a word without
    /// matches yields a hidden state.
    pub fn refresh(&self, text: &str, caret: usize) -> SuggestionState {
        let current = word::current_word(text, caret);
        let mut matches: Vec<String> = self
            .registry
            .find_matches(current)
            .into_iter()
            .flat_map(|glyph| glyph.display_forms())
            .collect();
        if self.max_suggestions > 0 {
            matches.truncate(self.max_suggestions);
        }
        debug!(word = current, matches = matches.len(), "refreshed suggestions");
        SuggestionState::from_matches(matches)
    }

    /// Move the highlight; no-op when there is nothing to highlight.
    pub fn move_highlight(&self, state: &mut SuggestionState, direction: Direction) {
        state.move_highlight(direction);
    }

    /// Replace the word touching `caret` with `chosen`.
    ///
    /// The caret ends up right after the inserted string and the suggestion
    /// list is closed even if the new text happens to have matches.
    pub fn apply(&self, text: &str, caret: usize, chosen: &str) -> Applied {
        let bounds = word::word_bounds(text, caret);
        let start = caret::to_byte_offset(text, bounds.start);
        let end = caret::to_byte_offset(text, bounds.end);

        let mut new_text = String::with_capacity(text.len() + chosen.len());
        new_text.push_str(&text[..start]);
        new_text.push_str(chosen);
        new_text.push_str(&text[end..]);
        let new_caret = bounds.start + caret::utf16_len(chosen);

        let mut suggestions = self.refresh(&new_text, new_caret);
        suggestions.hide();

        debug!(
            replaced = &text[start..end],
            caret = new_caret,
            "applied suggestion"
        );
        Applied {
            text: new_text,
            caret: new_caret,
            suggestions,
        }
    }
}
