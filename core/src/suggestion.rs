//! Suggestion list shown while typing a word.
//!
//! This module provides:
//! - `SuggestionState`: the ordered glyph strings offered for the current
//!   word, the highlighted entry and whether the list is shown
//! - `Direction`: highlight movement

use serde::{Deserialize, Serialize};

/// Highlight movement within the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Suggestions derived from the text and caret.
///
/// A visible state always has at least one match; hiding the list drops the
/// matches and resets the highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionState {
    /// Glyph strings in display order
    matches: Vec<String>,

    /// Index of the highlighted match (0-based)
    highlighted_index: usize,

    /// Whether the list is shown
    visible: bool,
}

impl SuggestionState {
    /// Create a hidden, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from display strings. Visible when non-empty, with the
    /// first entry highlighted.
    pub fn from_matches(matches: Vec<String>) -> Self {
        let visible = !matches.is_empty();
        Self {
            matches,
            highlighted_index: 0,
            visible,
        }
    }

    /// All matches.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Index of the highlighted match.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    /// The highlighted match, if the list is visible.
    pub fn highlighted(&self) -> Option<&str> {
        if !self.visible {
            return None;
        }
        self.matches.get(self.highlighted_index).map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Move the highlight, wrapping at both ends.
    /// Returns false (and does nothing) when there are no matches.
    pub fn move_highlight(&mut self, direction: Direction) -> bool {
        let len = self.matches.len();
        if len == 0 {
            return false;
        }
        self.highlighted_index = match direction {
            Direction::Next => (self.highlighted_index + 1) % len,
            Direction::Previous => (self.highlighted_index + len - 1) % len,
        };
        true
    }

    /// Highlight the match at `index` and return it, if the index is valid.
    pub fn select_by_index(&mut self, index: usize) -> Option<&str> {
        if index < self.matches.len() {
            self.highlighted_index = index;
            self.matches.get(index).map(String::as_str)
        } else {
            None
        }
    }

    /// Hide the list, dropping its matches and resetting the highlight.
    pub fn hide(&mut self) {
        self.matches.clear();
        self.highlighted_index = 0;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> SuggestionState {
        SuggestionState::from_matches(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn test_new_state_is_hidden() {
        let state = SuggestionState::new();
        assert!(!state.is_visible());
        assert!(state.is_empty());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_from_matches() {
        let state = abc();
        assert!(state.is_visible());
        assert_eq!(state.highlighted_index(), 0);
        assert_eq!(state.highlighted(), Some("a"));

        assert!(!SuggestionState::from_matches(Vec::new()).is_visible());
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut state = abc();
        assert!(state.move_highlight(Direction::Previous));
        assert_eq!(state.highlighted_index(), 2);
        assert!(state.move_highlight(Direction::Next));
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_next_walks_forward() {
        let mut state = abc();
        state.move_highlight(Direction::Next);
        state.move_highlight(Direction::Next);
        assert_eq!(state.highlighted(), Some("c"));
        state.move_highlight(Direction::Next);
        assert_eq!(state.highlighted(), Some("a"));
    }

    #[test]
    fn test_move_on_empty_is_noop() {
        let mut state = SuggestionState::new();
        assert!(!state.move_highlight(Direction::Next));
        assert!(!state.move_highlight(Direction::Previous));
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_select_by_index() {
        let mut state = abc();
        assert_eq!(state.select_by_index(1), Some("b"));
        assert_eq!(state.highlighted_index(), 1);
        assert_eq!(state.select_by_index(3), None);
        assert_eq!(state.highlighted_index(), 1);
    }

    #[test]
    fn test_hide_resets() {
        let mut state = abc();
        state.move_highlight(Direction::Next);
        state.hide();
        assert!(!state.is_visible());
        assert!(state.is_empty());
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_serializes_for_presentation() {
        let json = serde_json::to_value(abc()).unwrap();
        assert_eq!(json["matches"], serde_json::json!(["a", "b", "c"]));
        assert_eq!(json["highlighted_index"], 0);
        assert_eq!(json["visible"], true);
    }
}
