//! Text buffer with caret tracking for one input field.
//!
//! The caret is kept in UTF-16 code units, the index space hosts use for
//! their selection offsets. Splicing converts to UTF-8 byte offsets through
//! `caret`, and every caret the buffer stores sits on a code-point boundary.

use std::ops::Range;

use crate::caret;

/// Text and caret of an input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    caret: usize, // UTF-16 units, not bytes
}

impl InputState {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the caret at `caret` (clamped).
    pub fn with_text(text: impl Into<String>, caret: usize) -> Self {
        let mut state = Self::new();
        state.set(text, caret);
        state
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the caret (UTF-16 units).
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Get the caret as a code-point index.
    pub fn caret_code_point(&self) -> usize {
        caret::to_code_point_index(&self.text, self.caret)
    }

    /// Length of the text in UTF-16 units.
    pub fn len_utf16(&self) -> usize {
        caret::utf16_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text and caret. The caret is clamped onto the new text.
    pub fn set(&mut self, text: impl Into<String>, caret: usize) {
        self.text = text.into();
        self.set_caret(caret);
    }

    /// Move the caret, clamped onto the text.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret::clamp_unit_offset(&self.text, caret);
    }

    /// Clear the buffer and reset the caret.
    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Replace `range` (UTF-16 units) with `replacement` and put the caret
    /// right after the inserted text.
    pub fn splice(&mut self, range: Range<usize>, replacement: &str) {
        let start = caret::to_byte_offset(&self.text, range.start);
        let end = caret::to_byte_offset(&self.text, range.end).max(start);
        self.text.replace_range(start..end, replacement);
        self.caret = caret::utf16_len(&self.text[..start + replacement.len()]);
    }

    /// Insert a string at the caret.
    pub fn insert_str(&mut self, s: &str) {
        self.splice(self.caret..self.caret, s);
    }

    /// Replace the `units` UTF-16 units right before the caret.
    pub fn replace_before_caret(&mut self, units: usize, replacement: &str) {
        let start = self.caret.saturating_sub(units);
        self.splice(start..self.caret, replacement);
    }

    /// The code point right before the caret.
    pub fn char_before_caret(&self) -> Option<char> {
        caret::char_before(&self.text, self.caret)
    }

    /// Delete the code point before the caret (backspace).
    /// Returns true if something was deleted.
    pub fn delete_before(&mut self) -> bool {
        match self.char_before_caret() {
            Some(ch) => {
                self.replace_before_caret(ch.len_utf16(), "");
                true
            }
            None => false,
        }
    }

    /// Move the caret left by one code point.
    /// Returns true if the caret moved.
    pub fn move_left(&mut self) -> bool {
        match self.char_before_caret() {
            Some(ch) => {
                self.caret -= ch.len_utf16();
                true
            }
            None => false,
        }
    }

    /// Move the caret right by one code point.
    /// Returns true if the caret moved.
    pub fn move_right(&mut self) -> bool {
        let byte = caret::to_byte_offset(&self.text, self.caret);
        match self.text[byte..].chars().next() {
            Some(ch) => {
                self.caret += ch.len_utf16();
                true
            }
            None => false,
        }
    }

    /// Move the caret to the beginning.
    pub fn move_to_start(&mut self) {
        self.caret = 0;
    }

    /// Move the caret to the end.
    pub fn move_to_end(&mut self) {
        self.caret = self.len_utf16();
    }
}
