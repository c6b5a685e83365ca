//! Field context for the presentation layer.
//!
//! The `FieldContext` struct is a plain snapshot with public fields. After
//! each event handed to an `InputController`, the host reads it to redraw
//! the input box and the suggestion list.

use serde::{Deserialize, Serialize};

use crate::suggestion::SuggestionState;

/// What the host renders after an event.
///
/// # Fields
///
/// - `text`: current value of the field
/// - `caret`: caret offset in UTF-16 code units
/// - `suggestions`: match list, highlighted index and visibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    /// Current field value
    pub text: String,

    /// Caret offset (UTF-16 units)
    pub caret: usize,

    /// Suggestion list state
    pub suggestions: SuggestionState,
}

impl FieldContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the suggestion list should be drawn.
    pub fn has_visible_suggestions(&self) -> bool {
        self.suggestions.is_visible()
    }

    /// The highlighted suggestion, if the list is visible.
    pub fn highlighted(&self) -> Option<&str> {
        self.suggestions.highlighted()
    }

    /// Serialize the snapshot as JSON for hosts across an FFI or IPC boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
