//! Word boundary detection under the caret.
//!
//! A word is a maximal run of ASCII letters (`[a-zA-Z]`). Glyphs, spaces,
//! digits, punctuation and letters of other alphabets all end a word. Offsets
//! are UTF-16 code units, the same space the host uses for its caret.

use std::ops::Range;

use crate::caret;

/// Whether `ch` can be part of a Latin word.
pub fn is_word_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | 'A'..='Z')
}

fn is_word_unit(unit: u16) -> bool {
    matches!(unit, 0x41..=0x5A | 0x61..=0x7A)
}

/// Bounds of the word touching `caret`, as a range of UTF-16 units.
///
/// - start: `0` when the caret is at the start of the text, otherwise one past
///   the first non-letter found scanning backward from `caret - 1` (or `0`).
/// - end: `caret` when the caret is at the end of the text or sits right
///   before a non-letter, otherwise the first non-letter found scanning
///   forward from `caret + 1` (or the text length).
///
/// The caret is clamped onto the text first.
///
/// # Example
/// ```
/// use sitelen_core::word::word_bounds;
///
/// assert_eq!(word_bounds("mi unpa", 7), 3..7);
/// assert_eq!(word_bounds("mi unpa", 4), 3..7);
/// assert_eq!(word_bounds("mi unpa", 2), 0..2);
/// ```
pub fn word_bounds(text: &str, caret: usize) -> Range<usize> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let caret = caret::clamp_unit_offset(text, caret);
    let len = units.len();

    let start = if caret == 0 {
        0
    } else {
        (0..caret)
            .rev()
            .find(|&i| !is_word_unit(units[i]))
            .map_or(0, |i| i + 1)
    };

    let end = if caret == len || !is_word_unit(units[caret]) {
        caret
    } else {
        (caret + 1..len)
            .find(|&i| !is_word_unit(units[i]))
            .unwrap_or(len)
    };

    start..end
}

/// The word touching `caret`; empty when the caret sits between non-letters.
pub fn current_word(text: &str, caret: usize) -> &str {
    let bounds = word_bounds(text, caret);
    let start = caret::to_byte_offset(text, bounds.start);
    let end = caret::to_byte_offset(text, bounds.end);
    &text[start..end]
}
