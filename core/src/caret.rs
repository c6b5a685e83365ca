//! Caret offset conversions.
//!
//! Hosts report caret positions in UTF-16 code units, Rust strings are
//! indexed by UTF-8 bytes, and glyph lookups work on code points. Every glyph
//! of the script lives above U+FFFF, so it takes two UTF-16 units and four
//! UTF-8 bytes; indexing by the wrong unit splits a glyph in half.
//!
//! All functions clamp: an offset past the end of the text maps to the end,
//! and an offset that falls between the two halves of a surrogate pair rounds
//! up to the following code point.

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 unit offset into a code-point index.
///
/// Walks the text one code point at a time, counting two units for every
/// scalar above the Basic Multilingual Plane, until the accumulated unit
/// count reaches `unit_offset`.
///
/// # Example
/// ```
/// use sitelen_core::caret::to_code_point_index;
///
/// let text = "a\u{F1934}b";
/// assert_eq!(to_code_point_index(text, 1), 1);
/// assert_eq!(to_code_point_index(text, 3), 2);
/// assert_eq!(to_code_point_index(text, 4), 3);
/// ```
pub fn to_code_point_index(text: &str, unit_offset: usize) -> usize {
    let mut units = 0;
    let mut index = 0;
    for ch in text.chars() {
        if units >= unit_offset {
            break;
        }
        units += ch.len_utf16();
        index += 1;
    }
    index
}

/// Convert a code-point index back into a UTF-16 unit offset.
pub fn to_unit_offset(text: &str, code_point_index: usize) -> usize {
    text.chars()
        .take(code_point_index)
        .map(char::len_utf16)
        .sum()
}

/// Convert a UTF-16 unit offset into a UTF-8 byte offset usable for slicing.
pub fn to_byte_offset(text: &str, unit_offset: usize) -> usize {
    let mut units = 0;
    let mut bytes = 0;
    for ch in text.chars() {
        if units >= unit_offset {
            break;
        }
        units += ch.len_utf16();
        bytes += ch.len_utf8();
    }
    bytes
}

/// Snap a UTF-16 unit offset onto a code-point boundary inside `text`.
pub fn clamp_unit_offset(text: &str, unit_offset: usize) -> usize {
    to_unit_offset(text, to_code_point_index(text, unit_offset))
}

/// The code point ending exactly at `unit_offset`, if any.
pub fn char_before(text: &str, unit_offset: usize) -> Option<char> {
    text[..to_byte_offset(text, unit_offset)].chars().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MI: char = '\u{F1934}';

    #[test]
    fn test_ascii_offsets_are_identity() {
        let text = "toki";
        for offset in 0..=4 {
            assert_eq!(to_code_point_index(text, offset), offset);
            assert_eq!(to_unit_offset(text, offset), offset);
            assert_eq!(to_byte_offset(text, offset), offset);
        }
    }

    #[test]
    fn test_supplementary_glyph_counts_two_units() {
        let text = format!("{MI}{MI} a");
        assert_eq!(utf16_len(&text), 6);
        assert_eq!(to_code_point_index(&text, 2), 1);
        assert_eq!(to_code_point_index(&text, 4), 2);
        assert_eq!(to_code_point_index(&text, 6), 4);
        assert_eq!(to_unit_offset(&text, 2), 4);
        assert_eq!(to_byte_offset(&text, 4), 8);
    }

    #[test]
    fn test_mid_pair_offset_rounds_up() {
        let text = format!("{MI}x");
        assert_eq!(to_code_point_index(&text, 1), 1);
        assert_eq!(clamp_unit_offset(&text, 1), 2);
        assert_eq!(to_byte_offset(&text, 1), 4);
    }

    #[test]
    fn test_offsets_past_end_clamp() {
        let text = format!("a{MI}");
        assert_eq!(to_code_point_index(&text, 99), 2);
        assert_eq!(to_unit_offset(&text, 99), 3);
        assert_eq!(to_byte_offset(&text, 99), text.len());
        assert_eq!(clamp_unit_offset(&text, 99), 3);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(to_code_point_index("", 0), 0);
        assert_eq!(to_code_point_index("", 5), 0);
        assert_eq!(char_before("", 0), None);
    }

    #[test]
    fn test_char_before() {
        let text = format!("a{MI}(");
        assert_eq!(char_before(&text, 0), None);
        assert_eq!(char_before(&text, 1), Some('a'));
        assert_eq!(char_before(&text, 3), Some(MI));
        assert_eq!(char_before(&text, 4), Some('('));
    }
}
