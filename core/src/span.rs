//! Marker glyphs for cartouches and long glyphs, and detection of the span
//! enclosing the caret.
//!
//! A span is open when scanning backward from the caret reaches one of its
//! opening markers before reaching any closing marker. Inside an open span a
//! typed space becomes the span's extension glyph so the enclosing line keeps
//! running under the next glyph.

use crate::caret;

pub const CARTOUCHE_OPEN: char = '\u{F1990}';
pub const CARTOUCHE_CLOSE: char = '\u{F1991}';
pub const CARTOUCHE_EXTENSION: char = '\u{F1992}';

pub const LONG_GLYPH_OPEN: char = '\u{F1997}';
pub const LONG_GLYPH_CLOSE: char = '\u{F1998}';
pub const LONG_GLYPH_EXTENSION: char = '\u{F1999}';

pub const REVERSE_LONG_GLYPH_OPEN: char = '\u{F199A}';
pub const REVERSE_LONG_GLYPH_CLOSE: char = '\u{F199B}';

/// Kind of bracketed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Cartouche,
    LongGlyph,
    ReverseLongGlyph,
}

impl SpanKind {
    pub const ALL: [SpanKind; 3] = [
        SpanKind::Cartouche,
        SpanKind::LongGlyph,
        SpanKind::ReverseLongGlyph,
    ];

    pub fn open(self) -> char {
        match self {
            SpanKind::Cartouche => CARTOUCHE_OPEN,
            SpanKind::LongGlyph => LONG_GLYPH_OPEN,
            SpanKind::ReverseLongGlyph => REVERSE_LONG_GLYPH_OPEN,
        }
    }

    pub fn close(self) -> char {
        match self {
            SpanKind::Cartouche => CARTOUCHE_CLOSE,
            SpanKind::LongGlyph => LONG_GLYPH_CLOSE,
            SpanKind::ReverseLongGlyph => REVERSE_LONG_GLYPH_CLOSE,
        }
    }

    /// Glyph that stretches the span by one space.
    pub fn extension(self) -> char {
        match self {
            SpanKind::Cartouche => CARTOUCHE_EXTENSION,
            SpanKind::LongGlyph | SpanKind::ReverseLongGlyph => LONG_GLYPH_EXTENSION,
        }
    }

    fn opened_by(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.open() == ch)
    }

    fn closed_by(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.close() == ch)
    }
}

/// The span left open before `caret` (UTF-16 units), if any.
///
/// The nearest marker wins: an opener means the caret is inside that span,
/// a closer means the caret is outside every span.
///
/// # Example
/// ```
/// use sitelen_core::span::{enclosing_span, SpanKind, CARTOUCHE_CLOSE, CARTOUCHE_OPEN};
///
/// let open = format!("{CARTOUCHE_OPEN}\u{F1911}");
/// assert_eq!(enclosing_span(&open, 4), Some(SpanKind::Cartouche));
///
/// let closed = format!("{open}{CARTOUCHE_CLOSE}");
/// assert_eq!(enclosing_span(&closed, 6), None);
/// ```
pub fn enclosing_span(text: &str, caret: usize) -> Option<SpanKind> {
    let before = &text[..caret::to_byte_offset(text, caret)];
    for ch in before.chars().rev() {
        if let Some(kind) = SpanKind::opened_by(ch) {
            return Some(kind);
        }
        if SpanKind::closed_by(ch).is_some() {
            return None;
        }
    }
    None
}
