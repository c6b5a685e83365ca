//! Double-press chord detection and the glyphs chords produce.
//!
//! A chord is two consecutive key-downs of the same key inside a short
//! window. Every key-down overwrites the remembered key, so any different key
//! in between breaks the sequence. The state lives in a `ChordDetector`
//! owned by one input field; separate fields never share timing.
//!
//! When a chord fires, the first press has already inserted its character
//! right before the caret. The chord replaces that character with the marker
//! glyph(s) and the second press inserts nothing.

use tracing::trace;

use crate::caret;
use crate::glyph::{GlyphRegistry, VARIATION_SELECTOR};
use crate::span::{
    CARTOUCHE_CLOSE, CARTOUCHE_OPEN, LONG_GLYPH_CLOSE, LONG_GLYPH_OPEN, REVERSE_LONG_GLYPH_CLOSE,
    REVERSE_LONG_GLYPH_OPEN,
};

/// Default chord window in milliseconds.
pub const DEFAULT_CHORD_WINDOW_MS: u64 = 300;

/// The `la` glyph, which always follows a closing reverse long glyph.
pub const LA_GLYPH: char = '\u{F1921}';

/// Last key seen by a detector and when it was pressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordState {
    pub last_key: Option<String>,
    pub last_timestamp_ms: u64,
}

/// Recognizes "same key pressed twice within the window".
#[derive(Debug, Clone)]
pub struct ChordDetector {
    state: ChordState,
    window_ms: u64,
}

impl ChordDetector {
    /// Create a detector with the default 300 ms window.
    pub fn new() -> Self {
        Self::with_window(DEFAULT_CHORD_WINDOW_MS)
    }

    /// Create a detector with a custom window.
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            state: ChordState::default(),
            window_ms,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn state(&self) -> &ChordState {
        &self.state
    }

    /// Record a key-down and report whether it completes a chord.
    ///
    /// The state is overwritten on every call, chord or not. A timestamp
    /// earlier than the previous one counts as zero elapsed time.
    pub fn classify(&mut self, key: &str, now_ms: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.state.last_timestamp_ms);
        let is_chord = self.state.last_key.as_deref() == Some(key) && elapsed < self.window_ms;

        self.state.last_key = Some(key.to_string());
        self.state.last_timestamp_ms = now_ms;

        trace!(key, now_ms, elapsed, is_chord, "classified key-down");
        is_chord
    }

    /// Forget the previous key.
    pub fn reset(&mut self) {
        self.state = ChordState::default();
    }
}

impl Default for ChordDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys that form chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKey {
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
}

impl ChordKey {
    /// Map a host key name onto a chord key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "[" => Some(ChordKey::OpenBracket),
            "]" => Some(ChordKey::CloseBracket),
            "(" => Some(ChordKey::OpenParen),
            ")" => Some(ChordKey::CloseParen),
            "{" => Some(ChordKey::OpenBrace),
            "}" => Some(ChordKey::CloseBrace),
            _ => None,
        }
    }

    /// Character the key types on its own.
    pub fn trigger(self) -> char {
        match self {
            ChordKey::OpenBracket => '[',
            ChordKey::CloseBracket => ']',
            ChordKey::OpenParen => '(',
            ChordKey::CloseParen => ')',
            ChordKey::OpenBrace => '{',
            ChordKey::CloseBrace => '}',
        }
    }
}

/// Glyph string a completed chord inserts in place of the trigger character
/// sitting right before `caret`, or `None` when the chord has no effect.
///
/// `(` only opens a long glyph after a registered longable glyph; a trailing
/// variation selector on that glyph is skipped. Nothing happens when the
/// character before the caret is not the trigger itself, so a third press
/// never tears apart the glyph the second press produced.
pub fn chord_replacement(
    key: ChordKey,
    text: &str,
    caret: usize,
    registry: &GlyphRegistry,
) -> Option<String> {
    if caret::char_before(text, caret) != Some(key.trigger()) {
        return None;
    }

    let glyphs: String = match key {
        ChordKey::OpenBracket => CARTOUCHE_OPEN.into(),
        ChordKey::CloseBracket => CARTOUCHE_CLOSE.into(),
        ChordKey::CloseParen => LONG_GLYPH_CLOSE.into(),
        ChordKey::OpenBrace => REVERSE_LONG_GLYPH_OPEN.into(),
        ChordKey::CloseBrace => [REVERSE_LONG_GLYPH_CLOSE, LA_GLYPH].iter().collect(),
        ChordKey::OpenParen => {
            let previous = glyph_before_trigger(text, caret)?;
            if registry.is_longable(previous) != Some(true) {
                trace!(previous = u32::from(previous), "preceding glyph cannot be long");
                return None;
            }
            LONG_GLYPH_OPEN.into()
        }
    };
    Some(glyphs)
}

/// The code point before the trigger character, skipping one variation
/// selector.
fn glyph_before_trigger(text: &str, caret: usize) -> Option<char> {
    let index = caret::to_code_point_index(text, caret);
    let chars: Vec<char> = text.chars().take(index.checked_sub(1)?).collect();
    let mut before = chars.into_iter().rev();
    match before.next()? {
        VARIATION_SELECTOR => before.next(),
        ch => Some(ch),
    }
}
