//! Glyph registry with exact and prefix lookup.
//!
//! The registry keeps glyphs in insertion order, which is also the order in
//! which prefix matches are offered to the user. Two hash indices give O(1)
//! exact lookup by word and by codepoint. A registry is built once and then
//! shared read-only (usually behind an `Arc`).
//!
//! Tables can be loaded from TOML or JSON:
//!
//! ```toml
//! [[glyph]]
//! word = "kama"
//! codepoint = 0xF1916
//! longable = true
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Variation selector appended to a base glyph to request its variant form.
pub const VARIATION_SELECTOR: char = '\u{FE00}';

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("glyph word must not be empty")]
    EmptyWord,

    #[error("word '{0}' is already registered")]
    DuplicateWord(String),

    #[error("codepoint U+{0:X} is already registered")]
    DuplicateCodepoint(u32),

    #[error("U+{0:X} is not a Unicode scalar value")]
    InvalidCodepoint(u32),

    #[error("failed to read glyph table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML glyph table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize TOML glyph table: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to parse JSON glyph table: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single glyph of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    word: String,
    codepoint: char,
    has_variant: bool,
    is_longable: bool,
}

impl Glyph {
    /// Latin word the glyph is typed with.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Base scalar value of the glyph.
    pub fn codepoint(&self) -> char {
        self.codepoint
    }

    /// Whether a variation-selector form exists.
    pub fn has_variant(&self) -> bool {
        self.has_variant
    }

    /// Whether a long-glyph extension may follow this glyph.
    pub fn is_longable(&self) -> bool {
        self.is_longable
    }

    /// The base glyph as a string.
    pub fn glyph_string(&self) -> String {
        self.codepoint.to_string()
    }

    /// The base glyph followed by the variation selector, if a variant exists.
    pub fn variant_string(&self) -> Option<String> {
        self.has_variant
            .then(|| [self.codepoint, VARIATION_SELECTOR].iter().collect())
    }

    /// Strings offered to the user for this glyph: the base form, then the
    /// variant form when there is one.
    pub fn display_forms(&self) -> Vec<String> {
        let mut forms = vec![self.glyph_string()];
        forms.extend(self.variant_string());
        forms
    }
}

/// Serializable description of one glyph, as stored in a glyph table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphEntry {
    pub word: String,
    pub codepoint: u32,
    #[serde(default)]
    pub variant: bool,
    #[serde(default)]
    pub longable: bool,
}

impl From<&Glyph> for GlyphEntry {
    fn from(glyph: &Glyph) -> Self {
        Self {
            word: glyph.word.clone(),
            codepoint: u32::from(glyph.codepoint),
            variant: glyph.has_variant,
            longable: glyph.is_longable,
        }
    }
}

/// On-disk glyph table: an array of `[[glyph]]` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphTable {
    #[serde(rename = "glyph", default)]
    pub entries: Vec<GlyphEntry>,
}

/// Ordered glyph registry with word and codepoint indices.
#[derive(Debug, Clone, Default)]
pub struct GlyphRegistry {
    glyphs: Vec<Glyph>,
    by_word: AHashMap<String, usize>,
    by_codepoint: AHashMap<char, usize>,
}

impl GlyphRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a glyph.
    ///
    /// Rejects the glyph, leaving the registry untouched, when the word is
    /// empty or when the word or codepoint is already registered.
    pub fn register(
        &mut self,
        word: &str,
        codepoint: char,
        has_variant: bool,
        is_longable: bool,
    ) -> Result<&Glyph, RegistryError> {
        if word.is_empty() {
            return Err(RegistryError::EmptyWord);
        }
        if self.by_word.contains_key(word) {
            debug!(word, "rejecting duplicate glyph word");
            return Err(RegistryError::DuplicateWord(word.to_string()));
        }
        if self.by_codepoint.contains_key(&codepoint) {
            debug!(word, codepoint = u32::from(codepoint), "rejecting duplicate codepoint");
            return Err(RegistryError::DuplicateCodepoint(u32::from(codepoint)));
        }

        let position = self.glyphs.len();
        self.glyphs.push(Glyph {
            word: word.to_string(),
            codepoint,
            has_variant,
            is_longable,
        });
        self.by_word.insert(word.to_string(), position);
        self.by_codepoint.insert(codepoint, position);
        Ok(&self.glyphs[position])
    }

    /// Append a glyph described by a table entry.
    pub fn register_entry(&mut self, entry: &GlyphEntry) -> Result<&Glyph, RegistryError> {
        let codepoint = char::from_u32(entry.codepoint)
            .ok_or(RegistryError::InvalidCodepoint(entry.codepoint))?;
        self.register(&entry.word, codepoint, entry.variant, entry.longable)
    }

    /// Build a registry from table entries, failing on the first bad entry.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a GlyphEntry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.register_entry(entry)?;
        }
        Ok(registry)
    }

    /// Build a registry from a TOML glyph table.
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let table: GlyphTable = toml::from_str(content)?;
        Self::from_entries(&table.entries)
    }

    /// Build a registry from a JSON glyph table.
    pub fn from_json_str(content: &str) -> Result<Self, RegistryError> {
        let table: GlyphTable = serde_json::from_str(content)?;
        Self::from_entries(&table.entries)
    }

    /// Load a glyph table from disk. Files ending in `.json` are read as
    /// JSON, everything else as TOML.
    pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let registry = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        debug!(path = %path.display(), glyphs = registry.len(), "loaded glyph table");
        Ok(registry)
    }

    /// Describe the registry as a serializable table, in registry order.
    pub fn to_table(&self) -> GlyphTable {
        GlyphTable {
            entries: self.glyphs.iter().map(GlyphEntry::from).collect(),
        }
    }

    /// Serialize the registry as a TOML glyph table.
    pub fn to_toml_string(&self) -> Result<String, RegistryError> {
        Ok(toml::to_string_pretty(&self.to_table())?)
    }

    /// Serialize the registry as a JSON glyph table.
    pub fn to_json_string(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&self.to_table())?)
    }

    /// Exact lookup by word.
    pub fn find_by_word(&self, word: &str) -> Option<&Glyph> {
        self.by_word.get(word).map(|&i| &self.glyphs[i])
    }

    /// Exact lookup by base codepoint.
    pub fn find_by_codepoint(&self, codepoint: char) -> Option<&Glyph> {
        self.by_codepoint.get(&codepoint).map(|&i| &self.glyphs[i])
    }

    /// Every glyph whose word starts with `prefix`, in registry order.
    ///
    /// An empty prefix matches nothing. Matching is case-sensitive.
    pub fn find_matches(&self, prefix: &str) -> Vec<&Glyph> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.glyphs
            .iter()
            .filter(|glyph| glyph.word.starts_with(prefix))
            .collect()
    }

    /// `Some(longable)` for a registered glyph, `None` for anything else.
    pub fn is_longable(&self, codepoint: char) -> Option<bool> {
        self.find_by_codepoint(codepoint).map(Glyph::is_longable)
    }

    /// Glyphs in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<'a> IntoIterator for &'a GlyphRegistry {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}
