//! Checks on the built-in glyph table and on loading replacement tables.

use std::collections::HashSet;

use libsitelen::{build_default_registry, default_registry, default_table_len, GlyphRegistry};
use proptest::prelude::*;

#[test]
fn test_words_and_codepoints_are_unique() {
    let registry = build_default_registry();
    let words: HashSet<&str> = registry.iter().map(|g| g.word()).collect();
    let codepoints: HashSet<char> = registry.iter().map(|g| g.codepoint()).collect();
    assert_eq!(words.len(), default_table_len());
    assert_eq!(codepoints.len(), default_table_len());
}

#[test]
fn test_codepoints_in_private_use_block() {
    for glyph in &build_default_registry() {
        let cp = u32::from(glyph.codepoint());
        assert!((0xF1900..=0xF19FF).contains(&cp), "{} at U+{:X}", glyph.word(), cp);
        assert!(glyph.word().chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_known_entries() {
    let registry = default_registry();
    let kama = registry.find_by_word("kama").unwrap();
    assert_eq!(kama.codepoint(), '\u{F1916}');
    assert!(kama.is_longable());
    assert_eq!(registry.is_longable('\u{F1902}'), Some(false));
    assert_eq!(registry.find_by_codepoint('\u{F1921}').unwrap().word(), "la");
    assert!(registry.find_by_word("wile").unwrap().has_variant());
    assert!(registry.find_by_word("toki pona").is_none());
}

#[test]
fn test_toml_dump_reloads_identically() {
    let registry = build_default_registry();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glyphs.toml");
    std::fs::write(&path, registry.to_toml_string().unwrap()).unwrap();

    let reloaded = GlyphRegistry::load_table(&path).unwrap();
    assert_eq!(reloaded.to_table(), registry.to_table());
}

#[test]
fn test_json_dump_reloads_identically() {
    let registry = build_default_registry();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glyphs.json");
    std::fs::write(&path, registry.to_json_string().unwrap()).unwrap();

    let reloaded = GlyphRegistry::load_table(&path).unwrap();
    assert_eq!(reloaded.len(), registry.len());
    assert_eq!(reloaded.to_table(), registry.to_table());
}

#[test]
fn test_duplicate_table_is_rejected() {
    let table = r#"
[[glyph]]
word = "toki"
codepoint = 0xF196C

[[glyph]]
word = "toki"
codepoint = 0xF196D
"#;
    assert!(GlyphRegistry::from_toml_str(table).is_err());
}

proptest! {
    #[test]
    fn prop_every_match_starts_with_prefix(prefix in "[a-z]{1,4}") {
        let registry = default_registry();
        for glyph in registry.find_matches(&prefix) {
            prop_assert!(glyph.word().starts_with(&prefix));
        }
    }

    #[test]
    fn prop_every_word_finds_itself(index in 0usize..146) {
        let registry = default_registry();
        let glyph = registry.iter().nth(index).unwrap();
        let matches = registry.find_matches(glyph.word());
        prop_assert!(matches.iter().any(|g| g.word() == glyph.word()));
    }
}
