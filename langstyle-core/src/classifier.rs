//! Per-character language classification

use crate::config::ActiveConfiguration;
use crate::registry::LanguageEntry;
use std::collections::BTreeMap;

/// Classify one character
///
/// Returns the first configured entry whose pattern matches, or the
/// configuration's default entry.
#[inline]
pub fn classify(ch: char, config: &ActiveConfiguration) -> &LanguageEntry {
    config
        .entries()
        .iter()
        .find(|entry| entry.matches(ch))
        .unwrap_or_else(|| config.default_entry())
}

/// Classify one character, mapping whitespace to the whitespace pseudo-language
#[inline]
pub fn classify_char(ch: char, config: &ActiveConfiguration) -> &LanguageEntry {
    if ch.is_whitespace() {
        config.whitespace_entry()
    } else {
        classify(ch, config)
    }
}

/// Count classified characters per language, ignoring whitespace
pub fn language_histogram(text: &str, config: &ActiveConfiguration) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
        *counts
            .entry(classify(ch, config).name().to_string())
            .or_insert(0) += 1;
    }
    counts
}
