//! Segments and pseudo-language identifiers

use crate::registry::LanguageEntry;
use serde::{Deserialize, Serialize};

/// Language assigned to characters no configured language matches
pub const DEFAULT_LANGUAGE: &str = "default";

/// Language assigned to whitespace characters
pub const WHITESPACE_LANGUAGE: &str = "whitespace";

/// Style class of the pseudo-languages
pub const DEFAULT_CLASS: &str = "lang-default";

/// Font value meaning "no font styling"
pub const INHERIT_FONT: &str = "inherit";

/// A run of text classified as one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Text of the run, never empty
    pub text: String,
    /// Language identifier or pseudo-language
    pub language: String,
    /// CSS class for the run
    pub style_class: String,
    /// Whether the run is right-to-left
    pub is_rtl: bool,
    /// Font family, `None` meaning inherit
    pub font_family: Option<String>,
}

impl Segment {
    /// Create a segment styled after a language entry
    pub fn from_entry(text: impl Into<String>, entry: &LanguageEntry) -> Self {
        Self {
            text: text.into(),
            language: entry.name().to_string(),
            style_class: entry.style_class().to_string(),
            is_rtl: entry.is_rtl(),
            font_family: entry.font_family().map(str::to_string),
        }
    }

    /// Whether the text consists only of whitespace
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    /// Whether both segments share language and style class
    pub fn same_language(&self, other: &Segment) -> bool {
        self.language == other.language && self.style_class == other.style_class
    }

    /// Whether the segment belongs to a pseudo-language
    pub fn is_pseudo(&self) -> bool {
        self.language == DEFAULT_LANGUAGE || self.language == WHITESPACE_LANGUAGE
    }

    /// Font family to emit, skipping the inherit sentinel
    pub fn effective_font(&self) -> Option<&str> {
        self.font_family
            .as_deref()
            .filter(|font| *font != INHERIT_FONT)
    }
}
