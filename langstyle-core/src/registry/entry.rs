//! Language entries and the pseudo-language entries

use super::pattern::CharPattern;
use crate::types::{DEFAULT_CLASS, DEFAULT_LANGUAGE, INHERIT_FONT, WHITESPACE_LANGUAGE};

/// A registered language: identifier, character pattern and styling
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    name: String,
    pattern: CharPattern,
    style_class: String,
    is_rtl: bool,
    font_family: Option<String>,
}

impl LanguageEntry {
    /// Create a left-to-right entry without font styling
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<CharPattern>,
        style_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            style_class: style_class.into(),
            is_rtl: false,
            font_family: None,
        }
    }

    /// Entry returned when no configured language matches
    pub fn default_entry() -> Self {
        Self::new(
            DEFAULT_LANGUAGE,
            CharPattern::predicate(|_| true),
            DEFAULT_CLASS,
        )
    }

    /// Entry assigned to whitespace characters
    pub fn whitespace_entry() -> Self {
        Self::new(
            WHITESPACE_LANGUAGE,
            CharPattern::predicate(char::is_whitespace),
            DEFAULT_CLASS,
        )
    }

    /// Set the right-to-left flag
    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Set the font family; `"inherit"` clears it
    pub fn font(mut self, font_family: impl Into<String>) -> Self {
        let font_family = font_family.into();
        self.font_family = (font_family != INHERIT_FONT).then_some(font_family);
        self
    }

    /// Replace the font family
    pub fn with_font_family(mut self, font_family: Option<String>) -> Self {
        self.font_family = font_family.filter(|f| f != INHERIT_FONT);
        self
    }

    /// Replace the style class
    pub fn with_style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = style_class.into();
        self
    }

    /// Language identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character pattern
    pub fn pattern(&self) -> &CharPattern {
        &self.pattern
    }

    /// CSS class applied to runs of this language
    pub fn style_class(&self) -> &str {
        &self.style_class
    }

    /// Whether runs of this language are right-to-left
    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    /// Font family, `None` meaning inherit
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Whether this is the `default` or `whitespace` pseudo-language
    pub fn is_pseudo(&self) -> bool {
        self.name == DEFAULT_LANGUAGE || self.name == WHITESPACE_LANGUAGE
    }

    /// Check whether the entry's pattern matches a character
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        self.pattern.matches(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let entry = LanguageEntry::new("Greek", CharPattern::range('Ͱ', 'Ͽ'), "lang-greek");
        assert_eq!(entry.name(), "Greek");
        assert_eq!(entry.style_class(), "lang-greek");
        assert!(!entry.is_rtl());
        assert_eq!(entry.font_family(), None);
        assert!(entry.matches('λ'));
    }

    #[test]
    fn test_inherit_font_is_cleared() {
        let entry = LanguageEntry::new("X", CharPattern::chars("x"), "lang-x").font("inherit");
        assert_eq!(entry.font_family(), None);

        let entry = entry.font("'Noto Sans', sans-serif");
        assert_eq!(entry.font_family(), Some("'Noto Sans', sans-serif"));

        let entry = entry.with_font_family(Some(INHERIT_FONT.to_string()));
        assert_eq!(entry.font_family(), None);
    }

    #[test]
    fn test_pseudo_entries() {
        let default = LanguageEntry::default_entry();
        assert_eq!(default.name(), DEFAULT_LANGUAGE);
        assert_eq!(default.style_class(), DEFAULT_CLASS);
        assert!(default.is_pseudo());
        assert!(default.matches('?'));

        let whitespace = LanguageEntry::whitespace_entry();
        assert_eq!(whitespace.name(), WHITESPACE_LANGUAGE);
        assert!(whitespace.is_pseudo());
        assert!(whitespace.matches('\t'));
        assert!(!whitespace.matches('a'));
    }
}
