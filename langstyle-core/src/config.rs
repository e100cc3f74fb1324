//! Active configurations: the ordered languages used for one call

use crate::error::{Result, StyleError};
use crate::registry::{LanguageEntry, LanguageRegistry};
use crate::types::{DEFAULT_LANGUAGE, WHITESPACE_LANGUAGE};
use std::collections::{BTreeMap, HashSet};

/// Per-call styling adjustments applied while resolving entries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleOverrides {
    /// Keep right-to-left flags; when false every entry is left-to-right
    pub enable_rtl: bool,
    /// Keep entry fonts; when false only custom fonts survive
    pub enable_fonts: bool,
    /// Language name to replacement class
    pub custom_classes: BTreeMap<String, String>,
    /// Language name to replacement font
    pub custom_fonts: BTreeMap<String, String>,
}

impl Default for StyleOverrides {
    fn default() -> Self {
        Self {
            enable_rtl: true,
            enable_fonts: true,
            custom_classes: BTreeMap::new(),
            custom_fonts: BTreeMap::new(),
        }
    }
}

impl StyleOverrides {
    fn resolve(&self, entry: &LanguageEntry) -> LanguageEntry {
        let name = entry.name();
        let style_class = self
            .custom_classes
            .get(name)
            .map_or(entry.style_class(), String::as_str);
        let font_family = match self.custom_fonts.get(name) {
            Some(font) => Some(font.clone()),
            None if self.enable_fonts => entry.font_family().map(str::to_string),
            None => None,
        };

        entry
            .clone()
            .with_style_class(style_class)
            .with_font_family(font_family)
            .rtl(self.enable_rtl && entry.is_rtl())
    }
}

/// Ordered languages used for classification
///
/// Earlier entries win when several patterns match the same character.
#[derive(Debug, Clone)]
pub struct ActiveConfiguration {
    entries: Vec<LanguageEntry>,
    default_entry: LanguageEntry,
    whitespace_entry: LanguageEntry,
}

impl ActiveConfiguration {
    /// Every registered language, in registry priority order
    pub fn all(registry: &LanguageRegistry) -> Self {
        let entries = registry
            .prioritized_names()
            .into_iter()
            .filter_map(|name| registry.get(name))
            .cloned()
            .collect();
        Self::from_entries(entries)
    }

    /// The named languages, in the given order
    pub fn from_names<S: AsRef<str>>(registry: &LanguageRegistry, names: &[S]) -> Result<Self> {
        Self::builder(registry).languages(names).build()
    }

    /// Use entries as given, without registry lookup or overrides
    pub fn from_entries(entries: Vec<LanguageEntry>) -> Self {
        Self {
            entries,
            default_entry: LanguageEntry::default_entry(),
            whitespace_entry: LanguageEntry::whitespace_entry(),
        }
    }

    /// Start building a configuration over a registry
    pub fn builder(registry: &LanguageRegistry) -> ConfigurationBuilder<'_> {
        ConfigurationBuilder::new(registry)
    }

    /// Entries in match order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Language names in match order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(LanguageEntry::name).collect()
    }

    /// Number of configured languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no language is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for unclassified characters
    pub fn default_entry(&self) -> &LanguageEntry {
        &self.default_entry
    }

    /// Entry for whitespace characters
    pub fn whitespace_entry(&self) -> &LanguageEntry {
        &self.whitespace_entry
    }

    /// Look up a configured or pseudo language
    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        match name {
            DEFAULT_LANGUAGE => Some(&self.default_entry),
            WHITESPACE_LANGUAGE => Some(&self.whitespace_entry),
            _ => self.entries.iter().find(|e| e.name() == name),
        }
    }
}

/// Builder resolving language names and overrides against a registry
#[derive(Debug)]
pub struct ConfigurationBuilder<'a> {
    registry: &'a LanguageRegistry,
    languages: Option<Vec<String>>,
    prioritize: bool,
    overrides: StyleOverrides,
}

impl<'a> ConfigurationBuilder<'a> {
    /// Create a builder selecting every language by default
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            languages: None,
            prioritize: false,
            overrides: StyleOverrides::default(),
        }
    }

    /// Select languages; their order is the match order
    pub fn languages<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.languages = Some(names.iter().map(|n| n.as_ref().to_string()).collect());
        self
    }

    /// Reorder the selected languages by registry priority
    pub fn prioritize(mut self, prioritize: bool) -> Self {
        self.prioritize = prioritize;
        self
    }

    /// Set the style overrides
    pub fn overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve the configuration
    pub fn build(self) -> Result<ActiveConfiguration> {
        let registry = self.registry;
        let mut names: Vec<String> = match self.languages {
            Some(names) => names,
            None => registry
                .prioritized_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let mut seen = HashSet::new();
        names.retain(|name| seen.insert(name.clone()));

        if self.prioritize {
            names.sort_by_key(|name| registry.priority_rank(name).unwrap_or(usize::MAX));
        }

        let entries = names
            .iter()
            .map(|name| {
                registry
                    .get(name)
                    .map(|entry| self.overrides.resolve(entry))
                    .ok_or_else(|| StyleError::UnsupportedLanguage(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("active configuration with {} languages", entries.len());

        Ok(ActiveConfiguration {
            entries,
            default_entry: self.overrides.resolve(&LanguageEntry::default_entry()),
            whitespace_entry: self.overrides.resolve(&LanguageEntry::whitespace_entry()),
        })
    }
}
