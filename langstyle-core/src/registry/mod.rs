//! Language registry
//!
//! The registry maps language identifiers to [`LanguageEntry`] values and
//! keeps the priority order used when no explicit language list is given.
//! Registration is append-only: a name can never be overwritten.
//!
//! Registries are plain values so independent configurations can coexist.
//! A process-wide instance seeded with the built-in table is available
//! through [`global`]; reads go through [`global_snapshot`] so processing
//! never holds the lock.

pub mod config;
pub mod entry;
pub(crate) mod loader;
pub mod pattern;

pub use config::{LanguageDefinition, PriorityConfig, RegistryConfig};
pub use entry::LanguageEntry;
pub use pattern::{Block, CharPattern, CharPredicate, CharSet};

use crate::error::{Result, StyleError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Table of available languages
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    entries: Vec<Arc<LanguageEntry>>,
    index: HashMap<String, usize>,
    /// Names in match priority order, every entry exactly once
    priority: Vec<String>,
    groups: BTreeMap<String, Vec<String>>,
    combinations: BTreeMap<String, Vec<String>>,
}

impl LanguageRegistry {
    /// Create a registry without any language
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in language table
    ///
    /// If the embedded table fails to load, an error is logged and the
    /// registry is empty.
    pub fn builtin() -> Self {
        loader::builtin_registry().clone()
    }

    /// Build a registry from a parsed language table
    ///
    /// Languages listed in `[priority]` come first in the given order, the
    /// remaining ones follow in table order.
    pub fn from_config(mut config: RegistryConfig) -> Result<Self> {
        let order = std::mem::take(&mut config.priority.order);
        let mut registry = Self::empty();
        registry.extend_from_config(config)?;

        let mut seen = HashSet::new();
        let mut priority = Vec::with_capacity(registry.entries.len());
        for name in &order {
            if !registry.contains(name) {
                return Err(StyleError::Configuration(format!(
                    "Priority lists unknown language '{name}'"
                )));
            }
            if seen.insert(name.as_str()) {
                priority.push(name.clone());
            }
        }
        for name in &registry.priority {
            if !seen.contains(name.as_str()) {
                priority.push(name.clone());
            }
        }
        registry.priority = priority;

        Ok(registry)
    }

    /// Parse a registry from a TOML language table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_config(loader::parse_table(content, "inline table")?)
    }

    /// Register a new language
    ///
    /// The entry is appended to the end of the priority order.
    pub fn register(&mut self, entry: LanguageEntry) -> Result<()> {
        if self.contains(entry.name()) {
            return Err(StyleError::DuplicateLanguage(entry.name().to_string()));
        }

        let name = entry.name().to_string();
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(Arc::new(entry));
        self.priority.push(name);
        Ok(())
    }

    /// Register a new language from its parts
    pub fn register_language(
        &mut self,
        name: &str,
        pattern: CharPattern,
        style_class: &str,
        is_rtl: bool,
        font_family: Option<&str>,
    ) -> Result<()> {
        let entry = LanguageEntry::new(name, pattern, style_class)
            .rtl(is_rtl)
            .with_font_family(font_family.map(str::to_string));
        self.register(entry)
    }

    /// Register every language, group and combination of a parsed table
    ///
    /// Nothing is registered when any definition is invalid or duplicated.
    /// Returns the number of languages added.
    pub fn extend_from_config(&mut self, config: RegistryConfig) -> Result<usize> {
        let mut names = HashSet::new();
        let mut entries = Vec::with_capacity(config.languages.len());
        for definition in &config.languages {
            if self.contains(&definition.name) || !names.insert(definition.name.as_str()) {
                return Err(StyleError::DuplicateLanguage(definition.name.clone()));
            }
            entries.push(definition.to_entry()?);
        }

        for (kind, lists, existing) in [
            ("group", &config.groups, &self.groups),
            ("combination", &config.combinations, &self.combinations),
        ] {
            for (list_name, members) in lists {
                if existing.contains_key(list_name) {
                    return Err(StyleError::Configuration(format!(
                        "Duplicate {kind} '{list_name}'"
                    )));
                }
                if let Some(unknown) = members
                    .iter()
                    .find(|m| !self.contains(m) && !names.contains(m.as_str()))
                {
                    return Err(StyleError::Configuration(format!(
                        "{kind} '{list_name}' lists unknown language '{unknown}'"
                    )));
                }
            }
        }

        let added = entries.len();
        for entry in entries {
            self.register(entry)?;
        }
        self.groups.extend(config.groups);
        self.combinations.extend(config.combinations);

        log::debug!("registered {added} languages ({} total)", self.len());
        Ok(added)
    }

    /// Register languages from a TOML string
    pub fn extend_from_toml(&mut self, content: &str) -> Result<usize> {
        self.extend_from_config(loader::parse_table(content, "inline table")?)
    }

    /// Register languages from a TOML file
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        self.extend_from_config(loader::read_table(path)?)
    }

    /// Look up a language
    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        self.index.get(name).map(|&i| self.entries[i].as_ref())
    }

    /// Check whether a language is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Language names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name())
    }

    /// Language names in match priority order
    pub fn prioritized_names(&self) -> Vec<&str> {
        self.priority.iter().map(String::as_str).collect()
    }

    /// Position of a language in the priority order
    pub fn priority_rank(&self, name: &str) -> Option<usize> {
        self.priority.iter().position(|n| n == name)
    }

    /// Members of a named language group
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Names of all language groups
    pub fn group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    /// Members of a named language combination
    pub fn combination(&self, name: &str) -> Option<&[String]> {
        self.combinations.get(name).map(Vec::as_slice)
    }

    /// Names of all language combinations
    pub fn combination_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.combinations.keys().map(String::as_str)
    }
}

static GLOBAL: OnceLock<RwLock<LanguageRegistry>> = OnceLock::new();

/// Process-wide registry seeded with the built-in table
pub fn global() -> &'static RwLock<LanguageRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(LanguageRegistry::builtin()))
}

/// Register a language in the process-wide registry
pub fn register_global(entry: LanguageEntry) -> Result<()> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(entry)
}

/// Copy of the process-wide registry
///
/// Entries are shared, so the copy is cheap and later registrations do not
/// affect it.
pub fn global_snapshot() -> LanguageRegistry {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
