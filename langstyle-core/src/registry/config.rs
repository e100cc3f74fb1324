//! TOML schema for language tables

use super::entry::LanguageEntry;
use super::pattern::{Block, CharPattern, CharSet};
use crate::error::{Result, StyleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a language table file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub languages: Vec<LanguageDefinition>,
    #[serde(default)]
    pub priority: PriorityConfig,
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub combinations: BTreeMap<String, Vec<String>>,
}

/// One `[[languages]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDefinition {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub ranges: Vec<Block>,
    #[serde(default)]
    pub chars: String,
    #[serde(default)]
    pub regex: Option<String>,
}

/// Match priority used when no explicit language list is given
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriorityConfig {
    #[serde(default)]
    pub order: Vec<String>,
}

impl LanguageDefinition {
    /// Validate the definition
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StyleError::Configuration(
                "Language name is required".to_string(),
            ));
        }
        if self.class.trim().is_empty() {
            return Err(StyleError::Configuration(format!(
                "Language '{}' needs a style class",
                self.name
            )));
        }

        let has_set = !self.ranges.is_empty() || !self.chars.is_empty();
        match (&self.regex, has_set) {
            (None, false) => {
                return Err(StyleError::Configuration(format!(
                    "Language '{}' needs ranges, chars or a regex",
                    self.name
                )))
            }
            (Some(_), true) => {
                return Err(StyleError::Configuration(format!(
                    "Language '{}' mixes a regex with ranges or chars",
                    self.name
                )))
            }
            _ => {}
        }

        for &[start, end] in &self.ranges {
            if start > end || char::from_u32(start).is_none() || char::from_u32(end).is_none() {
                return Err(StyleError::Configuration(format!(
                    "Language '{}' has an invalid range [{start:#X}, {end:#X}]",
                    self.name
                )));
            }
        }

        Ok(())
    }

    /// Build the registry entry described by this definition
    pub fn to_entry(&self) -> Result<LanguageEntry> {
        self.validate()?;

        let pattern = match &self.regex {
            Some(re) => CharPattern::regex(re).map_err(|source| StyleError::InvalidPattern {
                name: self.name.clone(),
                source,
            })?,
            None => CharSet::from_blocks(self.ranges.iter().copied())
                .with_chars(&self.chars)
                .into(),
        };

        Ok(LanguageEntry::new(&self.name, pattern, &self.class)
            .rtl(self.rtl)
            .with_font_family(self.font.clone()))
    }
}
