//! Processor options

use crate::error::{ApiError, Result};
use langstyle_core::{MergeOptions, RenderOptions, StyleOverrides};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use std::path::Path;

/// Options controlling language selection, styling and merging
///
/// Every field has a default, so partial TOML or JSON documents are accepted:
///
/// ```toml
/// languages = ["Arabic", "English"]
/// enable_fonts = false
///
/// [custom_classes]
/// English = "latin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessorOptions {
    /// Languages to detect, in match priority order; `None` selects all
    pub languages: Option<Vec<String>>,
    /// Emit `dir="rtl"` for right-to-left languages
    pub enable_rtl: bool,
    /// Emit `font-family` styles
    pub enable_fonts: bool,
    /// Language name to replacement CSS class
    pub custom_classes: BTreeMap<String, String>,
    /// Language name to replacement font family
    pub custom_fonts: BTreeMap<String, String>,
    /// Fuse same-language runs separated by whitespace
    pub merge_whitespace: bool,
    /// Keep whitespace runs that were not fused as separate segments
    pub preserve_spaces: bool,
    /// Reorder `languages` by registry priority instead of keeping caller order
    pub prioritize: bool,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            languages: None,
            enable_rtl: true,
            enable_fonts: true,
            custom_classes: BTreeMap::new(),
            custom_fonts: BTreeMap::new(),
            merge_whitespace: true,
            preserve_spaces: false,
            prioritize: false,
        }
    }
}

impl ProcessorOptions {
    /// Create a builder
    pub fn builder() -> ProcessorOptionsBuilder {
        ProcessorOptionsBuilder::default()
    }

    /// Check option values that the registry cannot check
    pub fn validate(&self) -> Result<()> {
        if let Some(languages) = &self.languages {
            if languages.is_empty() {
                return Err(ApiError::Configuration(
                    "language list must not be empty".to_string(),
                ));
            }
            if languages.iter().any(|name| name.trim().is_empty()) {
                return Err(ApiError::Configuration(
                    "language names must not be blank".to_string(),
                ));
            }
        }

        if let Some((name, _)) = self
            .custom_classes
            .iter()
            .find(|(_, class)| class.trim().is_empty())
        {
            return Err(ApiError::Configuration(format!(
                "custom class for '{name}' must not be blank"
            )));
        }

        Ok(())
    }

    /// Parse options from a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ApiError::Configuration(format!("Failed to parse TOML options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serialize options as TOML
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| ApiError::Configuration(format!("Failed to serialize options: {e}")))
    }

    /// Style overrides resolved into the active configuration
    pub fn style_overrides(&self) -> StyleOverrides {
        StyleOverrides {
            enable_rtl: self.enable_rtl,
            enable_fonts: self.enable_fonts,
            custom_classes: self.custom_classes.clone(),
            custom_fonts: self.custom_fonts.clone(),
        }
    }

    /// Merge passes selected by these options
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            fuse_bridged_whitespace: self.merge_whitespace,
            attach_stranded_whitespace: !self.preserve_spaces,
        }
    }

    /// Rendering toggles selected by these options
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            enable_fonts: self.enable_fonts,
        }
    }

    /// Content hash identifying equal option sets
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Fluent builder for [`ProcessorOptions`]
#[derive(Debug, Default)]
pub struct ProcessorOptionsBuilder {
    options: ProcessorOptions,
}

impl ProcessorOptionsBuilder {
    /// Restrict detection to the given languages, in priority order
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    /// Append one language to the selection
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.options
            .languages
            .get_or_insert_with(Vec::new)
            .push(language.into());
        self
    }

    /// Toggle right-to-left direction attributes
    pub fn enable_rtl(mut self, enable: bool) -> Self {
        self.options.enable_rtl = enable;
        self
    }

    /// Toggle font-family styles
    pub fn enable_fonts(mut self, enable: bool) -> Self {
        self.options.enable_fonts = enable;
        self
    }

    /// Replace the CSS class of one language
    pub fn custom_class(mut self, language: impl Into<String>, class: impl Into<String>) -> Self {
        self.options
            .custom_classes
            .insert(language.into(), class.into());
        self
    }

    /// Replace the font family of one language
    pub fn custom_font(mut self, language: impl Into<String>, font: impl Into<String>) -> Self {
        self.options.custom_fonts.insert(language.into(), font.into());
        self
    }

    /// Toggle fusing across whitespace
    pub fn merge_whitespace(mut self, merge: bool) -> Self {
        self.options.merge_whitespace = merge;
        self
    }

    /// Keep unfused whitespace as separate segments
    pub fn preserve_spaces(mut self, preserve: bool) -> Self {
        self.options.preserve_spaces = preserve;
        self
    }

    /// Order the selected languages by registry priority
    pub fn prioritize(mut self, prioritize: bool) -> Self {
        self.options.prioritize = prioritize;
        self
    }

    /// Build the options
    pub fn build(self) -> Result<ProcessorOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
