//! Embedded and external language tables

use super::config::RegistryConfig;
use super::LanguageRegistry;
use crate::error::{Result, StyleError};
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN: OnceLock<LanguageRegistry> = OnceLock::new();

const BUILTIN_TABLE: &str = include_str!("../../configs/languages.toml");

/// Registry built from the embedded language table
pub(crate) fn builtin_registry() -> &'static LanguageRegistry {
    BUILTIN.get_or_init(|| match load_builtin() {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Failed to load embedded language table: {e}");
            LanguageRegistry::empty()
        }
    })
}

fn load_builtin() -> Result<LanguageRegistry> {
    let config = parse_table(BUILTIN_TABLE, "embedded table")?;
    LanguageRegistry::from_config(config)
}

/// Parse a language table from TOML
pub(crate) fn parse_table(content: &str, origin: &str) -> Result<RegistryConfig> {
    toml::from_str(content).map_err(|e| {
        StyleError::Configuration(format!("Failed to parse TOML from '{origin}': {e}"))
    })
}

/// Read and parse a language table file
pub(crate) fn read_table(path: &Path) -> Result<RegistryConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        StyleError::Configuration(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_table(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses_cleanly() {
        let registry = load_builtin().unwrap();
        assert_eq!(registry.len(), 65);
    }

    #[test]
    fn test_builtin_table_loads() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 65);
        assert!(registry.contains("Bengali"));
        assert!(registry.contains("LatinExtended"));
    }

    #[test]
    fn test_builtin_priority_covers_every_language() {
        let registry = builtin_registry();
        let prioritized = registry.prioritized_names();
        assert_eq!(prioritized.len(), registry.len());
        assert_eq!(prioritized.first(), Some(&"Emoji"));
        assert_eq!(prioritized.last(), Some(&"English"));
    }

    #[test]
    fn test_builtin_is_initialized_once() {
        let first = builtin_registry();
        let second = builtin_registry();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_parse_table_error_names_origin() {
        match parse_table("[[languages]\nname = 1", "inline") {
            Err(StyleError::Configuration(msg)) => {
                assert!(msg.contains("Failed to parse TOML from 'inline'"));
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_read_table_missing_file() {
        match read_table(Path::new("/nonexistent/languages.toml")) {
            Err(StyleError::Configuration(msg)) => assert!(msg.contains("Failed to read file")),
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
