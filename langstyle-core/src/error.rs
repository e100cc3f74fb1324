use thiserror::Error;

/// Errors raised by registry, configuration and segmentation operations
#[derive(Debug, Error)]
pub enum StyleError {
    /// Empty text passed to a processing entry point
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested language has no registry entry
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Registration of a name that already exists
    #[error("Language already exists: {0}")]
    DuplicateLanguage(String),

    /// Registry file loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A regex pattern for a language failed to compile
    #[error("Invalid pattern for language '{name}': {source}")]
    InvalidPattern {
        /// Language the pattern belongs to
        name: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, StyleError>;
