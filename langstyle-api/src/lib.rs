//! Public API for langstyle script-aware markup styling
//!
//! This crate wraps the `langstyle-core` pipeline behind a processor built
//! from [`ProcessorOptions`], and adds batch processing, tree walkers and a
//! processor cache.
//!
//! # Example
//!
//! ```rust
//! use langstyle_api::{process_text, ProcessorOptions};
//!
//! let options = ProcessorOptions::builder()
//!     .languages(["Arabic", "English"])
//!     .enable_fonts(false)
//!     .build()
//!     .unwrap();
//!
//! let result = process_text("Hello مرحبا", &options).unwrap();
//! assert_eq!(result.stats.languages_detected, ["English", "Arabic"]);
//! assert_eq!(
//!     result.rendered_markup,
//!     r#"<span class="lang-english">Hello </span><span class="lang-arabic" dir="rtl">مرحبا</span>"#
//! );
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod options;
pub mod output;
pub mod processor;
pub mod tree;

// Re-export key types
pub use cache::ProcessorCache;
pub use error::{ApiError, Result};
pub use options::{ProcessorOptions, ProcessorOptionsBuilder};
pub use output::{ProcessResult, ProcessingStats};
pub use processor::StyleProcessor;
pub use tree::{style_component, walk_document, Element, Node};

pub use langstyle_core::{LanguageEntry, LanguageRegistry, Segment, StyleError};

// Convenience functions

/// Process text with the given options
pub fn process_text(text: &str, options: &ProcessorOptions) -> Result<ProcessResult> {
    StyleProcessor::with_options(options.clone())?.process_text(text)
}

/// Process text detecting every registered language
pub fn process_text_default(text: &str) -> Result<ProcessResult> {
    StyleProcessor::new()?.process_text(text)
}

/// Process text with a processor shared through a cache
pub fn process_text_cached(
    cache: &ProcessorCache,
    text: &str,
    options: &ProcessorOptions,
) -> Result<ProcessResult> {
    cache.get_or_build(options)?.process_text(text)
}
