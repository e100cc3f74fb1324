//! Script-aware text segmentation for per-language markup styling
//!
//! This crate splits text into runs of characters belonging to the same
//! script or language, using a registry of Unicode code-point patterns, and
//! renders each run as a `<span>` carrying a CSS class, an optional
//! right-to-left direction and an optional font family.
//!
//! # Pipeline
//!
//! - **Registry**: language entries, priority order, groups and combinations
//! - **Classifier**: first matching entry of the active configuration
//! - **Segmenter**: maximal runs of one language, whitespace kept apart
//! - **Merger**: same-language runs fused across whitespace
//! - **Renderer**: escaped `<span>` markup
//!
//! # Example
//!
//! ```rust
//! use langstyle_core::{merge, render, segment, ActiveConfiguration, LanguageRegistry, RenderOptions};
//!
//! let registry = LanguageRegistry::builtin();
//! let config = ActiveConfiguration::from_names(&registry, &["Arabic", "English"]).unwrap();
//!
//! let segments = merge(segment("Hello مرحبا", &config).unwrap());
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text, "Hello ");
//! assert!(segments[1].is_rtl);
//!
//! let html = render(&segments, &RenderOptions { enable_fonts: false });
//! assert_eq!(
//!     html,
//!     r#"<span class="lang-english">Hello </span><span class="lang-arabic" dir="rtl">مرحبا</span>"#
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod merger;
pub mod registry;
pub mod renderer;
pub mod segmenter;
pub mod types;

pub use classifier::{classify, classify_char, language_histogram};
pub use config::{ActiveConfiguration, ConfigurationBuilder, StyleOverrides};
pub use error::{Result, StyleError};
pub use merger::{merge, merge_with, MergeOptions};
pub use registry::{
    global, global_snapshot, register_global, CharPattern, CharSet, LanguageEntry,
    LanguageRegistry,
};
pub use renderer::{escape_attribute, escape_text, render, span_attributes, unescape_text, RenderOptions};
pub use segmenter::segment;
pub use types::{Segment, DEFAULT_CLASS, DEFAULT_LANGUAGE, INHERIT_FONT, WHITESPACE_LANGUAGE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_end_to_end() {
        let registry = LanguageRegistry::builtin();
        let config = ActiveConfiguration::from_names(&registry, &["English"]).unwrap();

        let segments = merge(segment("Hello world", &config).unwrap());
        assert_eq!(segments.len(), 1);

        let html = render(&segments, &RenderOptions::default());
        assert!(html.starts_with(r#"<span class="lang-english" style="font-family: "#));
        assert!(html.ends_with(">Hello world</span>"));
    }

    #[test]
    fn test_core_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageRegistry>();
        assert_send_sync::<ActiveConfiguration>();
        assert_send_sync::<Segment>();
    }
}
