//! The style processor

use crate::error::Result;
use crate::options::ProcessorOptions;
use crate::output::{ProcessResult, ProcessingStats};
use langstyle_core::{
    global_snapshot, merge_with, render, segment, ActiveConfiguration, LanguageRegistry, Segment,
};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Segments and renders text with a fixed configuration
///
/// Building a processor resolves the language list and style overrides once;
/// processing is then pure and the processor can be shared across threads.
#[derive(Debug, Clone)]
pub struct StyleProcessor {
    config: Arc<ActiveConfiguration>,
    options: ProcessorOptions,
}

impl StyleProcessor {
    /// Create a processor detecting every registered language
    pub fn new() -> Result<Self> {
        Self::with_options(ProcessorOptions::default())
    }

    /// Create a processor against a snapshot of the process-wide registry
    pub fn with_options(options: ProcessorOptions) -> Result<Self> {
        Self::with_registry(&global_snapshot(), options)
    }

    /// Create a processor against an explicit registry
    pub fn with_registry(registry: &LanguageRegistry, options: ProcessorOptions) -> Result<Self> {
        options.validate()?;

        let mut builder = ActiveConfiguration::builder(registry)
            .prioritize(options.prioritize)
            .overrides(options.style_overrides());
        if let Some(languages) = &options.languages {
            builder = builder.languages(languages);
        }
        let config = builder.build()?;

        log::debug!(
            "style processor ready with {} languages (merge_whitespace={}, preserve_spaces={})",
            config.len(),
            options.merge_whitespace,
            options.preserve_spaces
        );

        Ok(Self {
            config: Arc::new(config),
            options,
        })
    }

    /// Options the processor was built from
    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Resolved language configuration
    pub fn configuration(&self) -> &ActiveConfiguration {
        &self.config
    }

    /// Segment and merge text without rendering
    pub fn segments(&self, text: &str) -> Result<Vec<Segment>> {
        let segments = segment(text, &self.config)?;
        Ok(merge_with(segments, self.options.merge_options()))
    }

    /// Segment, merge and render text
    pub fn process_text(&self, text: &str) -> Result<ProcessResult> {
        let start = Instant::now();

        let segments = self.segments(text)?;
        let rendered_markup = render(&segments, &self.options.render_options());
        let stats = ProcessingStats::from_segments(&segments, start.elapsed());

        log::trace!(
            "processed {} chars into {} segments in {:?}",
            stats.character_count,
            stats.segment_count,
            stats.elapsed
        );

        Ok(ProcessResult {
            segments,
            rendered_markup,
            stats,
        })
    }

    /// Process independent texts, keeping input order
    #[cfg(feature = "parallel")]
    pub fn process_batch(&self, texts: &[&str]) -> Vec<Result<ProcessResult>> {
        texts.par_iter().map(|text| self.process_text(text)).collect()
    }

    /// Process independent texts, keeping input order
    #[cfg(not(feature = "parallel"))]
    pub fn process_batch(&self, texts: &[&str]) -> Vec<Result<ProcessResult>> {
        texts.iter().map(|text| self.process_text(text)).collect()
    }
}
