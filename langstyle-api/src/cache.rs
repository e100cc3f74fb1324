//! Memoization of built processors

use crate::error::Result;
use crate::options::ProcessorOptions;
use crate::processor::StyleProcessor;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Processors keyed by a content hash of their options
///
/// Equal options share one processor. Processors are built against the
/// process-wide registry at the time of the first request, so languages
/// registered later are only seen after [`ProcessorCache::clear`].
///
/// A cache from [`ProcessorCache::new`] keeps one entry per distinct options
/// value until cleared. [`ProcessorCache::with_max_entries`] bounds it: when
/// full, the cache is emptied before a new processor is stored.
#[derive(Debug, Default)]
pub struct ProcessorCache {
    processors: Mutex<HashMap<u64, Arc<StyleProcessor>>>,
    max_entries: Option<usize>,
}

impl ProcessorCache {
    /// Create an unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `max_entries` processors
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            processors: Mutex::default(),
            max_entries: Some(max_entries.max(1)),
        }
    }

    /// Return the processor for `options`, building it on first use
    pub fn get_or_build(&self, options: &ProcessorOptions) -> Result<Arc<StyleProcessor>> {
        let key = options.cache_key();
        let mut processors = self.lock();

        if let Some(processor) = processors.get(&key) {
            if processor.options() == options {
                return Ok(Arc::clone(processor));
            }
            log::debug!("processor cache key collision, rebuilding");
        }

        let processor = Arc::new(StyleProcessor::with_options(options.clone())?);
        if let Some(max) = self.max_entries {
            if processors.len() >= max && !processors.contains_key(&key) {
                log::debug!("processor cache full ({max} entries), evicting");
                processors.clear();
            }
        }
        processors.insert(key, Arc::clone(&processor));
        Ok(processor)
    }

    /// Number of cached processors
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached processor
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Arc<StyleProcessor>>> {
        self.processors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(languages: &[&str]) -> ProcessorOptions {
        ProcessorOptions::builder()
            .languages(languages.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn test_equal_options_share_processor() {
        let cache = ProcessorCache::new();
        let first = cache.get_or_build(&options(&["English"])).unwrap();
        let second = cache.get_or_build(&options(&["English"])).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_different_options_build_new_processor() {
        let cache = ProcessorCache::new();
        let english = cache.get_or_build(&options(&["English"])).unwrap();
        let arabic = cache.get_or_build(&options(&["Arabic"])).unwrap();

        assert!(!Arc::ptr_eq(&english, &arabic));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bounded_cache_stays_within_limit() {
        let cache = ProcessorCache::with_max_entries(2);
        for languages in [["English"], ["Arabic"], ["Hebrew"], ["Korean"]] {
            cache.get_or_build(&options(&languages)).unwrap();
            assert!(cache.len() <= 2);
        }

        let korean = cache.get_or_build(&options(&["Korean"])).unwrap();
        let again = cache.get_or_build(&options(&["Korean"])).unwrap();
        assert!(Arc::ptr_eq(&korean, &again));
    }

    #[test]
    fn test_build_errors_are_not_cached() {
        let cache = ProcessorCache::new();
        assert!(cache.get_or_build(&options(&["Quenya"])).is_err());
        assert!(cache.is_empty());
    }
}
