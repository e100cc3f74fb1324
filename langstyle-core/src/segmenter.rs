//! Splitting text into runs of one language

use crate::classifier::classify_char;
use crate::config::ActiveConfiguration;
use crate::error::{Result, StyleError};
use crate::registry::LanguageEntry;
use crate::types::Segment;

/// Split text into runs, starting a new run whenever the language changes
///
/// Whitespace forms runs of its own pseudo-language, so every script change
/// across a space produces a boundary; the merger decides later whether to
/// fuse across it. Empty text is rejected.
pub fn segment(text: &str, config: &ActiveConfiguration) -> Result<Vec<Segment>> {
    if text.is_empty() {
        return Err(StyleError::InvalidInput(
            "text must not be empty".to_string(),
        ));
    }

    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut current: Option<&LanguageEntry> = None;

    for (offset, ch) in text.char_indices() {
        let entry = classify_char(ch, config);
        match current {
            Some(active) if active.name() == entry.name() => {}
            Some(active) => {
                segments.push(Segment::from_entry(&text[run_start..offset], active));
                run_start = offset;
                current = Some(entry);
            }
            None => current = Some(entry),
        }
    }

    if let Some(active) = current {
        segments.push(Segment::from_entry(&text[run_start..], active));
    }

    log::trace!(
        "segmented {} bytes into {} runs",
        text.len(),
        segments.len()
    );
    Ok(segments)
}
