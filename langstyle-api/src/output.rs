//! Processing results

#[cfg(feature = "serde")]
use crate::error::Result;
use langstyle_core::Segment;
use std::time::Duration;

/// Segments and rendered markup for one text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessResult {
    /// Merged segments in text order
    pub segments: Vec<Segment>,
    /// Concatenated `<span>` markup
    pub rendered_markup: String,
    /// Statistics for this call
    pub stats: ProcessingStats,
}

impl ProcessResult {
    /// Reassemble the original text from the segments
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether the text contains any right-to-left segment
    pub fn has_rtl(&self) -> bool {
        self.segments.iter().any(|s| s.is_rtl)
    }

    /// Serialize the result as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the result as indented JSON
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Statistics about a processed text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingStats {
    /// Number of Unicode scalar values in the input
    pub character_count: usize,
    /// Number of segments after merging
    pub segment_count: usize,
    /// Detected languages in first-seen order, pseudo-languages excluded
    pub languages_detected: Vec<String>,
    /// Wall-clock processing time
    pub elapsed: Duration,
}

impl ProcessingStats {
    /// Compute statistics for merged segments
    pub fn from_segments(segments: &[Segment], elapsed: Duration) -> Self {
        let mut languages_detected: Vec<String> = Vec::new();
        for segment in segments.iter().filter(|s| !s.is_pseudo()) {
            if !languages_detected.contains(&segment.language) {
                languages_detected.push(segment.language.clone());
            }
        }

        Self {
            character_count: segments.iter().map(|s| s.text.chars().count()).sum(),
            segment_count: segments.len(),
            languages_detected,
            elapsed,
        }
    }

    /// Characters processed per second
    pub fn chars_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.character_count as f64 / secs
        } else {
            0.0
        }
    }
}
