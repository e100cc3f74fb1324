//! Coalescing of adjacent runs across whitespace
//!
//! Merging happens in two passes:
//!
//! 1. **Fuse**: a greedy left-to-right scan joins `[X][ws][X]` into a single
//!    run with the attributes of the first `X`, then keeps absorbing
//!    `[ws][X]` pairs and directly adjacent `[X]` runs.
//! 2. **Attach**: whitespace that the fuse pass left on its own is appended
//!    to the preceding run, or prepended to the following one at the start
//!    of the text.
//!
//! Both passes only move text between runs, so the concatenated texts are
//! always preserved.

use crate::types::Segment;

/// Toggles for the two merge passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeOptions {
    /// Join same-language runs separated by whitespace
    pub fuse_bridged_whitespace: bool,
    /// Fold leftover whitespace runs into their neighbours
    pub attach_stranded_whitespace: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            fuse_bridged_whitespace: true,
            attach_stranded_whitespace: true,
        }
    }
}

impl MergeOptions {
    /// Options that leave segments untouched
    pub fn disabled() -> Self {
        Self {
            fuse_bridged_whitespace: false,
            attach_stranded_whitespace: false,
        }
    }
}

/// Merge segments with the default options
pub fn merge(segments: Vec<Segment>) -> Vec<Segment> {
    merge_with(segments, MergeOptions::default())
}

/// Merge segments with explicit options
pub fn merge_with(segments: Vec<Segment>, options: MergeOptions) -> Vec<Segment> {
    let mut segments = segments;
    if options.fuse_bridged_whitespace {
        segments = fuse_bridged_whitespace(segments);
    }
    if options.attach_stranded_whitespace {
        segments = attach_stranded_whitespace(segments);
    }
    segments
}

fn fuse_bridged_whitespace(segments: Vec<Segment>) -> Vec<Segment> {
    if segments.len() < 3 {
        return segments;
    }

    let len = segments.len();
    let mut merged = Vec::with_capacity(len);
    let mut i = 0;

    while i < len {
        let bridged = i + 2 < len
            && segments[i + 1].is_whitespace()
            && segments[i].same_language(&segments[i + 2]);

        if !bridged {
            merged.push(segments[i].clone());
            i += 1;
            continue;
        }

        let mut fused = segments[i].clone();
        fused.text.push_str(&segments[i + 1].text);
        fused.text.push_str(&segments[i + 2].text);
        let mut next = i + 3;

        loop {
            if next + 1 < len
                && segments[next].is_whitespace()
                && segments[next + 1].same_language(&fused)
            {
                fused.text.push_str(&segments[next].text);
                fused.text.push_str(&segments[next + 1].text);
                next += 2;
            } else if next < len
                && !segments[next].is_whitespace()
                && segments[next].same_language(&fused)
            {
                fused.text.push_str(&segments[next].text);
                next += 1;
            } else {
                break;
            }
        }

        merged.push(fused);
        i = next;
    }

    merged
}

fn attach_stranded_whitespace(segments: Vec<Segment>) -> Vec<Segment> {
    let mut attached: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut leading: Option<Segment> = None;

    for mut segment in segments {
        if segment.is_whitespace() {
            match (attached.last_mut(), leading.as_mut()) {
                (Some(previous), _) => previous.text.push_str(&segment.text),
                (None, Some(pending)) => pending.text.push_str(&segment.text),
                (None, None) => leading = Some(segment),
            }
            continue;
        }

        if let Some(pending) = leading.take() {
            segment.text.insert_str(0, &pending.text);
        }
        attached.push(segment);
    }

    // Whitespace-only input
    if let Some(pending) = leading {
        attached.push(pending);
    }

    attached
}
