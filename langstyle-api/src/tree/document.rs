//! In-place styling of document trees

use super::{Element, Node};
use crate::processor::StyleProcessor;

/// Elements whose content is never styled
pub const SKIPPED_TAGS: [&str; 6] = ["script", "style", "noscript", "iframe", "object", "embed"];

fn is_skipped(tag: &str) -> bool {
    SKIPPED_TAGS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(tag))
}

/// Style every text node of a document in place
///
/// Text nodes that split into more than one segment are replaced by a
/// [`Node::List`] of spans. Whitespace-only text and the content of
/// [`SKIPPED_TAGS`] elements are left alone. Returns the number of text
/// nodes rewritten.
pub fn walk_document(root: &mut Node, processor: &StyleProcessor) -> usize {
    match root {
        Node::Element(element) if is_skipped(&element.tag) => 0,
        Node::Element(element) => element
            .children
            .iter_mut()
            .map(|child| walk_document(child, processor))
            .sum(),
        Node::List(items) => items
            .iter_mut()
            .map(|item| walk_document(item, processor))
            .sum(),
        Node::Opaque(_) => 0,
        Node::Text(text) => {
            if text.trim().is_empty() {
                return 0;
            }
            match style_text(text, processor) {
                Some(replacement) => {
                    *root = replacement;
                    1
                }
                None => 0,
            }
        }
    }
}

fn style_text(text: &str, processor: &StyleProcessor) -> Option<Node> {
    let segments = match processor.segments(text) {
        Ok(segments) => segments,
        Err(e) => {
            log::warn!("leaving text node unstyled: {e}");
            return None;
        }
    };
    if segments.len() <= 1 {
        return None;
    }

    let render_options = processor.options().render_options();
    Some(Node::List(
        segments
            .iter()
            .map(|segment| Node::Element(Element::span(segment, &render_options)))
            .collect(),
    ))
}
