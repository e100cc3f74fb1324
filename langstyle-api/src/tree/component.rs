//! Restructuring of component trees

use super::{Element, Node};
use crate::processor::StyleProcessor;

/// Style a component tree
///
/// Text that splits into several segments becomes a [`Node::List`] in which
/// whitespace segments stay plain text and every other segment is a span.
/// Elements and lists are rebuilt around their styled children, and opaque
/// nodes pass through unchanged.
pub fn style_component(node: Node, processor: &StyleProcessor) -> Node {
    match node {
        Node::Text(text) => style_text(text, processor),
        Node::Element(mut element) => {
            element.children = element
                .children
                .into_iter()
                .map(|child| style_component(child, processor))
                .collect();
            Node::Element(element)
        }
        Node::List(items) => Node::List(
            items
                .into_iter()
                .map(|item| style_component(item, processor))
                .collect(),
        ),
        opaque @ Node::Opaque(_) => opaque,
    }
}

fn style_text(text: String, processor: &StyleProcessor) -> Node {
    let segments = match processor.segments(&text) {
        Ok(segments) => segments,
        Err(e) => {
            log::warn!("leaving component text unstyled: {e}");
            return Node::Text(text);
        }
    };
    if segments.len() <= 1 {
        return Node::Text(text);
    }

    let render_options = processor.options().render_options();
    Node::List(
        segments
            .into_iter()
            .map(|segment| {
                if segment.is_whitespace() {
                    Node::Text(segment.text)
                } else {
                    Node::Element(Element::span(&segment, &render_options))
                }
            })
            .collect(),
    )
}
