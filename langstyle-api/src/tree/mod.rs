//! Styling for markup trees
//!
//! Two walkers apply the processor to a tree of [`Node`]s:
//!
//! - [`walk_document`] rewrites a parsed document in place, skipping
//!   non-content elements such as `script` and `style`
//! - [`style_component`] restructures a component tree, leaving opaque
//!   nodes untouched
//!
//! Both isolate failures per node: a text that cannot be processed is left
//! as it was and a warning is logged.

mod component;
mod document;

pub use component::style_component;
pub use document::{walk_document, SKIPPED_TAGS};

use langstyle_core::{escape_attribute, escape_text, span_attributes, RenderOptions, Segment};

/// A node in a markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, unescaped
    Text(String),
    /// An element with attributes and children
    Element(Element),
    /// A sequence of sibling nodes without a wrapper
    List(Vec<Node>),
    /// Content owned by someone else, emitted verbatim and never styled
    Opaque(String),
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attributes in output order, values unescaped
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element without attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Value of the first attribute with the given name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `<span>` wrapping a segment
    pub fn span(segment: &Segment, options: &RenderOptions) -> Self {
        Self {
            tag: "span".to_string(),
            attributes: span_attributes(segment, options)
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            children: vec![Node::Text(segment.text.clone())],
        }
    }
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Serialize the tree as markup, escaping text and attribute values
    pub fn to_markup(&self) -> String {
        let mut markup = String::new();
        self.write_markup(&mut markup);
        markup
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Opaque(raw) => out.push_str(raw),
            Node::List(items) => items.iter().for_each(|item| item.write_markup(out)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text of all `Text` descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Opaque(_) => String::new(),
            Node::List(items) => items.iter().map(Node::text_content).collect(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markup_escapes() {
        let node = Node::from(
            Element::new("p")
                .with_attribute("title", "a \"quote\" & 'apostrophe'")
                .with_child("1 < 2")
                .with_child(Node::Opaque("<b>raw</b>".to_string())),
        );
        assert_eq!(
            node.to_markup(),
            r#"<p title="a &quot;quote&quot; &amp; 'apostrophe'">1 &lt; 2<b>raw</b></p>"#
        );
    }

    #[test]
    fn test_list_has_no_wrapper() {
        let node = Node::List(vec![Node::text("a"), Element::new("i").with_child("b").into()]);
        assert_eq!(node.to_markup(), "a<i>b</i>");
        assert_eq!(node.text_content(), "ab");
    }

    #[test]
    fn test_span_matches_renderer() {
        let segment = Segment {
            text: "שלום".to_string(),
            language: "Hebrew".to_string(),
            style_class: "lang-hebrew".to_string(),
            is_rtl: true,
            font_family: Some("'David', serif".to_string()),
        };
        let options = RenderOptions::default();
        let span = Node::from(Element::span(&segment, &options));

        assert_eq!(
            span.to_markup(),
            langstyle_core::render(std::slice::from_ref(&segment), &options)
        );
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("div").with_attribute("id", "main");
        assert_eq!(element.attribute("id"), Some("main"));
        assert_eq!(element.attribute("class"), None);
    }
}
