//! Markup rendering for segments

use crate::types::Segment;
use std::borrow::Cow;

/// Rendering toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Emit `font-family` styles
    pub enable_fonts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { enable_fonts: true }
    }
}

/// Render segments as concatenated `<span>` tags
pub fn render(segments: &[Segment], options: &RenderOptions) -> String {
    let mut markup = String::with_capacity(segments.iter().map(|s| s.text.len() + 32).sum());

    for segment in segments {
        markup.push_str("<span");
        for (name, value) in span_attributes(segment, options) {
            markup.push(' ');
            markup.push_str(name);
            markup.push_str("=\"");
            markup.push_str(&escape_attribute(&value));
            markup.push('"');
        }
        markup.push('>');
        markup.push_str(&escape_text(&segment.text));
        markup.push_str("</span>");
    }

    markup
}

/// Attributes of the span wrapping a segment, unescaped and in output order
pub fn span_attributes(segment: &Segment, options: &RenderOptions) -> Vec<(&'static str, String)> {
    let mut attributes = vec![("class", segment.style_class.clone())];
    if segment.is_rtl {
        attributes.push(("dir", "rtl".to_string()));
    }
    if options.enable_fonts {
        if let Some(font) = segment.effective_font() {
            attributes.push(("style", format!("font-family: {font}")));
        }
    }
    attributes
}

/// Escape text content: `&`, `<`, `>`, `"` and `'`
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, true)
}

/// Escape a double-quoted attribute value: `&`, `<`, `>` and `"`
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

fn escape(input: &str, apostrophe: bool) -> Cow<'_, str> {
    let needs_escape = |ch: char| matches!(ch, '&' | '<' | '>' | '"') || (apostrophe && ch == '\'');
    if !input.contains(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' if apostrophe => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Reverse [`escape_text`]
pub fn unescape_text(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .replace("&amp;", "&"),
    )
}
