//! Minimal XML element model for the descriptor.
//!
//! Attribute values are stored raw and escaped exactly once, when the
//! element is turned into fragments.

use crate::builder::{CodeFragment, Renderable};

/// Escape the five XML special characters.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// An element with ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Element>,
    container: bool,
}

impl Element {
    /// An element that self-closes when it has no children.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            container: false,
        }
    }

    /// An element that always gets a closing tag, even when empty.
    pub fn container(name: &'static str) -> Self {
        Self {
            container: true,
            ..Self::new(name)
        }
    }

    /// Shorthand for `<Option key="value" />`.
    pub fn option(key: &'static str, value: impl Into<String>) -> Self {
        Self::new("Option").attr(key, value)
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn open_tag(&self, self_closing: bool) -> String {
        let mut tag = format!("<{}", self.name);
        for (key, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(key);
            tag.push_str("=\"");
            tag.push_str(&escape(value));
            tag.push('"');
        }
        tag.push_str(if self_closing { " />" } else { ">" });
        tag
    }
}

impl Renderable for Element {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.children.is_empty() && !self.container {
            return vec![CodeFragment::line(self.open_tag(true))];
        }

        let body = self
            .children
            .iter()
            .flat_map(Renderable::to_fragments)
            .collect();
        vec![CodeFragment::block(
            self.open_tag(false),
            body,
            Some(format!("</{}>", self.name)),
        )]
    }
}
