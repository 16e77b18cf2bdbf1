//! Builder for properly indented text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building text with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example
///
/// ```
/// use cbexport_codegen::builder::CodeBuilder;
///
/// let text = CodeBuilder::codeblocks()
///     .line("<Build>")
///     .indent()
///     .line("<Target title=\"app\" />")
///     .dedent()
///     .line("</Build>")
///     .build();
///
/// assert_eq!(text, "<Build>\n   <Target title=\"app\" />\n</Build>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 3-space indentation.
    pub fn codeblocks() -> Self {
        Self::new(Indent::CODEBLOCKS)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Current indentation level.
    pub fn level(&self) -> usize {
        self.indent_level
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::codeblocks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_line() {
        let text = CodeBuilder::codeblocks().line("<Build>").build();
        assert_eq!(text, "<Build>\n");
    }

    #[test]
    fn test_indentation() {
        let text = CodeBuilder::codeblocks()
            .line("<Project>")
            .indent()
            .line("<Option title=\"demo\" />")
            .dedent()
            .line("</Project>")
            .build();

        assert_eq!(text, "<Project>\n   <Option title=\"demo\" />\n</Project>\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let builder = CodeBuilder::codeblocks().dedent().dedent();
        assert_eq!(builder.level(), 0);
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "<Compiler>".to_string(),
                    body: vec![CodeFragment::line("<Add option=\"-Wall\" />")],
                    close: Some("</Compiler>".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.push_indent().emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "  <Compiler>\n    <Add option=\"-Wall\" />\n  </Compiler>\n"
        );
    }
}
