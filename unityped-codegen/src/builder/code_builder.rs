//! Renders code fragments into indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered nodes into one indented buffer.
///
/// ```
/// use unityped_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::csharp();
/// builder.emit(&CodeFragment::braced(
///     "namespace Game",
///     vec![CodeFragment::line("public enum Tags { }")],
/// ));
///
/// assert_eq!(builder.build(), "namespace Game\n{\n    public enum Tags { }\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Render `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.line(&text),
            // no trailing whitespace on blank lines
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Comment(text) => self.line(&format!("// {text}")),
            CodeFragment::Braced {
                header,
                body,
                trailer,
            } => {
                for line in &header {
                    self.line(line);
                }
                self.line("{");
                self.depth += 1;
                for fragment in body {
                    self.apply(fragment);
                }
                self.depth -= 1;
                self.line(&format!("}}{trailer}"));
            }
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
