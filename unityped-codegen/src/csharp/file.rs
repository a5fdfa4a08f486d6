//! Namespaces and whole source files.

use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A block-scoped namespace holding top-level declarations.
#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    items: Vec<Vec<CodeFragment>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item(mut self, item: impl Renderable) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    pub fn push_item(&mut self, item: impl Renderable) {
        self.items.push(item.to_fragments());
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("namespace {}", self.name),
            CodeFragment::separated(self.items.iter().cloned()),
        )]
    }
}

/// One generated C# unit: header comments followed by namespaces.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    comments: Vec<String>,
    namespaces: Vec<Namespace>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self {
            comments: vec!["<auto-generated/>".to_string()],
            namespaces: Vec::new(),
        }
    }

    /// Add a header comment line (written as `// text`).
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    pub fn render(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for SourceFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out: Vec<_> = self
            .comments
            .iter()
            .map(|c| CodeFragment::comment(c.as_str()))
            .collect();
        out.push(CodeFragment::Blank);
        out.extend(CodeFragment::separated(
            self.namespaces.iter().map(Renderable::to_fragments),
        ));
        out
    }
}
