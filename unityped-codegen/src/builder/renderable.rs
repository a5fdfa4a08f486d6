//! The fragment tree that syntax nodes render into.

/// One piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    /// Empty line, never indented.
    Blank,
    /// Allman-style block: header line(s), `{`, indented body, `}`.
    Braced {
        header: Vec<String>,
        body: Vec<CodeFragment>,
        /// Appended to the closing brace, e.g. `;` after an initializer.
        trailer: String,
    },
    /// `// text`
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Block with a single header line and no trailer.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Braced {
            header: vec![header.into()],
            body,
            trailer: String::new(),
        }
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Join groups of fragments with one blank line between groups.
    pub fn separated(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                out.push(Self::Blank);
            }
            out.extend(group);
        }
        out
    }
}

/// A syntax node that can be rendered through [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
