//! C# type declarations.

use crate::builder::{CodeFragment, Renderable};

/// Which keyword introduces a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Struct,
    ReadonlyStruct,
    StaticClass,
    Interface,
}

impl DeclKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::ReadonlyStruct => "readonly struct",
            Self::StaticClass => "static class",
            Self::Interface => "interface",
        }
    }
}

/// A struct, class or interface with its members.
///
/// Members are rendered in insertion order with one blank line between them.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    kind: DeclKind,
    visibility: &'static str,
    name: String,
    type_parameters: Vec<String>,
    bases: Vec<String>,
    constraints: Vec<String>,
    attributes: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl TypeDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            visibility: "public",
            name: name.into(),
            type_parameters: Vec::new(),
            bases: Vec::new(),
            constraints: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn internal(mut self) -> Self {
        self.visibility = "internal";
        self
    }

    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Add a base type or implemented interface.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a `where` clause, written without the `where` keyword.
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn member(mut self, member: impl Renderable) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    pub fn push_member(&mut self, member: impl Renderable) {
        self.members.push(member.to_fragments());
    }

    fn header(&self) -> Vec<String> {
        let mut line = format!("{} {} {}", self.visibility, self.kind.keyword(), self.name);
        if !self.type_parameters.is_empty() {
            line.push('<');
            line.push_str(&self.type_parameters.join(", "));
            line.push('>');
        }
        if !self.bases.is_empty() {
            line.push_str(" : ");
            line.push_str(&self.bases.join(", "));
        }

        let mut header = vec![line];
        header.extend(self.constraints.iter().map(|c| format!("    where {c}")));
        header
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out: Vec<_> = self
            .attributes
            .iter()
            .map(|a| CodeFragment::line(format!("[{a}]")))
            .collect();
        out.push(CodeFragment::Braced {
            header: self.header(),
            body: CodeFragment::separated(self.members.iter().cloned()),
            trailer: String::new(),
        });
        out
    }
}

/// An enumeration with explicit values.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    name: String,
    variants: Vec<(String, String)>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, ident: impl Into<String>, value: impl ToString) -> Self {
        self.variants.push((ident.into(), value.to_string()));
        self
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("public enum {}", self.name),
            self.variants
                .iter()
                .map(|(ident, value)| CodeFragment::line(format!("{ident} = {value},")))
                .collect(),
        )]
    }
}
