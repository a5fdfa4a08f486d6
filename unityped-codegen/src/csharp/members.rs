//! C# member declarations: fields, properties and methods.

use crate::builder::{CodeFragment, Renderable};

fn attribute_lines(attributes: &[String]) -> impl Iterator<Item = CodeFragment> + '_ {
    attributes.iter().map(|a| CodeFragment::line(format!("[{a}]")))
}

fn prefixed(modifiers: &str, rest: &str) -> String {
    if modifiers.is_empty() {
        rest.to_string()
    } else {
        format!("{modifiers} {rest}")
    }
}

/// Initializer of a field declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInit {
    /// `= expr;`
    Expr(String),
    /// `=` followed by a braced element list, one element per line.
    Elements(Vec<String>),
}

/// A field, e.g. `public static readonly string[] Names = { ... };`.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    modifiers: String,
    ty: String,
    name: String,
    init: Option<FieldInit>,
}

impl FieldDecl {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: "public".to_string(),
            ty: ty.into(),
            name: name.into(),
            init: None,
        }
    }

    /// Replace the modifier list (default `public`).
    pub fn modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn init(mut self, expr: impl Into<String>) -> Self {
        self.init = Some(FieldInit::Expr(expr.into()));
        self
    }

    pub fn elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.init = Some(FieldInit::Elements(
            elements.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

impl Renderable for FieldDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = prefixed(&self.modifiers, &format!("{} {}", self.ty, self.name));
        match &self.init {
            None => vec![CodeFragment::line(format!("{decl};"))],
            Some(FieldInit::Expr(expr)) => vec![CodeFragment::line(format!("{decl} = {expr};"))],
            Some(FieldInit::Elements(elements)) => vec![CodeFragment::Braced {
                header: vec![format!("{decl} =")],
                body: elements
                    .iter()
                    .map(|e| CodeFragment::line(format!("{e},")))
                    .collect(),
                trailer: ";".to_string(),
            }],
        }
    }
}

/// Accessor bodies of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessors {
    /// `{ get; set; }` or `{ get; }`.
    Auto { setter: bool },
    /// `get => expr;` and optionally `set => expr;`.
    Expression { get: String, set: Option<String> },
    /// Statement-bodied `get { ... }` and optionally `set { ... }`.
    Block {
        get: Vec<String>,
        set: Option<Vec<String>>,
    },
}

/// A property or indexer.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    attributes: Vec<String>,
    modifiers: String,
    ty: String,
    name: String,
    accessors: Accessors,
}

impl PropertyDecl {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, accessors: Accessors) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: "public".to_string(),
            ty: ty.into(),
            name: name.into(),
            accessors,
        }
    }

    /// `{ get; set; }` property.
    pub fn auto(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ty, name, Accessors::Auto { setter: true })
    }

    pub fn modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }
}

impl Renderable for PropertyDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out: Vec<_> = attribute_lines(&self.attributes).collect();
        let decl = prefixed(&self.modifiers, &format!("{} {}", self.ty, self.name));

        match &self.accessors {
            Accessors::Auto { setter } => {
                let set = if *setter { " set;" } else { "" };
                out.push(CodeFragment::line(format!("{decl} {{ get;{set} }}")));
            }
            Accessors::Expression { get, set } => {
                let mut body = vec![CodeFragment::line(format!("get => {get};"))];
                if let Some(set) = set {
                    body.push(CodeFragment::line(format!("set => {set};")));
                }
                out.push(CodeFragment::braced(decl, body));
            }
            Accessors::Block { get, set } => {
                let block = |keyword: &str, lines: &[String]| {
                    CodeFragment::braced(
                        keyword,
                        lines.iter().map(|l| CodeFragment::line(l.as_str())).collect(),
                    )
                };
                let mut body = vec![block("get", get)];
                if let Some(set) = set {
                    body.push(block("set", set));
                }
                out.push(CodeFragment::braced(decl, body));
            }
        }
        out
    }
}

/// A method, constructor or operator with a statement body.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    signature: String,
    body: Vec<CodeFragment>,
}

impl MethodDecl {
    /// `signature` is everything before the opening brace,
    /// e.g. `public static implicit operator int(LayerInfo layer)`.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a nested braced statement such as a loop.
    pub fn block<I, S>(mut self, header: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.push(CodeFragment::braced(
            header,
            lines.into_iter().map(CodeFragment::line).collect(),
        ));
        self
    }
}

impl Renderable for MethodDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.signature.clone(), self.body.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_auto_property() {
        let prop = PropertyDecl::auto("global::UnityEditor.SerializedProperty", "Property");
        assert_eq!(
            render(&prop),
            "public global::UnityEditor.SerializedProperty Property { get; set; }\n"
        );
    }

    #[test]
    fn test_interface_property_without_modifiers() {
        let prop = PropertyDecl::auto("int", "Length").modifiers("");
        assert_eq!(render(&prop), "int Length { get; set; }\n");
    }

    #[test]
    fn test_expression_property() {
        let prop = PropertyDecl::new(
            "int",
            "Value",
            Accessors::Expression {
                get: "Property.intValue".into(),
                set: Some("Property.intValue = value".into()),
            },
        );
        assert_eq!(
            render(&prop),
            "public int Value\n{\n    get => Property.intValue;\n    set => Property.intValue = value;\n}\n"
        );
    }

    #[test]
    fn test_block_property_with_attribute() {
        let prop = PropertyDecl::new(
            "T",
            "item",
            Accessors::Block {
                get: vec!["return default;".into()],
                set: None,
            },
        )
        .attribute("global::System.Obsolete(\"no\", true)");
        assert_eq!(
            render(&prop),
            "[global::System.Obsolete(\"no\", true)]\npublic T item\n{\n    get\n    {\n        return default;\n    }\n}\n"
        );
    }

    #[test]
    fn test_field_with_elements() {
        let field = FieldDecl::new("string[]", "Names")
            .modifiers("public static readonly")
            .elements(["@\"a\"", "@\"b\""]);
        assert_eq!(
            render(&field),
            "public static readonly string[] Names =\n{\n    @\"a\",\n    @\"b\",\n};\n"
        );
    }

    #[test]
    fn test_method_with_nested_block() {
        let method = MethodDecl::new("public void Run()")
            .line("var i = 0;")
            .block("foreach (var x in xs)", ["i++;"]);
        assert_eq!(
            render(&method),
            "public void Run()\n{\n    var i = 0;\n    foreach (var x in xs)\n    {\n        i++;\n    }\n}\n"
        );
    }
}
