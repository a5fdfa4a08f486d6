//! Identifier sanitization and C# literal escaping.

use std::collections::HashSet;

use unicode_xid::UnicodeXID;

/// Reserved keywords of the C# language (contextual keywords excluded).
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a reserved C# keyword.
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Check if a name can be used verbatim as a C# identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_start(first) && chars.all(is_continue) && !is_csharp_keyword(name)
}

fn is_start(c: char) -> bool {
    c == '_' || c.is_xid_start()
}

fn is_continue(c: char) -> bool {
    c == '_' || c.is_xid_continue()
}

/// Convert an arbitrary display name into a valid C# identifier.
///
/// Characters outside Unicode `XID_Continue` are replaced with `_`. A
/// leading character that cannot start an identifier (a digit or a
/// combining mark) gets a `_` prefix, and keywords are escaped with `@`.
///
/// ```
/// use unityped_core::to_identifier;
///
/// assert_eq!(to_identifier("Ignore Raycast"), "Ignore_Raycast");
/// assert_eq!(to_identifier("1 Special!"), "_1_Special_");
/// assert_eq!(to_identifier("class"), "@class");
/// ```
pub fn to_identifier(name: &str) -> String {
    let mut result: String = name
        .chars()
        .map(|c| if is_continue(c) { c } else { '_' })
        .collect();

    match result.chars().next() {
        None => result.push('_'),
        Some(c) if !is_start(c) => result.insert(0, '_'),
        Some(_) => {}
    }

    if is_csharp_keyword(&result) {
        result.insert(0, '@');
    }
    result
}

/// Allocates sanitized identifiers that are unique within one scope.
///
/// Names that collide after sanitization receive a numeric suffix
/// (`Foo`, `Foo_2`, `Foo_3`, ...).
#[derive(Debug, Default)]
pub struct IdentifierSet {
    taken: HashSet<String>,
}

impl IdentifierSet {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an identifier as taken without allocating it.
    pub fn reserve(&mut self, ident: &str) {
        self.taken.insert(ident.to_string());
    }

    /// Sanitize `name` and reserve a unique identifier for it.
    pub fn insert(&mut self, name: &str) -> String {
        let base = to_identifier(name);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Render a regular C# string literal, quotes included.
pub fn to_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a C# verbatim string literal (`@"..."`), quotes included.
pub fn to_verbatim_literal(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier_keeps_valid_names() {
        assert_eq!(to_identifier("Player"), "Player");
        assert_eq!(to_identifier("_hidden"), "_hidden");
        assert_eq!(to_identifier("Layer2"), "Layer2");
    }

    #[test]
    fn test_to_identifier_replaces_invalid_chars() {
        assert_eq!(to_identifier("Ignore Raycast"), "Ignore_Raycast");
        assert_eq!(to_identifier("a-b.c"), "a_b_c");
        assert_eq!(to_identifier("1 Special!"), "_1_Special_");
    }

    #[test]
    fn test_to_identifier_edge_cases() {
        assert_eq!(to_identifier(""), "_");
        assert_eq!(to_identifier("42"), "_42");
        assert_eq!(to_identifier("default"), "@default");
        assert!(is_valid_identifier(to_identifier("!!!").as_str()));
    }

    #[test]
    fn test_to_identifier_unicode_classes() {
        // other-number characters are not identifier characters
        assert_eq!(to_identifier("x²"), "x_");
        assert_eq!(to_identifier("½"), "_");
        // a combining mark may continue but not start an identifier
        assert_eq!(to_identifier("\u{0903}abc"), "_\u{0903}abc");
        assert_eq!(to_identifier("Wasser\u{00e4}"), "Wasser\u{00e4}");
        for name in ["x²", "½", "\u{0903}abc"] {
            assert!(is_valid_identifier(&to_identifier(name)), "{name}");
        }
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(!is_valid_identifier("x²"));
        assert!(!is_valid_identifier("\u{0903}abc"));
        assert!(is_valid_identifier("_\u{0903}abc"));
        assert!(is_valid_identifier("Water"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("int"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_identifier_set_deduplicates() {
        let mut set = IdentifierSet::new();
        assert_eq!(set.insert("A B"), "A_B");
        assert_eq!(set.insert("A_B"), "A_B_2");
        assert_eq!(set.insert("A.B"), "A_B_3");
        assert_eq!(set.insert("C"), "C");
    }

    #[test]
    fn test_identifier_set_reserved_names() {
        let mut set = IdentifierSet::new();
        set.reserve("Property");
        assert_eq!(set.insert("Property"), "Property_2");
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(to_string_literal("1 Special!"), "\"1 Special!\"");
        assert_eq!(to_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(to_string_literal("a\\b\n"), "\"a\\\\b\\n\"");
    }

    #[test]
    fn test_verbatim_literal_escaping() {
        assert_eq!(to_verbatim_literal("plain"), "@\"plain\"");
        assert_eq!(to_verbatim_literal("a \"b\""), "@\"a \"\"b\"\"\"");
    }
}
