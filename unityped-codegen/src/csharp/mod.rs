//! C# syntax builders.
//!
//! These nodes cover the subset of C# the generator emits (namespaces,
//! structs, classes, interfaces, enums, fields, properties and methods)
//! and render through [`CodeBuilder`](crate::builder::CodeBuilder) with
//! Allman braces.

mod file;
mod members;
mod types;

pub use file::{Namespace, SourceFile};
pub use members::{Accessors, FieldDecl, FieldInit, MethodDecl, PropertyDecl};
pub use types::{DeclKind, EnumDecl, TypeDecl};

/// Fully qualified `SerializedProperty`.
pub const SERIALIZED_PROPERTY: &str = "global::UnityEditor.SerializedProperty";

/// Fully qualified `SerializedObject`.
pub const SERIALIZED_OBJECT: &str = "global::UnityEditor.SerializedObject";

/// Attribute that turns any use of the annotated symbol into a compile error.
pub fn obsolete_error(message: &str) -> String {
    format!(
        "global::System.Obsolete({}, true)",
        unityped_core::to_string_literal(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obsolete_error_escapes_message() {
        assert_eq!(
            obsolete_error("type \"X*\" is a pointer"),
            "global::System.Obsolete(\"type \\\"X*\\\" is a pointer\", true)"
        );
    }
}
