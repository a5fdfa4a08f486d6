use super::{property_member, support_unit, view_decl};
use crate::csharp::{Accessors, MethodDecl, PropertyDecl};
use crate::generation::SourceUnit;
use crate::views::{ViewOptions, naming::ARRAY_VIEW};

/// Generic runtime view shared by `T[]` and `List<T>`.
pub(super) fn unit(options: &ViewOptions) -> SourceUnit {
    let decl = view_decl(options, ARRAY_VIEW)
        .type_parameter("TElement")
        .constraint(format!("TElement : struct, {}", options.view_interface()))
        .member(property_member())
        .member(PropertyDecl::new(
            "int",
            "Length",
            Accessors::Expression {
                get: "Property.arraySize".into(),
                set: Some("Property.arraySize = value".into()),
            },
        ))
        .member(PropertyDecl::new(
            "TElement",
            "this[int index]",
            Accessors::Block {
                get: vec![
                    "var view = new TElement();".into(),
                    "view.Property = Property.GetArrayElementAtIndex(index);".into(),
                    "return view;".into(),
                ],
                set: None,
            },
        ))
        .member(
            MethodDecl::new("public void InsertArrayElementAtIndex(int index)")
                .line("Property.InsertArrayElementAtIndex(index);"),
        )
        .member(
            MethodDecl::new("public void DeleteArrayElementAtIndex(int index)")
                .line("Property.DeleteArrayElementAtIndex(index);"),
        )
        .member(MethodDecl::new("public void ClearArray()").line("Property.ClearArray();"));

    support_unit(options, ARRAY_VIEW, decl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_view_is_generic_over_element_view() {
        let unit = unit(&ViewOptions::default());

        assert_eq!(unit.hint, "UniTyped.Editor.SerializedPropertyArrayView.g.cs");
        assert!(unit.content.contains(
            "public struct SerializedPropertyArrayView<TElement> : global::UniTyped.Editor.ISerializedPropertyView\n        where TElement : struct, global::UniTyped.Editor.ISerializedPropertyView\n"
        ));
        assert!(unit.content.contains("public TElement this[int index]\n"));
        assert!(unit.content.contains("get => Property.arraySize;"));
    }
}
