use unityped_ir::TypeId;

use super::{property_member, view_decl, view_unit};
use crate::GenerationContext;
use crate::csharp::{Accessors, PropertyDecl};
use crate::generation::SourceUnit;
use crate::views::ViewError;
use crate::views::naming::{csharp_type, view_struct_name};

/// View of a member referencing a host-managed object.
///
/// Generic object types yield a view generic over the same parameters,
/// so `Value` keeps the concrete reference type.
pub(super) fn unit(ctx: &GenerationContext<'_>, ty: TypeId) -> Result<SourceUnit, ViewError> {
    let descriptor = ctx.catalog.get(ty)?;
    let value_type = csharp_type(ctx, ty)?;

    let mut decl = view_decl(ctx.options, view_struct_name(descriptor));
    for param in &descriptor.type_parameters {
        decl = decl.type_parameter(param.as_str());
    }

    let decl = decl.member(property_member()).member(PropertyDecl::new(
        value_type.as_str(),
        "Value",
        Accessors::Expression {
            get: format!("({value_type})Property.objectReferenceValue"),
            set: Some("Property.objectReferenceValue = value".into()),
        },
    ));

    Ok(view_unit(ctx, descriptor, decl))
}

#[cfg(test)]
mod tests {
    use unityped_ir::{TypeCatalog, TypeDescriptor, TypeKind};

    use super::*;
    use crate::ViewOptions;

    #[test]
    fn test_reference_view() {
        let mut catalog = TypeCatalog::new();
        let texture = catalog.insert(TypeDescriptor::new(
            "UnityEngine",
            "Texture2D",
            TypeKind::ExternalObject,
        ));
        let options = ViewOptions::default();
        let ctx = GenerationContext::new(&catalog, &options);

        let unit = unit(&ctx, texture).unwrap();
        insta::assert_snapshot!(unit.content, @r"
        // <auto-generated/>
        // UnityEngine.Texture2D

        namespace UniTyped.Generated.UnityEngine
        {
            public struct Texture2DView : global::UniTyped.Editor.ISerializedPropertyView
            {
                public global::UnityEditor.SerializedProperty Property { get; set; }

                public global::UnityEngine.Texture2D Value
                {
                    get => (global::UnityEngine.Texture2D)Property.objectReferenceValue;
                    set => Property.objectReferenceValue = value;
                }
            }
        }
        ");
    }

    #[test]
    fn test_generic_reference_view_keeps_parameters() {
        let mut catalog = TypeCatalog::new();
        let holder = catalog.insert(
            TypeDescriptor::new("Game", "Holder", TypeKind::ExternalObject)
                .with_type_parameters(["T"]),
        );
        let options = ViewOptions::default();
        let ctx = GenerationContext::new(&catalog, &options);

        let unit = unit(&ctx, holder).unwrap();
        assert!(unit.content.contains("public struct HolderView<T> :"));
        assert!(unit.content.contains("public global::Game.Holder<T> Value"));
        assert_eq!(unit.hint, "UniTyped.Generated.Game.HolderView`1.g.cs");
    }
}
