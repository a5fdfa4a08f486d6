use unityped_core::to_string_literal;
use unityped_ir::TypeKind;

use super::{property_member, view_decl, view_unit};
use crate::GenerationContext;
use crate::csharp::{
    Accessors, MethodDecl, PropertyDecl, SERIALIZED_OBJECT, SERIALIZED_PROPERTY, obsolete_error,
};
use crate::generation::SourceUnit;
use crate::views::naming::{UNSUPPORTED_VIEW, csharp_type, view_struct_name, view_type_name};
use crate::views::{CompositeView, MemberView, ViewError};

/// Identifiers a member accessor must not take in a view named `view_name`.
pub(crate) fn reserved_member_names(view_name: &str) -> [&str; 5] {
    ["Target", "Property", "Value", "FindProperty", view_name]
}

/// View with one accessor per eligible member.
pub(super) fn unit(
    ctx: &GenerationContext<'_>,
    view: &CompositeView,
) -> Result<SourceUnit, ViewError> {
    let options = ctx.options;
    let descriptor = ctx.catalog.get(view.ty)?;

    let mut decl = view_decl(options, view_struct_name(descriptor));
    for param in &descriptor.type_parameters {
        decl = decl
            .type_parameter(param.as_str())
            .constraint(format!("{param} : struct, {}", options.view_interface()));
    }

    if view.root {
        decl.push_member(PropertyDecl::auto(SERIALIZED_OBJECT, "Target"));
    }
    decl.push_member(property_member());

    if descriptor.kind == TypeKind::ExternalObject {
        let value_type = csharp_type(ctx, view.ty)?;
        let source = if view.root {
            "(Target != null ? Target.targetObject : Property.objectReferenceValue)"
        } else {
            "Property.objectReferenceValue"
        };
        decl.push_member(PropertyDecl::new(
            value_type.as_str(),
            "Value",
            Accessors::Expression {
                get: format!("({value_type}){source}"),
                set: Some("Property.objectReferenceValue = value".into()),
            },
        ));
    }

    let lookup = if view.root {
        "return Target != null ? Target.FindProperty(path) : Property.FindPropertyRelative(path);"
    } else {
        "return Property.FindPropertyRelative(path);"
    };
    decl.push_member(
        MethodDecl::new(format!(
            "private {SERIALIZED_PROPERTY} FindProperty(string path)"
        ))
        .line(lookup),
    );

    for member in &view.members {
        decl.push_member(accessor(ctx, member)?);
    }

    Ok(view_unit(ctx, descriptor, decl))
}

fn accessor(ctx: &GenerationContext<'_>, member: &MemberView) -> Result<PropertyDecl, ViewError> {
    let bind = format!(
        "view.Property = FindProperty({});",
        to_string_literal(&member.name)
    );

    let ty = match (&member.unsupported, member.ty) {
        (None, Some(ty)) => ty,
        (reason, _) => {
            let view_type = ctx.options.runtime_type(UNSUPPORTED_VIEW);
            let reason = reason.as_deref().unwrap_or("member type is not supported");
            return Ok(nested(&view_type, &member.ident, bind).attribute(obsolete_error(reason)));
        }
    };

    let view_type = view_type_name(ctx, ty)?;
    if member.nested {
        return Ok(nested(&view_type, &member.ident, bind));
    }

    let create = format!("var view = new {view_type}();");
    Ok(PropertyDecl::new(
        csharp_type(ctx, ty)?,
        member.ident.as_str(),
        Accessors::Block {
            get: vec![create.clone(), bind.clone(), "return view.Value;".into()],
            set: Some(vec![create, bind, "view.Value = value;".into()]),
        },
    ))
}

/// Accessor returning the member's view object.
fn nested(view_type: &str, ident: &str, bind: String) -> PropertyDecl {
    PropertyDecl::new(
        view_type,
        ident,
        Accessors::Block {
            get: vec![
                format!("var view = new {view_type}();"),
                bind,
                "return view;".into(),
            ],
            set: None,
        },
    )
}
