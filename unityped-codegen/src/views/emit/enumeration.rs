use unityped_ir::EnumWidth;

use super::{property_member, view_decl, view_unit};
use crate::GenerationContext;
use crate::csharp::{Accessors, PropertyDecl};
use crate::generation::SourceUnit;
use crate::views::naming::{csharp_type, view_struct_name};
use crate::views::{EnumView, ViewError, leaf::enum_storage};

/// View exposing an enum `Value` stored with the enum's declared width.
pub(super) fn unit(ctx: &GenerationContext<'_>, view: &EnumView) -> Result<SourceUnit, ViewError> {
    let descriptor = ctx.catalog.get(view.ty)?;
    let value_type = csharp_type(ctx, view.ty)?;
    let (storage, accessor) = enum_storage(view.underlying);

    let set = match view.underlying {
        // ulong does not widen to long implicitly
        EnumWidth::U64 => format!("Property.{accessor} = (long)(ulong)value"),
        _ => format!("Property.{accessor} = ({storage})value"),
    };

    let decl = view_decl(ctx.options, view_struct_name(descriptor))
        .member(property_member())
        .member(PropertyDecl::new(
            value_type.as_str(),
            "Value",
            Accessors::Expression {
                get: format!("({value_type})({storage})Property.{accessor}"),
                set: Some(set),
            },
        ));

    Ok(view_unit(ctx, descriptor, decl))
}
