//! Names of generated view types and of the C# value types they expose.

use unityped_ir::{ArrayShape, LeafType, TypeDescriptor, TypeId, TypeKind};

use super::{ViewDefinition, ViewError, leaf};
use crate::GenerationContext;

/// Simple name of the view struct declared for a type, e.g. `PlayerView`.
pub fn view_struct_name(descriptor: &TypeDescriptor) -> String {
    format!("{}View", descriptor.name)
}

/// Simple name of the runtime view of a leaf type.
pub fn direct_view_struct_name(leaf: LeafType) -> String {
    format!("SerializedPropertyView{}", leaf::binding(leaf).suffix)
}

pub const ARRAY_VIEW: &str = "SerializedPropertyArrayView";
pub const UNSUPPORTED_VIEW: &str = "SerializedPropertyViewUnsupported";
pub const VIEW_INTERFACE: &str = "ISerializedPropertyView";

/// Hint name of a generated unit: `{namespace}.{type}.g.cs`.
pub fn hint_name(namespace: &str, type_name: &str) -> String {
    format!("{namespace}.{type_name}.g.cs")
}

/// Hint name of the unit declaring the view of `descriptor`.
///
/// Generic definitions carry their arity so `Pair` and `Pair<A, B>` get
/// distinct units.
pub fn view_hint_name(ctx: &GenerationContext<'_>, descriptor: &TypeDescriptor) -> String {
    let namespace = ctx.options.generated_namespace_for(&descriptor.namespace);
    let name = match descriptor.type_parameters.len() {
        0 => view_struct_name(descriptor),
        n => format!("{}`{n}", view_struct_name(descriptor)),
    };
    hint_name(&namespace, &name)
}

/// Fully qualified name of the view type used for a value of type `ty`.
///
/// Every type reachable from `ty` must already be resolved.
pub fn view_type_name(ctx: &GenerationContext<'_>, ty: TypeId) -> Result<String, ViewError> {
    let options = ctx.options;
    let descriptor = ctx.catalog.get(ty)?;
    let view = ctx.registry.lookup(ctx.catalog, ty)?;

    match ctx.registry.get(view) {
        ViewDefinition::TypeParameter => Ok(descriptor.name.clone()),
        ViewDefinition::Array => {
            let TypeKind::Array { element, .. } = descriptor.kind else {
                return Err(ViewError::Unresolved(ty));
            };
            Ok(format!(
                "{}<{}>",
                options.runtime_type(ARRAY_VIEW),
                view_type_name(ctx, element)?
            ))
        }
        ViewDefinition::DirectValue(leaf) => {
            Ok(options.runtime_type(&direct_view_struct_name(*leaf)))
        }
        ViewDefinition::Unsupported => Ok(options.runtime_type(UNSUPPORTED_VIEW)),
        ViewDefinition::Enum(_) => qualified_view_name(ctx, ty),
        ViewDefinition::Composite(_) => {
            let base = qualified_view_name(ctx, ty)?;
            let args = descriptor
                .type_arguments
                .iter()
                .map(|&arg| view_type_name(ctx, arg))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(with_arguments(base, &args))
        }
        ViewDefinition::ObjectReference { .. } => {
            // reference views are generic over the referenced type's arguments
            let base = qualified_view_name(ctx, ty)?;
            let args = descriptor
                .type_arguments
                .iter()
                .map(|&arg| csharp_type(ctx, arg))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(with_arguments(base, &args))
        }
    }
}

/// `global::{generated}.{ns}.{Name}View` of the definition behind `ty`.
fn qualified_view_name(ctx: &GenerationContext<'_>, ty: TypeId) -> Result<String, ViewError> {
    let definition = ctx.catalog.definition(ty)?;
    Ok(format!(
        "global::{}.{}",
        ctx.options.generated_namespace_for(&definition.namespace),
        view_struct_name(definition)
    ))
}

/// Fully qualified C# type of a value of type `ty`.
pub fn csharp_type(ctx: &GenerationContext<'_>, ty: TypeId) -> Result<String, ViewError> {
    let descriptor = ctx.catalog.get(ty)?;
    match &descriptor.kind {
        TypeKind::Primitive { leaf } => Ok(leaf::binding(*leaf).value_type.to_string()),
        TypeKind::GenericParameter { .. } => Ok(descriptor.name.clone()),
        TypeKind::Array { element, shape } => {
            let element = csharp_type(ctx, *element)?;
            Ok(match shape {
                ArrayShape::Array => format!("{element}[]"),
                ArrayShape::List => format!("global::System.Collections.Generic.List<{element}>"),
            })
        }
        TypeKind::Enum { .. } | TypeKind::Composite { .. } | TypeKind::ExternalObject => {
            let base = format!("global::{}", descriptor.full_name());
            let args = if descriptor.is_constructed() {
                descriptor
                    .type_arguments
                    .iter()
                    .map(|&arg| csharp_type(ctx, arg))
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                descriptor.type_parameters.clone()
            };
            Ok(with_arguments(base, &args))
        }
    }
}

fn with_arguments(base: String, args: &[String]) -> String {
    if args.is_empty() {
        base
    } else {
        format!("{base}<{}>", args.join(", "))
    }
}
