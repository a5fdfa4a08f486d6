//! C# emission for each view variant.
//!
//! Every view is a struct implementing the runtime accessor interface and
//! carrying the `SerializedProperty` it is bound to. Views generated for
//! annotated types go to the generated namespace mirroring the type's own
//! namespace; builtin views go to the runtime namespace as support units.

mod array;
mod composite;
mod direct;
mod enumeration;
mod reference;
mod support;
mod unsupported;

pub(crate) use composite::reserved_member_names;
pub use support::support_units;
use unityped_ir::TypeDescriptor;

use super::naming::{hint_name, view_hint_name};
use super::{ViewDefinition, ViewError, ViewId, ViewOptions};
use crate::GenerationContext;
use crate::csharp::{DeclKind, Namespace, PropertyDecl, SERIALIZED_PROPERTY, SourceFile, TypeDecl};
use crate::generation::{FileCategory, SourceUnit};

/// Emit the unit of a cached view. Builtin views yield `None`; they are
/// emitted once by [`support_units`].
pub fn emit_view(ctx: &GenerationContext<'_>, id: ViewId) -> Result<Option<SourceUnit>, ViewError> {
    match ctx.registry.get(id) {
        ViewDefinition::Enum(view) => enumeration::unit(ctx, view).map(Some),
        ViewDefinition::Composite(view) => composite::unit(ctx, view).map(Some),
        ViewDefinition::ObjectReference { ty } => reference::unit(ctx, *ty).map(Some),
        _ => Ok(None),
    }
}

/// `public struct {name} : ISerializedPropertyView`
fn view_decl(options: &ViewOptions, name: impl Into<String>) -> TypeDecl {
    TypeDecl::new(DeclKind::Struct, name).base(options.view_interface())
}

fn property_member() -> PropertyDecl {
    PropertyDecl::auto(SERIALIZED_PROPERTY, "Property")
}

/// Unit for a view of an annotated type, headed by the type's metadata name.
fn view_unit(
    ctx: &GenerationContext<'_>,
    descriptor: &TypeDescriptor,
    decl: TypeDecl,
) -> SourceUnit {
    let namespace = ctx.options.generated_namespace_for(&descriptor.namespace);
    let content = SourceFile::new()
        .comment(descriptor.metadata_name())
        .namespace(Namespace::new(namespace.as_str()).item(decl))
        .render(ctx.options.indent);

    SourceUnit {
        hint: view_hint_name(ctx, descriptor),
        namespace,
        content,
        category: FileCategory::View,
    }
}

/// Unit for a runtime support type.
fn support_unit(options: &ViewOptions, name: &str, decl: TypeDecl) -> SourceUnit {
    let namespace = options.runtime_namespace.clone();
    let content = SourceFile::new()
        .namespace(Namespace::new(namespace.as_str()).item(decl))
        .render(options.indent);

    SourceUnit {
        hint: hint_name(&namespace, name),
        namespace,
        content,
        category: FileCategory::Support,
    }
}
