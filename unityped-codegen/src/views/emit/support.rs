use tracing::trace;

use super::{array, direct, property_member, support_unit, unsupported};
use crate::GenerationContext;
use crate::csharp::{DeclKind, TypeDecl};
use crate::generation::SourceUnit;
use crate::views::{ViewDefinition, ViewOptions, naming::VIEW_INTERFACE};

/// Runtime support units: the accessor interface, the array view, the
/// unsupported marker and every leaf view used during resolution.
///
/// Leaf views come in builtin priority order so output is stable
/// regardless of resolution order.
pub fn support_units(ctx: &GenerationContext<'_>) -> Vec<SourceUnit> {
    let options = ctx.options;
    let mut units = vec![
        interface_unit(options),
        array::unit(options),
        unsupported::unit(options),
    ];

    for (id, view) in ctx.registry.builtins() {
        if !ctx.registry.is_used(id) {
            continue;
        }
        if let ViewDefinition::DirectValue(leaf) = view {
            trace!(?leaf, "emitting leaf view");
            units.push(direct::unit(options, *leaf));
        }
    }

    units
}

fn interface_unit(options: &ViewOptions) -> SourceUnit {
    let decl = TypeDecl::new(DeclKind::Interface, VIEW_INTERFACE)
        .member(property_member().modifiers(""));
    support_unit(options, VIEW_INTERFACE, decl)
}
