use unityped_ir::LeafType;

use super::{property_member, support_unit, view_decl};
use crate::csharp::{Accessors, PropertyDecl};
use crate::generation::SourceUnit;
use crate::views::{ViewOptions, leaf, naming::direct_view_struct_name};

/// Runtime view of one leaf type.
pub(super) fn unit(options: &ViewOptions, leaf_type: LeafType) -> SourceUnit {
    let binding = leaf::binding(leaf_type);
    let name = direct_view_struct_name(leaf_type);

    let decl = view_decl(options, name.as_str())
        .member(property_member())
        .member(PropertyDecl::new(
            binding.value_type,
            "Value",
            Accessors::Expression {
                get: binding.read_expr(),
                set: Some(binding.write_expr()),
            },
        ));

    support_unit(options, &name, decl)
}
