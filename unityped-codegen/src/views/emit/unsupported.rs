use super::{property_member, support_unit, view_decl};
use crate::csharp::obsolete_error;
use crate::generation::SourceUnit;
use crate::views::{ViewOptions, naming::UNSUPPORTED_VIEW};

const MESSAGE: &str = "This member cannot be accessed through a generated view.";

/// Marker view that fails compilation wherever it is used.
pub(super) fn unit(options: &ViewOptions) -> SourceUnit {
    let decl = view_decl(options, UNSUPPORTED_VIEW)
        .attribute(obsolete_error(MESSAGE))
        .member(property_member());

    support_unit(options, UNSUPPORTED_VIEW, decl)
}
