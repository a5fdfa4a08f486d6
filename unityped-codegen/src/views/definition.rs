//! View definition variants.

use unityped_ir::{EnumWidth, LeafType, TypeId, TypeKind};

/// Stable handle to a view definition in the [`ViewRegistry`](super::ViewRegistry) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub(crate) usize);

/// Accessor shape generated for a type.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewDefinition {
    /// A generic parameter of the enclosing view; named by the parameter.
    TypeParameter,
    /// `T[]` and `List<T>`, served by the runtime array view.
    Array,
    /// A leaf value with a runtime `SerializedPropertyView*` type.
    DirectValue(LeafType),
    Enum(EnumView),
    Composite(CompositeView),
    /// A member holding a reference to a host-managed object.
    ObjectReference { ty: TypeId },
    /// Marker for members whose type cannot be accessed.
    Unsupported,
}

impl ViewDefinition {
    /// Whether the view exposes a single typed `Value`.
    pub fn is_direct_access(&self) -> bool {
        matches!(
            self,
            Self::DirectValue(_) | Self::Enum(_) | Self::ObjectReference { .. }
        )
    }

    /// Builtin views are shared by every type they match and live in the runtime namespace.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::TypeParameter | Self::Array | Self::DirectValue(_) | Self::Unsupported
        )
    }

    /// Builtin matcher predicate.
    ///
    /// Cached views never match by kind; they are found through the
    /// registry cache by type identity.
    pub fn matches(&self, kind: &TypeKind) -> bool {
        match (self, kind) {
            (Self::TypeParameter, TypeKind::GenericParameter { .. }) => true,
            (Self::Array, TypeKind::Array { .. }) => true,
            (Self::DirectValue(leaf), TypeKind::Primitive { leaf: other }) => leaf == other,
            _ => false,
        }
    }

    /// Type served by a cached view.
    pub fn served_type(&self) -> Option<TypeId> {
        match self {
            Self::Enum(view) => Some(view.ty),
            Self::Composite(view) => Some(view.ty),
            Self::ObjectReference { ty } => Some(*ty),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TypeParameter => "type parameter",
            Self::Array => "array",
            Self::DirectValue(_) => "direct value",
            Self::Enum(_) => "enum",
            Self::Composite(_) => "composite",
            Self::ObjectReference { .. } => "object reference",
            Self::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumView {
    pub ty: TypeId,
    pub underlying: EnumWidth,
}

/// One accessor per eligible member of an inline class or struct.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeView {
    /// The unbound definition this view was created for.
    pub ty: TypeId,
    /// Root views expose `Target` and look members up through it.
    pub root: bool,
    pub members: Vec<MemberView>,
    /// Set once the member list has been filled from the worklist.
    pub complete: bool,
}

/// A resolved member accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberView {
    /// Serialized name, used as the property path segment.
    pub name: String,
    /// C# identifier of the accessor.
    pub ident: String,
    pub view: ViewId,
    /// Declared type, absent for undescribed members.
    pub ty: Option<TypeId>,
    /// Expose the view object instead of inlining its `Value`.
    pub nested: bool,
    /// Why the member maps to the unsupported marker.
    pub unsupported: Option<String>,
}
