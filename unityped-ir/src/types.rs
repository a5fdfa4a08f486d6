//! Core type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a descriptor stored in a [`TypeCatalog`](crate::TypeCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a type for memoization purposes.
///
/// Constructed generic types share the key of their unbound definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(TypeId);

impl TypeKey {
    pub(crate) fn new(definition: TypeId) -> Self {
        Self(definition)
    }

    /// The descriptor that owns this identity (never a constructed type).
    pub fn definition(self) -> TypeId {
        self.0
    }
}

/// Structural classification of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeKind {
    /// A leaf value stored directly in a property slot.
    Primitive { leaf: LeafType },
    /// A fixed array or list of elements.
    Array {
        element: TypeId,
        #[serde(default)]
        shape: ArrayShape,
    },
    /// An enumeration with a declared storage width.
    Enum {
        #[serde(default)]
        underlying: EnumWidth,
    },
    /// An inline class or struct whose members are serialized in place.
    Composite {
        #[serde(default)]
        shape: CompositeShape,
    },
    /// A generic type parameter of the enclosing definition.
    GenericParameter { ordinal: usize },
    /// A type managed by the host as a separate object (serialized by reference).
    ExternalObject,
}

impl TypeKind {
    /// Short lowercase label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primitive { .. } => "primitive",
            Self::Array { .. } => "array",
            Self::Enum { .. } => "enum",
            Self::Composite { .. } => "composite",
            Self::GenericParameter { .. } => "generic parameter",
            Self::ExternalObject => "external object",
        }
    }
}

/// Leaf value types the host property store can hold directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafType {
    Byte,
    SByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Bool,
    String,
    Char,
    AnimationCurve,
    BoundsInt,
    Bounds,
    Color,
    Hash128,
    Quaternion,
    RectInt,
    Rect,
    Vector2Int,
    Vector2,
    Vector3Int,
    Vector3,
    Vector4,
}

impl LeafType {
    /// Every leaf type, in builtin matcher priority order.
    pub const ALL: [LeafType; 26] = [
        Self::Byte,
        Self::SByte,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::Float,
        Self::Double,
        Self::Bool,
        Self::String,
        Self::Char,
        Self::AnimationCurve,
        Self::BoundsInt,
        Self::Bounds,
        Self::Color,
        Self::Hash128,
        Self::Quaternion,
        Self::RectInt,
        Self::Rect,
        Self::Vector2Int,
        Self::Vector2,
        Self::Vector3Int,
        Self::Vector3,
        Self::Vector4,
    ];
}

/// Storage width of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumWidth {
    I8,
    U8,
    I16,
    U16,
    #[default]
    I32,
    U32,
    I64,
    U64,
}

/// Collection flavour of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayShape {
    /// `T[]`
    #[default]
    Array,
    /// `List<T>`
    List,
}

/// Declaration flavour of a composite type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeShape {
    #[default]
    Class,
    Struct,
}
