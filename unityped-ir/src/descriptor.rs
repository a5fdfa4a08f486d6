//! Type and member descriptors supplied by type discovery.

use serde::{Deserialize, Serialize};

use crate::{TypeId, TypeKind};

/// Structural description of one type.
///
/// A constructed generic type (`Pair<int, float>`) carries its unbound
/// `definition` plus `type_arguments`; its members live on the definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Dotted namespace, empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    /// Simple name without generic arity.
    pub name: String,
    pub kind: TypeKind,
    /// Generic parameter names of a definition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    /// Unbound definition of a constructed generic type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<TypeId>,
    /// Type arguments of a constructed generic type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeId>,
    /// Annotated members in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind,
            type_parameters: Vec::new(),
            definition: None,
            type_arguments: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add generic parameter names.
    pub fn with_type_parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = params.into_iter().map(Into::into).collect();
        self
    }

    /// Add a member.
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Check if the type lives in the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Check if this is a constructed generic type.
    pub fn is_constructed(&self) -> bool {
        self.definition.is_some()
    }

    /// Dotted name including the namespace, e.g. `Game.Inventory`.
    pub fn full_name(&self) -> String {
        if self.is_global() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Metadata-style name with generic arity, e.g. `Game.Pair`2`.
    pub fn metadata_name(&self) -> String {
        let arity = if self.is_constructed() {
            self.type_arguments.len()
        } else {
            self.type_parameters.len()
        };
        match arity {
            0 => self.full_name(),
            n => format!("{}`{}", self.full_name(), n),
        }
    }
}

/// One annotated member of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Serialized name; also the property path segment in the store.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: MemberType,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub storage: Storage,
    /// Explicitly marked for serialization regardless of visibility.
    #[serde(default)]
    pub serialize_field: bool,
    #[serde(default)]
    pub directives: Directives,
}

impl MemberDescriptor {
    /// A public instance member of the given type.
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty: MemberType::Described(ty),
            visibility: Visibility::Public,
            storage: Storage::Instance,
            serialize_field: false,
            directives: Directives::default(),
        }
    }

    /// A member whose declared type discovery could not describe.
    pub fn undescribed(
        name: impl Into<String>,
        display: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            ty: MemberType::Undescribed {
                display: display.into(),
                reason: reason.into(),
            },
            ..Self::new(name, TypeId::new(0))
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn serialize_field(mut self) -> Self {
        self.serialize_field = true;
        self
    }

    pub fn storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    pub fn ignore(mut self) -> Self {
        self.directives.ignore = true;
        self
    }

    pub fn force_nested(mut self) -> Self {
        self.directives.force_nested = true;
        self
    }

    /// Whether the host serializes this member at all.
    pub fn is_serialized(&self) -> bool {
        self.storage == Storage::Instance
            && (self.visibility == Visibility::Public || self.serialize_field)
    }

    /// Whether the member gets an accessor in the generated view.
    pub fn is_eligible(&self) -> bool {
        self.is_serialized() && !self.directives.ignore
    }
}

/// Declared type of a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Described(TypeId),
    /// Discovery saw the member but could not describe its type
    /// (pointers, fixed buffers, unknown external kinds).
    Undescribed { display: String, reason: String },
}

impl MemberType {
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            Self::Described(id) => Some(*id),
            Self::Undescribed { .. } => None,
        }
    }
}

/// Per-member generation directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Directives {
    /// Never generate an accessor for this member.
    #[serde(default)]
    pub ignore: bool,
    /// Always expose the member's view object instead of inlining its value.
    #[serde(default)]
    pub force_nested: bool,
}

impl Directives {
    pub fn any(&self) -> bool {
        self.ignore || self.force_nested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Storage {
    #[default]
    Instance,
    Static,
    Const,
    ReadOnly,
}
