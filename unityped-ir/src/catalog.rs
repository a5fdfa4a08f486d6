//! Arena of type descriptors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    ArrayShape, DescriptorError, LeafType, MemberDescriptor, MemberType, TypeDescriptor, TypeId,
    TypeKey, TypeKind,
};

/// Every type known to one generation run, addressed by [`TypeId`].
///
/// The catalog is append-only: handles stay valid for the lifetime of the
/// catalog and descriptors are never replaced once inserted.
///
/// # Example
///
/// ```
/// use unityped_ir::{LeafType, MemberDescriptor, TypeCatalog, TypeDescriptor, TypeKind};
///
/// let mut catalog = TypeCatalog::new();
/// let int = catalog.leaf(LeafType::Int);
/// let player = catalog.insert(
///     TypeDescriptor::new("Game", "Player", TypeKind::ExternalObject)
///         .with_member(MemberDescriptor::new("health", int)),
/// );
///
/// assert_eq!(catalog.get(player).unwrap().full_name(), "Game.Player");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCatalog {
    types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog handed over by type discovery as JSON.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog to pretty JSON.
    pub fn to_json(&self) -> Result<String, DescriptorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Insert a descriptor and return its handle.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(descriptor);
        id
    }

    /// Append a member to an already inserted type.
    ///
    /// Needed for self-referential types, whose members mention the
    /// owner's handle.
    pub fn push_member(
        &mut self,
        owner: TypeId,
        member: MemberDescriptor,
    ) -> Result<(), DescriptorError> {
        let descriptor = self
            .types
            .get_mut(owner.index())
            .ok_or(DescriptorError::UnknownType(owner))?;
        descriptor.members.push(member);
        Ok(())
    }

    /// Handle of a leaf type, inserted on first use.
    pub fn leaf(&mut self, leaf: LeafType) -> TypeId {
        let existing = self
            .iter()
            .find(|(_, d)| d.kind == TypeKind::Primitive { leaf })
            .map(|(id, _)| id);
        existing.unwrap_or_else(|| {
            self.insert(TypeDescriptor::new(
                "",
                format!("{leaf:?}"),
                TypeKind::Primitive { leaf },
            ))
        })
    }

    /// Handle of `element[]`.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        self.collection(element, ArrayShape::Array)
    }

    /// Handle of `List<element>`.
    pub fn list_of(&mut self, element: TypeId) -> TypeId {
        self.collection(element, ArrayShape::List)
    }

    fn collection(&mut self, element: TypeId, shape: ArrayShape) -> TypeId {
        self.insert(TypeDescriptor::new(
            "",
            "Array",
            TypeKind::Array { element, shape },
        ))
    }

    /// Handle of a generic parameter of some definition.
    pub fn generic_parameter(&mut self, name: impl Into<String>, ordinal: usize) -> TypeId {
        self.insert(TypeDescriptor::new(
            "",
            name,
            TypeKind::GenericParameter { ordinal },
        ))
    }

    /// Handle of `definition<arguments...>`.
    pub fn construct(
        &mut self,
        definition: TypeId,
        arguments: Vec<TypeId>,
    ) -> Result<TypeId, DescriptorError> {
        let def = self.get(definition)?;
        if def.is_constructed() {
            return Err(DescriptorError::NestedConstruction {
                name: def.full_name(),
            });
        }
        if def.type_parameters.len() != arguments.len() {
            return Err(DescriptorError::ArityMismatch {
                name: def.full_name(),
                expected: def.type_parameters.len(),
                found: arguments.len(),
            });
        }

        let mut constructed =
            TypeDescriptor::new(def.namespace.clone(), def.name.clone(), def.kind.clone());
        constructed.definition = Some(definition);
        constructed.type_arguments = arguments;
        Ok(self.insert(constructed))
    }

    /// Look up a descriptor.
    pub fn get(&self, id: TypeId) -> Result<&TypeDescriptor, DescriptorError> {
        self.types
            .get(id.index())
            .ok_or(DescriptorError::UnknownType(id))
    }

    /// Identity used for memoization: constructed types fold onto their definition.
    pub fn identity(&self, id: TypeId) -> Result<TypeKey, DescriptorError> {
        let descriptor = self.get(id)?;
        Ok(TypeKey::new(descriptor.definition.unwrap_or(id)))
    }

    /// The unbound definition descriptor (the type itself when not constructed).
    pub fn definition(&self, id: TypeId) -> Result<&TypeDescriptor, DescriptorError> {
        self.get(self.identity(id)?.definition())
    }

    /// Iterate over all descriptors with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, d)| (TypeId::new(i as u32), d))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Check the catalog for contract violations.
    ///
    /// Returns every problem found rather than stopping at the first one.
    pub fn validate(&self) -> Vec<DescriptorError> {
        let mut errors = Vec::new();
        let check = |id: TypeId, errors: &mut Vec<DescriptorError>| {
            if self.get(id).is_err() {
                errors.push(DescriptorError::UnknownType(id));
            }
        };

        for (_, descriptor) in self.iter() {
            if let TypeKind::Array { element, .. } = descriptor.kind {
                check(element, &mut errors);
            }
            for &arg in &descriptor.type_arguments {
                check(arg, &mut errors);
            }
            if let Some(definition) = descriptor.definition {
                match self.get(definition) {
                    Ok(def) if def.is_constructed() => {
                        errors.push(DescriptorError::NestedConstruction {
                            name: descriptor.full_name(),
                        });
                    }
                    Ok(def) if def.type_parameters.len() != descriptor.type_arguments.len() => {
                        errors.push(DescriptorError::ArityMismatch {
                            name: def.full_name(),
                            expected: def.type_parameters.len(),
                            found: descriptor.type_arguments.len(),
                        });
                    }
                    Ok(_) => {}
                    Err(e) => errors.push(e),
                }
            }

            for member in &descriptor.members {
                match &member.ty {
                    MemberType::Described(id) => check(*id, &mut errors),
                    MemberType::Undescribed { reason, .. } if member.directives.any() => {
                        errors.push(DescriptorError::UndescribedDirectiveTarget {
                            owner: descriptor.full_name(),
                            member: member.name.clone(),
                            reason: reason.clone(),
                        });
                    }
                    MemberType::Undescribed { .. } => {}
                }
            }
        }

        for id in self.cyclic_types() {
            errors.push(DescriptorError::Cycle(id));
        }

        errors
    }

    /// Types reachable from themselves through array elements or type
    /// arguments. Each one is reported once, at the point the cycle closes.
    fn cyclic_types(&self) -> Vec<TypeId> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Open,
            Done,
        }

        let mut marks = vec![Mark::New; self.types.len()];
        let mut cyclic = Vec::new();

        for (start, _) in self.iter() {
            if marks[start.index()] != Mark::New {
                continue;
            }
            marks[start.index()] = Mark::Open;
            let mut stack = vec![(start, self.components(start))];

            while let Some((id, children)) = stack.last_mut() {
                let id = *id;
                match children.pop() {
                    Some(child) => match marks.get(child.index()) {
                        Some(Mark::New) => {
                            marks[child.index()] = Mark::Open;
                            stack.push((child, self.components(child)));
                        }
                        Some(Mark::Open) if !cyclic.contains(&child) => cyclic.push(child),
                        // finished, already reported, or dangling
                        _ => {}
                    },
                    None => {
                        marks[id.index()] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }

        cyclic
    }

    /// First host-managed object type reachable from `id` through array
    /// elements or type arguments that is constructed over a generic
    /// parameter, e.g. `Holder<T>` inside a generic definition.
    pub fn open_external_object(&self, id: TypeId) -> Option<TypeId> {
        self.find_reachable(id, |descriptor| {
            descriptor.kind == TypeKind::ExternalObject
                && descriptor
                    .type_arguments
                    .iter()
                    .any(|&arg| self.mentions_parameter(arg))
        })
    }

    /// Whether a generic parameter is reachable from `id`.
    pub fn mentions_parameter(&self, id: TypeId) -> bool {
        self.find_reachable(id, |descriptor| {
            matches!(descriptor.kind, TypeKind::GenericParameter { .. })
        })
        .is_some()
    }

    fn find_reachable(
        &self,
        id: TypeId,
        predicate: impl Fn(&TypeDescriptor) -> bool,
    ) -> Option<TypeId> {
        let mut seen = HashSet::new();
        let mut stack = vec![id];
        while let Some(ty) = stack.pop() {
            if !seen.insert(ty) {
                continue;
            }
            let Ok(descriptor) = self.get(ty) else {
                continue;
            };
            if predicate(descriptor) {
                return Some(ty);
            }
            stack.extend(self.components(ty));
        }
        None
    }

    /// Array element and type arguments of `id`.
    fn components(&self, id: TypeId) -> Vec<TypeId> {
        let Ok(descriptor) = self.get(id) else {
            return Vec::new();
        };
        let element = match descriptor.kind {
            TypeKind::Array { element, .. } => Some(element),
            _ => None,
        };
        element
            .into_iter()
            .chain(descriptor.type_arguments.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompositeShape, EnumWidth};

    fn composite(name: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            "Game",
            name,
            TypeKind::Composite {
                shape: CompositeShape::Class,
            },
        )
    }

    #[test]
    fn test_leaf_is_deduplicated() {
        let mut catalog = TypeCatalog::new();
        let a = catalog.leaf(LeafType::Float);
        let b = catalog.leaf(LeafType::Float);
        let c = catalog.leaf(LeafType::Int);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_constructed_identity_is_definition() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let float = catalog.leaf(LeafType::Float);
        let pair = catalog.insert(composite("Pair").with_type_parameters(["A", "B"]));

        let a = catalog.construct(pair, vec![int, float]).unwrap();
        let b = catalog.construct(pair, vec![float, int]).unwrap();

        assert_ne!(a, b);
        assert_eq!(catalog.identity(a).unwrap(), catalog.identity(pair).unwrap());
        assert_eq!(catalog.identity(b).unwrap().definition(), pair);
        assert_eq!(catalog.definition(a).unwrap().type_parameters.len(), 2);
    }

    #[test]
    fn test_construct_checks_arity() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let pair = catalog.insert(composite("Pair").with_type_parameters(["A", "B"]));

        let err = catalog.construct(pair, vec![int]).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::ArityMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_self_reference_via_push_member() {
        let mut catalog = TypeCatalog::new();
        let node = catalog.insert(composite("Node"));
        catalog
            .push_member(node, MemberDescriptor::new("next", node))
            .unwrap();

        assert_eq!(catalog.get(node).unwrap().members.len(), 1);
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_directive_on_undescribed_member() {
        let mut catalog = TypeCatalog::new();
        catalog.insert(
            composite("Buffer")
                .with_member(
                    MemberDescriptor::undescribed("raw", "char*", "pointer").force_nested(),
                )
                .with_member(MemberDescriptor::undescribed("other", "char*", "pointer")),
        );

        let errors = catalog.validate();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            DescriptorError::UndescribedDirectiveTarget { member, .. } if member == "raw"
        ));
    }

    #[test]
    fn test_validate_reports_dangling_handles() {
        let mut catalog = TypeCatalog::new();
        catalog.insert(
            composite("Broken").with_member(MemberDescriptor::new("x", TypeId::new(42))),
        );

        let errors = catalog.validate();
        assert!(matches!(errors[0], DescriptorError::UnknownType(id) if id == TypeId::new(42)));
    }

    #[test]
    fn test_validate_reports_self_containing_array() {
        let json = r#"{
            "types": [
                { "name": "Array", "kind": { "type": "array", "element": 0 } }
            ]
        }"#;

        let catalog = TypeCatalog::from_json(json).unwrap();
        let errors = catalog.validate();

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], DescriptorError::Cycle(id) if id == TypeId::new(0)));
    }

    #[test]
    fn test_validate_reports_cycle_through_type_arguments() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let boxed = catalog.insert(composite("Box").with_type_parameters(["T"]));
        let ok = catalog.construct(boxed, vec![int]).unwrap();
        let mut looped = composite("Box");
        looped.definition = Some(boxed);
        // Box<Box<...>[]>: the array's element is the constructed type itself
        looped.type_arguments = vec![TypeId::new(catalog.len() as u32 + 1)];
        let looped = catalog.insert(looped);
        catalog.insert(TypeDescriptor::new(
            "",
            "Array",
            TypeKind::Array {
                element: looped,
                shape: ArrayShape::Array,
            },
        ));

        let errors = catalog.validate();

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], DescriptorError::Cycle(id) if id == looped));
        assert!(catalog.components(ok).contains(&int));
    }

    #[test]
    fn test_open_external_object_through_arguments() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let a = catalog.generic_parameter("A", 0);
        let a_list = catalog.list_of(a);
        let holder = catalog.insert(
            TypeDescriptor::new("Game", "Holder", TypeKind::ExternalObject)
                .with_type_parameters(["T"]),
        );
        let open = catalog.construct(holder, vec![a_list]).unwrap();
        let closed = catalog.construct(holder, vec![int]).unwrap();
        let open_array = catalog.array_of(open);
        let wrapper = catalog.insert(composite("Wrapper").with_type_parameters(["T"]));
        let wrapped = catalog.construct(wrapper, vec![open]).unwrap();

        assert_eq!(catalog.open_external_object(open), Some(open));
        assert_eq!(catalog.open_external_object(open_array), Some(open));
        assert_eq!(catalog.open_external_object(wrapped), Some(open));
        assert_eq!(catalog.open_external_object(closed), None);
        assert_eq!(catalog.open_external_object(a_list), None);
        assert!(catalog.mentions_parameter(a_list));
        assert!(!catalog.mentions_parameter(closed));
    }

    #[test]
    fn test_json_round_trip_preserves_members() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let mode = catalog.insert(TypeDescriptor::new(
            "Game",
            "Mode",
            TypeKind::Enum {
                underlying: EnumWidth::U8,
            },
        ));
        catalog.insert(
            composite("Settings")
                .with_member(MemberDescriptor::new("count", int).ignore())
                .with_member(MemberDescriptor::new("mode", mode)),
        );

        let json = catalog.to_json().unwrap();
        let loaded = TypeCatalog::from_json(&json).unwrap();

        assert_eq!(loaded.len(), 3);
        let settings = loaded.get(TypeId::new(2)).unwrap();
        assert!(settings.members[0].directives.ignore);
        assert_eq!(settings.members[1].ty, MemberType::Described(mode));
    }

    #[test]
    fn test_from_json_accepts_discovery_format() {
        let json = r#"{
            "types": [
                { "name": "Int", "kind": { "type": "primitive", "leaf": "int" } },
                {
                    "namespace": "Game",
                    "name": "Example",
                    "kind": { "type": "external_object" },
                    "members": [
                        { "name": "ignoredField", "type": { "described": 0 },
                          "visibility": "private", "serialize_field": true,
                          "directives": { "ignore": true } },
                        { "name": "nestedField", "type": { "described": 0 },
                          "visibility": "private", "serialize_field": true,
                          "directives": { "force_nested": true } }
                    ]
                }
            ]
        }"#;

        let catalog = TypeCatalog::from_json(json).unwrap();
        let example = catalog.get(TypeId::new(1)).unwrap();

        assert_eq!(example.kind, TypeKind::ExternalObject);
        assert!(!example.members[0].is_eligible());
        assert!(example.members[1].is_eligible());
        assert!(example.members[1].directives.force_nested);
    }
}
