//! View definition registry.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};
use unityped_ir::{
    DescriptorError, LeafType, TypeCatalog, TypeDescriptor, TypeId, TypeKey, TypeKind,
};

use super::{CompositeView, EnumView, MemberView, ViewDefinition, ViewError, ViewId};

/// Arena of view definitions for one generation run.
///
/// Builtin views are created up front in matcher priority order (type
/// parameter, array, then every leaf). Enum, composite and object
/// reference views are created on first encounter and cached by type
/// identity for the rest of the run. A new composite is cached before its
/// members are known, so self-referential types resolve to the same
/// handle; its members are filled in later from the pending worklist.
#[derive(Debug)]
pub struct ViewRegistry {
    views: Vec<ViewDefinition>,
    builtins: Vec<ViewId>,
    unsupported: ViewId,
    cache: IndexMap<TypeKey, ViewId>,
    pending: VecDeque<ViewId>,
    used: IndexSet<ViewId>,
    /// Types whose element or argument views are being resolved.
    resolving: IndexSet<TypeId>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        let mut views = vec![ViewDefinition::TypeParameter, ViewDefinition::Array];
        views.extend(LeafType::ALL.iter().map(|&leaf| ViewDefinition::DirectValue(leaf)));
        let builtins = (0..views.len()).map(ViewId).collect();

        let unsupported = ViewId(views.len());
        views.push(ViewDefinition::Unsupported);

        Self {
            views,
            builtins,
            unsupported,
            cache: IndexMap::new(),
            pending: VecDeque::new(),
            used: IndexSet::new(),
            resolving: IndexSet::new(),
        }
    }

    /// Resolve the view of a member type.
    ///
    /// Resolving an array also resolves its element type, and resolving a
    /// constructed generic type also resolves its type arguments. A type
    /// that contains itself that way is a [`DescriptorError::Cycle`].
    pub fn resolve(&mut self, catalog: &TypeCatalog, ty: TypeId) -> Result<ViewId, ViewError> {
        if !self.resolving.insert(ty) {
            return Err(DescriptorError::Cycle(ty).into());
        }
        let result = self.resolve_unguarded(catalog, ty);
        self.resolving.shift_remove(&ty);
        result
    }

    fn resolve_unguarded(
        &mut self,
        catalog: &TypeCatalog,
        ty: TypeId,
    ) -> Result<ViewId, ViewError> {
        let descriptor = catalog.get(ty)?;

        if let Some(id) = self.match_builtin(&descriptor.kind) {
            trace!(ty = %ty, view = self.views[id.0].label(), "builtin match");
            self.used.insert(id);
            if let TypeKind::Array { element, .. } = descriptor.kind {
                self.resolve(catalog, element)?;
            }
            return Ok(id);
        }

        self.resolve_cached(catalog, ty, false)
    }

    /// Resolve a declared root type.
    ///
    /// Roots always get a composite view, even when they are host-managed
    /// objects that would otherwise be exposed as references.
    pub fn resolve_root(&mut self, catalog: &TypeCatalog, ty: TypeId) -> Result<ViewId, ViewError> {
        let id = self.resolve_cached(catalog, ty, true)?;
        if let ViewDefinition::Composite(view) = &mut self.views[id.0] {
            view.root = true;
        }
        Ok(id)
    }

    /// Find the view already resolved for `ty` without creating anything.
    pub fn lookup(&self, catalog: &TypeCatalog, ty: TypeId) -> Result<ViewId, ViewError> {
        let descriptor = catalog.get(ty)?;
        if let Some(id) = self.match_builtin(&descriptor.kind) {
            return Ok(id);
        }
        self.cache
            .get(&catalog.identity(ty)?)
            .copied()
            .ok_or(ViewError::Unresolved(ty))
    }

    /// The marker view for members that cannot be accessed.
    pub fn unsupported(&mut self) -> ViewId {
        self.used.insert(self.unsupported);
        self.unsupported
    }

    /// Look up a definition.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this registry.
    pub fn get(&self, id: ViewId) -> &ViewDefinition {
        &self.views[id.0]
    }

    /// Builtin views in matcher priority order.
    pub fn builtins(&self) -> impl Iterator<Item = (ViewId, &ViewDefinition)> {
        self.builtins.iter().map(|&id| (id, &self.views[id.0]))
    }

    /// Cached views in creation order.
    pub fn cached(&self) -> impl Iterator<Item = (ViewId, &ViewDefinition)> {
        self.cache.values().map(|&id| (id, &self.views[id.0]))
    }

    /// Builtin views handed out at least once, in first-use order.
    pub fn used_builtins(&self) -> impl Iterator<Item = (ViewId, &ViewDefinition)> {
        self.used.iter().map(|&id| (id, &self.views[id.0]))
    }

    /// Whether a builtin view was handed out during resolution.
    pub fn is_used(&self, id: ViewId) -> bool {
        self.used.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Next composite whose members still have to be resolved.
    pub fn next_pending(&mut self) -> Option<ViewId> {
        self.pending.pop_front()
    }

    /// Store the resolved members of a pending composite.
    pub fn complete_composite(&mut self, id: ViewId, members: Vec<MemberView>) {
        if let ViewDefinition::Composite(view) = &mut self.views[id.0] {
            view.members = members;
            view.complete = true;
        }
    }

    fn match_builtin(&self, kind: &TypeKind) -> Option<ViewId> {
        self.builtins
            .iter()
            .copied()
            .find(|id| self.views[id.0].matches(kind))
    }

    fn resolve_cached(
        &mut self,
        catalog: &TypeCatalog,
        ty: TypeId,
        root: bool,
    ) -> Result<ViewId, ViewError> {
        let key = catalog.identity(ty)?;

        let id = match self.cache.get(&key) {
            Some(&id) => id,
            None => {
                let definition = catalog.get(key.definition())?;
                let view = create_definition(key.definition(), definition, root)?;
                let id = ViewId(self.views.len());
                debug!(
                    ty = %definition.full_name(),
                    view = view.label(),
                    root,
                    "created view"
                );

                if matches!(view, ViewDefinition::Composite(_)) {
                    self.pending.push_back(id);
                }
                self.views.push(view);
                self.cache.insert(key, id);
                id
            }
        };

        for &arg in &catalog.get(ty)?.type_arguments {
            self.resolve(catalog, arg)?;
        }

        Ok(id)
    }
}

/// Pick the cached view shape for a type by its kind.
fn create_definition(
    ty: TypeId,
    descriptor: &TypeDescriptor,
    root: bool,
) -> Result<ViewDefinition, ViewError> {
    match &descriptor.kind {
        TypeKind::ExternalObject if !root => Ok(ViewDefinition::ObjectReference { ty }),
        TypeKind::ExternalObject | TypeKind::Composite { .. } => {
            Ok(ViewDefinition::Composite(CompositeView {
                ty,
                root,
                members: Vec::new(),
                complete: false,
            }))
        }
        TypeKind::Enum { underlying } => Ok(ViewDefinition::Enum(EnumView {
            ty,
            underlying: *underlying,
        })),
        other => Err(ViewError::UnexpectedKind {
            name: descriptor.full_name(),
            kind: other.label(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use unityped_ir::{ArrayShape, CompositeShape, EnumWidth, MemberDescriptor};

    use super::*;

    fn composite(name: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            "Game",
            name,
            TypeKind::Composite {
                shape: CompositeShape::Struct,
            },
        )
    }

    #[test]
    fn test_builtin_priority_order() {
        let registry = ViewRegistry::new();
        let order: Vec<_> = registry.builtins().map(|(_, v)| v.clone()).collect();

        assert_eq!(order[0], ViewDefinition::TypeParameter);
        assert_eq!(order[1], ViewDefinition::Array);
        assert_eq!(order[2], ViewDefinition::DirectValue(LeafType::Byte));
        assert_eq!(order.len(), 2 + LeafType::ALL.len());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut catalog = TypeCatalog::new();
        let stats = catalog.insert(composite("Stats"));
        let int = catalog.leaf(LeafType::Int);

        let mut registry = ViewRegistry::new();
        let a = registry.resolve(&catalog, stats).unwrap();
        let b = registry.resolve(&catalog, stats).unwrap();
        let c = registry.resolve(&catalog, int).unwrap();
        let d = registry.resolve(&catalog, int).unwrap();

        assert_eq!(a, b);
        assert_eq!(c, d);
        assert_eq!(registry.cached().count(), 1);
    }

    #[test]
    fn test_self_reference_returns_cached_handle() {
        let mut catalog = TypeCatalog::new();
        let node = catalog.insert(composite("Node"));
        catalog
            .push_member(node, MemberDescriptor::new("next", node))
            .unwrap();

        let mut registry = ViewRegistry::new();
        let first = registry.resolve(&catalog, node).unwrap();
        let pending = registry.next_pending().unwrap();
        assert_eq!(first, pending);

        // still incomplete, yet resolvable
        let again = registry.resolve(&catalog, node).unwrap();
        assert_eq!(first, again);
        assert!(registry.next_pending().is_none());
    }

    #[test]
    fn test_array_element_is_resolved_with_array() {
        let mut catalog = TypeCatalog::new();
        let stats = catalog.insert(composite("Stats"));
        let array = catalog.array_of(stats);

        let mut registry = ViewRegistry::new();
        let array_view = registry.resolve(&catalog, array).unwrap();

        assert_eq!(registry.get(array_view), &ViewDefinition::Array);
        let element = registry.lookup(&catalog, stats).unwrap();
        assert_eq!(element, registry.resolve(&catalog, stats).unwrap());
    }

    #[test]
    fn test_self_containing_array_is_a_cycle() {
        let mut catalog = TypeCatalog::new();
        let array = catalog.insert(TypeDescriptor::new(
            "",
            "Array",
            TypeKind::Array {
                element: TypeId::new(0),
                shape: ArrayShape::Array,
            },
        ));

        let mut registry = ViewRegistry::new();
        let err = registry.resolve(&catalog, array).unwrap_err();
        assert!(matches!(
            err,
            ViewError::Descriptor(DescriptorError::Cycle(id)) if id == array
        ));

        // the guard is released after a failed resolution
        let err = registry.resolve(&catalog, array).unwrap_err();
        assert!(matches!(err, ViewError::Descriptor(DescriptorError::Cycle(_))));
    }

    #[test]
    fn test_constructed_type_as_its_own_argument_is_a_cycle() {
        let mut catalog = TypeCatalog::new();
        let boxed = catalog.insert(composite("Box").with_type_parameters(["T"]));
        let mut looped = composite("Box");
        looped.definition = Some(boxed);
        looped.type_arguments = vec![TypeId::new(1)];
        let looped = catalog.insert(looped);

        let mut registry = ViewRegistry::new();
        let err = registry.resolve(&catalog, looped).unwrap_err();
        assert!(matches!(
            err,
            ViewError::Descriptor(DescriptorError::Cycle(id)) if id == looped
        ));
    }

    #[test]
    fn test_constructed_types_share_the_definition_view() {
        let mut catalog = TypeCatalog::new();
        let int = catalog.leaf(LeafType::Int);
        let float = catalog.leaf(LeafType::Float);
        let pair = catalog.insert(composite("Pair").with_type_parameters(["A", "B"]));
        let a = catalog.construct(pair, vec![int, float]).unwrap();
        let b = catalog.construct(pair, vec![float, float]).unwrap();

        let mut registry = ViewRegistry::new();
        let va = registry.resolve(&catalog, a).unwrap();
        let vb = registry.resolve(&catalog, b).unwrap();

        assert_eq!(va, vb);
        match registry.get(va) {
            ViewDefinition::Composite(view) => assert_eq!(view.ty, pair),
            other => panic!("expected composite, got {other:?}"),
        }
        let used: Vec<_> = registry.used_builtins().map(|(_, v)| v.clone()).collect();
        assert!(used.contains(&ViewDefinition::DirectValue(LeafType::Int)));
        assert!(used.contains(&ViewDefinition::DirectValue(LeafType::Float)));
    }

    #[test]
    fn test_external_object_member_vs_root() {
        let mut catalog = TypeCatalog::new();
        let texture = catalog.insert(TypeDescriptor::new(
            "UnityEngine",
            "Texture2D",
            TypeKind::ExternalObject,
        ));
        let player = catalog.insert(TypeDescriptor::new(
            "Game",
            "Player",
            TypeKind::ExternalObject,
        ));

        let mut registry = ViewRegistry::new();
        let root = registry.resolve_root(&catalog, player).unwrap();
        let member = registry.resolve(&catalog, texture).unwrap();

        assert!(matches!(registry.get(root), ViewDefinition::Composite(v) if v.root));
        assert_eq!(
            registry.get(member),
            &ViewDefinition::ObjectReference { ty: texture }
        );
        assert!(registry.get(member).is_direct_access());

        // a member referencing a root reuses the root's view
        assert_eq!(registry.resolve(&catalog, player).unwrap(), root);
    }

    #[test]
    fn test_enum_view_keeps_width() {
        let mut catalog = TypeCatalog::new();
        let mode = catalog.insert(TypeDescriptor::new(
            "Game",
            "Mode",
            TypeKind::Enum {
                underlying: EnumWidth::U8,
            },
        ));

        let mut registry = ViewRegistry::new();
        let id = registry.resolve(&catalog, mode).unwrap();
        assert_eq!(
            registry.get(id),
            &ViewDefinition::Enum(EnumView {
                ty: mode,
                underlying: EnumWidth::U8
            })
        );
        assert!(registry.next_pending().is_none());
    }

    #[test]
    fn test_create_definition_rejects_unexpected_kind() {
        let descriptor = TypeDescriptor::new(
            "",
            "Int",
            TypeKind::Primitive {
                leaf: LeafType::Int,
            },
        );
        let err = create_definition(TypeId::new(0), &descriptor, false).unwrap_err();
        assert!(matches!(err, ViewError::UnexpectedKind { kind: "primitive", .. }));
    }

    #[test]
    fn test_lookup_of_unresolved_type_fails() {
        let mut catalog = TypeCatalog::new();
        let stats = catalog.insert(composite("Stats"));

        let registry = ViewRegistry::new();
        assert!(matches!(
            registry.lookup(&catalog, stats),
            Err(ViewError::Unresolved(id)) if id == stats
        ));
    }

    #[test]
    fn test_dangling_handle_is_a_descriptor_error() {
        let catalog = TypeCatalog::new();
        let mut registry = ViewRegistry::new();
        assert!(matches!(
            registry.resolve(&catalog, TypeId::new(9)),
            Err(ViewError::Descriptor(_))
        ));
    }
}
