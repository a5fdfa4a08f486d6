//! View pipeline entry point.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::{debug, warn};
use unityped_core::IdentifierSet;
use unityped_ir::{MemberType, TypeCatalog, TypeId, TypeKind};

use crate::generation::SourceUnit;
use crate::views::emit::{emit_view, reserved_member_names, support_units};
use crate::views::naming::view_struct_name;
use crate::views::{MemberView, ViewDefinition, ViewError, ViewId, ViewOptions};
use crate::{Diagnostic, GenerationContext, Phase};

/// Result of a view generation run.
#[derive(Debug, Default)]
pub struct ViewOutput {
    /// Support units first, then one unit per view in dependency order.
    pub units: Vec<SourceUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// Non-global namespaces of the types views were emitted for.
    pub target_namespaces: IndexSet<String>,
}

/// Generate views for `roots` and everything their members reach.
///
/// Roots are registered before any member is resolved, so a root that is
/// also referenced as a member keeps its root composite view. Member
/// bodies are completed from the registry worklist rather than through
/// recursion, which lets self-referential types terminate.
///
/// Members whose type cannot be described or resolved become accessors of
/// the unsupported marker and produce a warning. An unexpected type kind
/// aborts the run.
#[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
pub fn generate_views(
    catalog: &TypeCatalog,
    roots: &[TypeId],
    options: &ViewOptions,
) -> Result<ViewOutput, ViewError> {
    let mut ctx = GenerationContext::new(catalog, options);

    for error in catalog.validate() {
        warn!(%error, "type catalog violates its contract");
        ctx.report(Diagnostic::error(Phase::Catalog, error.to_string()));
    }

    let mut root_views = Vec::with_capacity(roots.len());
    for &root in roots {
        match ctx.registry.resolve_root(catalog, root) {
            Ok(id) => root_views.push(id),
            Err(ViewError::Descriptor(error)) => {
                warn!(%error, "skipping root");
                ctx.report(
                    Diagnostic::error(Phase::Resolve, error.to_string()).at(root.to_string()),
                );
            }
            Err(error) => return Err(error),
        }
    }

    while let Some(id) = ctx.registry.next_pending() {
        let members = resolve_members(&mut ctx, id)?;
        ctx.registry.complete_composite(id, members);
    }

    let order = emission_order(&ctx, &root_views)?;
    debug!(views = order.len(), "resolution complete");

    let mut units = if options.runtime_support {
        support_units(&ctx)
    } else {
        Vec::new()
    };

    for id in order {
        if let Some(ty) = ctx.registry.get(id).served_type() {
            let namespace = &catalog.get(ty)?.namespace;
            if !namespace.is_empty() {
                ctx.target_namespaces.insert(namespace.clone());
            }
        }
        if let Some(unit) = emit_view(&ctx, id)? {
            units.push(unit);
        }
    }

    Ok(ViewOutput {
        units,
        diagnostics: ctx.diagnostics,
        target_namespaces: ctx.target_namespaces,
    })
}

/// Resolve the eligible members of a pending composite.
fn resolve_members(
    ctx: &mut GenerationContext<'_>,
    id: ViewId,
) -> Result<Vec<MemberView>, ViewError> {
    let catalog = ctx.catalog;
    let ViewDefinition::Composite(view) = ctx.registry.get(id) else {
        return Ok(Vec::new());
    };
    let owner = catalog.get(view.ty)?;

    let view_name = view_struct_name(owner);
    let mut idents = IdentifierSet::new();
    for reserved in reserved_member_names(&view_name) {
        idents.reserve(reserved);
    }

    let mut members = Vec::new();
    for member in owner.members.iter().filter(|m| m.is_eligible()) {
        let ident = idents.insert(&member.name);

        let resolved = match &member.ty {
            MemberType::Undescribed { display, reason } => {
                Err(format!("type '{display}' cannot be described: {reason}"))
            }
            MemberType::Described(ty) => match catalog.open_external_object(*ty) {
                // reference views take value types, a view parameter cannot stand in
                Some(open) => Err(format!(
                    "generic host object type '{}' is not supported",
                    catalog.get(open)?.full_name()
                )),
                None => match ctx.registry.resolve(catalog, *ty) {
                    Ok(view) => Ok(view),
                    Err(ViewError::Descriptor(error)) => Err(error.to_string()),
                    Err(error) => return Err(error),
                },
            },
        };

        let member_view = match resolved {
            Ok(view) => MemberView {
                name: member.name.clone(),
                ident,
                view,
                ty: member.ty.type_id(),
                nested: member.directives.force_nested
                    || !ctx.registry.get(view).is_direct_access(),
                unsupported: None,
            },
            Err(reason) => {
                let location = format!("{}.{}", owner.full_name(), member.name);
                warn!(member = %location, %reason, "member is not supported");
                ctx.report(Diagnostic::warning(Phase::Resolve, reason.as_str()).at(location));
                MemberView {
                    name: member.name.clone(),
                    ident,
                    view: ctx.registry.unsupported(),
                    ty: member.ty.type_id(),
                    nested: true,
                    unsupported: Some(reason),
                }
            }
        };
        members.push(member_view);
    }

    Ok(members)
}

/// Post-order walk from the roots: every view comes after the views its
/// members use. Views not reachable from a root follow in creation order.
fn emission_order(ctx: &GenerationContext<'_>, roots: &[ViewId]) -> Result<Vec<ViewId>, ViewError> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(ViewId, bool)> = roots.iter().rev().map(|&id| (id, false)).collect();

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            order.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }

        stack.push((id, true));
        let deps = dependencies(ctx, id)?;
        for dep in deps.into_iter().rev() {
            if !visited.contains(&dep) {
                stack.push((dep, false));
            }
        }
    }

    for (id, _) in ctx.registry.cached() {
        if visited.insert(id) {
            order.push(id);
        }
    }

    Ok(order)
}

/// Cached views a view's members refer to, in member order.
fn dependencies(ctx: &GenerationContext<'_>, id: ViewId) -> Result<Vec<ViewId>, ViewError> {
    let mut deps = Vec::new();
    if let ViewDefinition::Composite(view) = ctx.registry.get(id) {
        for member in view.members.iter().filter(|m| m.unsupported.is_none()) {
            if let Some(ty) = member.ty {
                collect_cached(ctx, ty, &mut HashSet::new(), &mut deps)?;
            }
        }
    }
    Ok(deps)
}

fn collect_cached(
    ctx: &GenerationContext<'_>,
    ty: TypeId,
    seen: &mut HashSet<TypeId>,
    out: &mut Vec<ViewId>,
) -> Result<(), ViewError> {
    if !seen.insert(ty) {
        return Ok(());
    }
    let descriptor = ctx.catalog.get(ty)?;
    let view = ctx.registry.lookup(ctx.catalog, ty)?;
    if !ctx.registry.get(view).is_builtin() {
        out.push(view);
    }
    if let TypeKind::Array { element, .. } = descriptor.kind {
        collect_cached(ctx, element, seen, out)?;
    }
    for &arg in &descriptor.type_arguments {
        collect_cached(ctx, arg, seen, out)?;
    }
    Ok(())
}
