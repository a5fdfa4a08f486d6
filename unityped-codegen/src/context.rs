//! Per-run state of the view pipeline.

use indexmap::IndexSet;
use unityped_ir::TypeCatalog;

use crate::{Diagnostic, ViewOptions, ViewRegistry};

/// Everything one view generation run reads and accumulates.
///
/// A context is created per invocation and dropped with it; nothing is
/// shared between runs.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    pub catalog: &'a TypeCatalog,
    pub options: &'a ViewOptions,
    pub registry: ViewRegistry,
    pub diagnostics: Vec<Diagnostic>,
    /// Originating namespaces of every emitted view, in first-seen order.
    pub target_namespaces: IndexSet<String>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(catalog: &'a TypeCatalog, options: &'a ViewOptions) -> Self {
        Self {
            catalog,
            options,
            registry: ViewRegistry::new(),
            diagnostics: Vec::new(),
            target_namespaces: IndexSet::new(),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
