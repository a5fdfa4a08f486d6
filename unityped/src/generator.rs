use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use indexmap::IndexSet;
use tracing::{debug, warn};
use unityped_codegen::{
    Diagnostic, FileEntry, FileRegistry, Phase, SourceUnit, WriteStats, generate_views,
};
use unityped_ir::{TypeCatalog, TypeId};
use unityped_reflection::{generate_reflection, runs_for_assembly};

use crate::config::Config;

/// Files and findings of one generation run, not yet written.
#[derive(Debug)]
pub struct GenerateOutput {
    pub files: FileRegistry,
    pub diagnostics: Vec<Diagnostic>,
    /// Namespaces of the types views were generated for.
    pub target_namespaces: IndexSet<String>,
}

/// Result of a generation run that wrote its files.
#[derive(Debug)]
pub struct GenerateResult {
    pub stats: WriteStats,
    pub diagnostics: Vec<Diagnostic>,
    pub target_namespaces: IndexSet<String>,
}

/// Runs the view and reflection pipelines for one compilation.
///
/// The pipelines are independent: a reflection failure is reported as a
/// diagnostic and never affects the views.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
    assembly: Option<String>,
    anchor: Option<PathBuf>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            assembly: None,
            anchor: None,
        }
    }

    /// Name of the assembly being compiled.
    pub fn assembly(mut self, name: impl Into<String>) -> Self {
        self.assembly = Some(name.into());
        self
    }

    /// Path of the anchor source file, overriding `reflection.anchor`.
    pub fn anchor(mut self, path: impl Into<PathBuf>) -> Self {
        self.anchor = Some(path.into());
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every file for `roots` without touching the disk.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn preview(&self, catalog: &TypeCatalog, roots: &[TypeId]) -> Result<GenerateOutput> {
        let views = generate_views(catalog, roots, &self.config.view_options())
            .wrap_err("failed to generate views")?;

        let mut diagnostics = views.diagnostics;
        let mut files = FileRegistry::new();
        let extension = &self.config.output.extension;
        files.register_all(
            views
                .units
                .iter()
                .map(|unit| FileEntry::from_unit(unit, extension)),
        );

        if let Some(unit) = self.reflection(&mut diagnostics) {
            files.register(FileEntry::from_unit(&unit, extension));
        }

        debug!(
            files = files.len(),
            diagnostics = diagnostics.len(),
            "generation complete"
        );
        Ok(GenerateOutput {
            files,
            diagnostics,
            target_namespaces: views.target_namespaces,
        })
    }

    /// Generate and write every file below `base`/`output.dir`.
    pub fn generate(
        &self,
        catalog: &TypeCatalog,
        roots: &[TypeId],
        base: &Path,
    ) -> Result<GenerateResult> {
        let output = self.preview(catalog, roots)?;
        let dir = base.join(&self.config.output.dir);
        let stats = output
            .files
            .write_all(&dir)
            .wrap_err_with(|| format!("failed to write generated files to {}", dir.display()))?;

        Ok(GenerateResult {
            stats,
            diagnostics: output.diagnostics,
            target_namespaces: output.target_namespaces,
        })
    }

    fn reflection(&self, diagnostics: &mut Vec<Diagnostic>) -> Option<SourceUnit> {
        let options = &self.config.reflection;
        if !options.enabled {
            return None;
        }

        let Some(assembly) = &self.assembly else {
            debug!("no assembly name, skipping project reflection");
            return None;
        };
        if !runs_for_assembly(assembly, &options.required_assembly) {
            debug!(%assembly, "project reflection belongs to another assembly");
            return None;
        }

        let Some(anchor) = self.anchor.as_ref().or(options.anchor.as_ref()) else {
            diagnostics.push(Diagnostic::error(
                Phase::Reflection,
                "no anchor path to locate the project from",
            ));
            return None;
        };

        match generate_reflection(anchor, options, self.config.output.indent) {
            Ok(unit) => Some(unit),
            Err(error) => {
                let message = error_chain(&*error);
                warn!(%message, "project reflection failed");
                diagnostics.push(
                    Diagnostic::error(Phase::Reflection, message)
                        .at(anchor.display().to_string()),
                );
                None
            }
        }
    }
}

/// `error: cause: cause` on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
