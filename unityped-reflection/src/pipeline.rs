use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use unityped_codegen::SourceUnit;
use unityped_codegen::builder::Indent;

use crate::anchor::{RUNTIME_ASSEMBLY, project_root_from_anchor};
use crate::document::ProjectMetadata;
use crate::emit::reflection_unit;
use crate::error::Result;

/// Settings of the reflection pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReflectionOptions {
    pub enabled: bool,
    /// Only the compilation of this assembly emits the reflection unit.
    pub required_assembly: String,
    /// Path of the anchor source file, when the build tool does not supply it.
    pub anchor: Option<PathBuf>,
    /// Settings document, relative to the project root.
    pub settings: PathBuf,
    pub namespace: String,
}

impl Default for ReflectionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            required_assembly: RUNTIME_ASSEMBLY.to_string(),
            anchor: None,
            settings: PathBuf::from("ProjectSettings/TagManager.asset"),
            namespace: "UniTyped.Reflection".to_string(),
        }
    }
}

/// Locate the project from `anchor`, read its settings and render the
/// reflection unit.
#[tracing::instrument(level = "debug", skip_all, fields(anchor = %anchor.display()))]
pub fn generate_reflection(
    anchor: &Path,
    options: &ReflectionOptions,
    indent: Indent,
) -> Result<SourceUnit> {
    let root = project_root_from_anchor(anchor)?;
    let settings = root.join(&options.settings);
    debug!(settings = %settings.display(), "loading project settings");

    let metadata = ProjectMetadata::from_file(&settings)?;
    Ok(reflection_unit(&metadata, &options.namespace, indent))
}
