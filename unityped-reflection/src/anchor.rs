//! Locating the Unity project from the package's anchor source file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Assembly whose compilation carries the reflection unit.
pub const RUNTIME_ASSEMBLY: &str = "UniTyped";

/// Whether the reflection unit belongs to `assembly`.
///
/// The match is exact: only the compilation named `required` emits it.
pub fn runs_for_assembly(assembly: &str, required: &str) -> bool {
    assembly == required
}

fn parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Compute the project root from the path of the anchor source file.
///
/// The anchor lives at `<package>/Runtime/Scripts/<file>`, with the package
/// either under `Packages/` (embedded) or `Library/PackageCache/` (installed).
/// A package referenced from elsewhere on disk cannot be traced back and is
/// reported as an error.
pub fn project_root_from_anchor(anchor: &Path) -> Result<PathBuf> {
    let packages = parent(anchor)
        .and_then(parent)
        .and_then(parent)
        .and_then(parent)
        .ok_or_else(|| Error::project_root(anchor, "anchor path is too shallow"))?;

    let name = packages.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let root = match name {
        "Packages" => parent(packages),
        "PackageCache" => parent(packages).and_then(parent),
        other => {
            return Err(Error::project_root(
                anchor,
                format!("unexpected package container `{other}`"),
            ));
        }
    };

    root.map(Path::to_path_buf)
        .ok_or_else(|| Error::project_root(anchor, "package container has no parent"))
}
