//! Collecting generated units and writing them to disk.
//!
//! ```
//! use unityped_codegen::generation::{FileEntry, FileRegistry};
//!
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::view("UniTyped.Generated.PlayerView.g.cs", "// view"));
//! registry.register(FileEntry::support("UniTyped.Editor.ISerializedPropertyView.g.cs", "// support"));
//!
//! let first = registry.entries().next().unwrap();
//! assert_eq!(first.path, "UniTyped.Editor.ISerializedPropertyView.g.cs");
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::{debug, trace};
use unityped_core::{Overwrite, WriteResult, write_generated};

use super::SourceUnit;

/// Category of generated file, determining write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileCategory {
    /// Runtime support types (accessor interface, builtin views).
    Support,
    /// Views generated for annotated types.
    View,
    /// Project metadata enumerations.
    Reflection,
}

/// A file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
    pub overwrite: Overwrite,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: Overwrite::default(),
        }
    }

    pub fn support(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Support)
    }

    pub fn view(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::View)
    }

    pub fn reflection(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Reflection)
    }

    /// Entry for a unit, placed at `{hint}{extension}` with the `.g.cs`
    /// suffix of the hint replaced by `extension`.
    pub fn from_unit(unit: &SourceUnit, extension: &str) -> Self {
        let stem = unit.hint.strip_suffix(".g.cs").unwrap_or(&unit.hint);
        Self::new(format!("{stem}{extension}"), unit.content.clone(), unit.category)
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file below `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);
        write_generated(&path, &self.content, self.overwrite)
            .wrap_err_with(|| format!("failed to write {}", path.display()))
    }
}

/// Registry of generated files, written in category order:
/// Support -> View -> Reflection.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// All entries, sorted by category (stable within a category).
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry below `base`.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    trace!(path = %entry.path, "written");
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    stats.unchanged += 1;
                }
            }
        }

        debug!(
            written = stats.written,
            unchanged = stats.unchanged,
            "generated files written"
        );
        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    /// Files whose content on disk already matched.
    pub unchanged: usize,
    pub written_paths: Vec<String>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}
