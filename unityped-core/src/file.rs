use std::path::Path;

use eyre::Result;

/// How to handle a generated file that already exists on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always rewrite the file
    Always,
    /// Only rewrite when the content differs (avoids host reimports)
    #[default]
    IfChanged,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Write a generated unit according to the overwrite rule.
pub fn write_generated(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    match overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfChanged => {
            if path.exists() && std::fs::read_to_string(path)? == content {
                Ok(WriteResult::Unchanged)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}
