//! Generated units and their file layout.

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry, WriteStats};

/// One generated C# compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    /// Unique hint name, e.g. `UniTyped.Generated.Game.PlayerView.g.cs`.
    pub hint: String,
    /// Namespace the unit declares its type in.
    pub namespace: String,
    pub content: String,
    pub category: FileCategory,
}
