//! View resolution and C# emission for UniTyped.
//!
//! Given a [`TypeCatalog`](unityped_ir::TypeCatalog) and a set of root
//! types, [`generate_views`] resolves an accessor view for every type the
//! roots reach and renders one C# unit per view, plus the runtime support
//! units the views build on.

pub mod builder;
pub mod csharp;
pub mod generation;
pub mod views;

mod context;
mod diagnostic;
mod driver;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Phase, Severity};
pub use driver::{ViewOutput, generate_views};
pub use generation::{FileCategory, FileEntry, FileRegistry, SourceUnit, WriteStats};
pub use views::{ViewDefinition, ViewError, ViewId, ViewOptions, ViewRegistry};
