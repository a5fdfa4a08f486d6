//! Project metadata reflection for UniTyped.
//!
//! Reads the tags, layers and sorting layers declared in a Unity project's
//! `TagManager.asset` and renders them as C# enums and lookup tables. The
//! project is found from the path of an anchor source file shipped inside
//! the UniTyped package.

mod anchor;
mod document;
mod emit;
mod error;
mod pipeline;

pub use anchor::{RUNTIME_ASSEMBLY, project_root_from_anchor, runs_for_assembly};
pub use document::{Layer, ProjectMetadata, SortingLayer};
pub use emit::reflection_unit;
pub use error::{Error, Result};
pub use pipeline::{ReflectionOptions, generate_reflection};
