//! Typed `SerializedProperty` accessors for Unity.
//!
//! UniTyped turns a catalog of annotated data types into C# view structs
//! that wrap `UnityEditor.SerializedProperty` with typed members, and
//! reflects the project's tags, layers and sorting layers into enums.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use unityped::{Config, Generator, TypeCatalog, TypeKind};
//!
//! # fn main() -> eyre::Result<()> {
//! let config = Config::from_file("unityped.toml")?;
//! let catalog = TypeCatalog::from_json(&std::fs::read_to_string("types.json")?)?;
//! let roots: Vec<_> = catalog
//!     .iter()
//!     .filter(|(_, ty)| matches!(ty.kind, TypeKind::ExternalObject))
//!     .map(|(id, _)| id)
//!     .collect();
//!
//! let result = Generator::new(config)
//!     .assembly("UniTyped")
//!     .anchor("Packages/com.ruccho.unityped/Runtime/Scripts/ProjectAnchor.cs")
//!     .generate(&catalog, &roots, Path::new("."))?;
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod generator;

pub use config::{CONFIG_FILE, Config, OutputConfig};
pub use error::{Error, Result};
pub use generator::{GenerateOutput, GenerateResult, Generator};
pub use unityped_codegen::{Diagnostic, Phase, Severity, ViewOptions, WriteStats};
pub use unityped_ir::{TypeCatalog, TypeId, TypeKind};
pub use unityped_reflection::ReflectionOptions;
