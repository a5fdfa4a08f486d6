//! Type descriptor model for the UniTyped accessor generator.
//!
//! This crate is the boundary between the host's type discovery (which
//! finds annotated data types and their serialized members) and the view
//! engine. Discovery fills a [`TypeCatalog`]; the engine only ever reads it.
//!
//! # Architecture
//!
//! ```text
//! type discovery → TypeCatalog (unityped-ir) → view registry → emitted units
//! ```
//!
//! Descriptors are addressed by [`TypeId`] handles. Constructed generic
//! types point at their unbound definition, and [`TypeCatalog::identity`]
//! folds them onto it so that every instantiation shares one view.

mod catalog;
mod descriptor;
mod error;
mod types;

pub use catalog::TypeCatalog;
pub use descriptor::{Directives, MemberDescriptor, MemberType, Storage, TypeDescriptor, Visibility};
pub use error::DescriptorError;
pub use types::{ArrayShape, CompositeShape, EnumWidth, LeafType, TypeId, TypeKey, TypeKind};
