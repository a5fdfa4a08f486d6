//! View resolution and emission.
//!
//! A *view* is the generated accessor struct for one type. Resolution
//! picks the view for a type in a fixed order:
//!
//! 1. builtin matchers: generic type parameter, array, each leaf type
//! 2. the cache of views created for enum, composite and host-managed
//!    object types, keyed by type identity (constructed generic types
//!    share the view of their definition)
//! 3. a new cached view chosen by the type's kind

mod definition;
mod error;
mod leaf;
mod options;
mod registry;

pub mod emit;
pub mod naming;

pub use definition::{CompositeView, EnumView, MemberView, ViewDefinition, ViewId};
pub use error::ViewError;
pub use leaf::{LeafBinding, binding, enum_storage};
pub use options::ViewOptions;
pub use registry::ViewRegistry;
