use thiserror::Error;
use unityped_ir::{DescriptorError, TypeId};

/// Fatal errors of the view pipeline.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("cannot create a view for '{name}': unexpected {kind} type")]
    UnexpectedKind { name: String, kind: &'static str },

    #[error("type {0} was never resolved to a view")]
    Unresolved(TypeId),
}
