use thiserror::Error;

use crate::TypeId;

/// Errors reported by the type descriptor boundary.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("unknown type handle {0}")]
    UnknownType(TypeId),

    #[error("member '{owner}.{member}' carries a directive but its type cannot be described: {reason}")]
    UndescribedDirectiveTarget {
        owner: String,
        member: String,
        reason: String,
    },

    #[error("'{name}' expects {expected} type argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("'{name}' is constructed from another constructed type")]
    NestedConstruction { name: String },

    #[error("type {0} contains itself through its element or type arguments")]
    Cycle(TypeId),

    #[error("failed to read type catalog")]
    Json(#[from] serde_json::Error),
}
