//! Core utilities and types for the UniTyped accessor generator.
//!
//! This crate provides the identifier and literal helpers shared by the
//! view engine and the project reflection generator, plus the primitives
//! used to write generated source units to disk.

mod file;
mod ident;

// File operations
pub use file::{Overwrite, WriteResult, write_file, write_generated};
// Identifier and literal helpers
pub use ident::{
    IdentifierSet, is_csharp_keyword, is_valid_identifier, to_identifier, to_string_literal,
    to_verbatim_literal,
};
