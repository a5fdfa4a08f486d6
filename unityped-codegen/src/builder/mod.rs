//! Indented text rendering shared by every emitted C# unit.
//!
//! Syntax nodes implement [`Renderable`] by producing [`CodeFragment`]s;
//! [`CodeBuilder`] turns fragments into text with the configured
//! [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
