//! Valuecast Codegen Library
//!
//! Scaffolds new value object source files. The main entry point is
//! [`scaffold`], which validates the requested name, renders the template
//! with [`ValueObjectWriter`] and writes it into the output directory.

pub mod definition;
pub mod error;
pub mod naming;
pub mod scaffold;
pub mod writer;

pub use definition::ValueObjectDefinition;
pub use error::CodegenError;
pub use scaffold::{scaffold, ScaffoldOptions, Scaffolded};
pub use writer::ValueObjectWriter;
