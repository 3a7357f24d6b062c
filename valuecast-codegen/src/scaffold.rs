//! Writing scaffolded value objects to disk

use std::fs;
use std::path::PathBuf;

use crate::definition::ValueObjectDefinition;
use crate::error::{CodegenError, Result};
use crate::writer::ValueObjectWriter;

/// What to scaffold and where
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub name: String,
    /// Raw value type, as Rust source
    pub raw: String,
    pub output: PathBuf,
    /// Overwrite an existing file
    pub force: bool,
}

impl ScaffoldOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: "String".to_string(),
            output: PathBuf::from("src/value_objects"),
            force: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub path: PathBuf,
    /// An existing file was replaced
    pub overwritten: bool,
}

/// Generate the value object described by `options` into its output directory.
///
/// Nothing is written when the target exists and `force` is not set.
pub fn scaffold(options: &ScaffoldOptions) -> Result<Scaffolded> {
    let definition = ValueObjectDefinition::parse(&options.name, &options.raw)?;
    let path = options.output.join(definition.file_name()?);

    let overwritten = path.exists();
    if overwritten && !options.force {
        return Err(CodegenError::AlreadyExists(path));
    }

    let code = ValueObjectWriter::new().generate_code(&definition)?;
    fs::create_dir_all(&options.output)?;
    fs::write(&path, code)?;
    log::debug!("wrote {} ({} bytes)", path.display(), fs::metadata(&path)?.len());

    Ok(Scaffolded { path, overwritten })
}
