//! Error types for codegen

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CodegenError {
    Io(std::io::Error),
    /// `--raw` is not a Rust type
    Parse(String),
    /// Not an UpperCamelCase identifier
    InvalidName(String),
    /// The target file exists and overwriting was not requested
    AlreadyExists(PathBuf),
    Generation(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Io(err) => write!(f, "I/O error: {}", err),
            CodegenError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CodegenError::InvalidName(name) => write!(
                f,
                "Invalid value object name '{}': expected an UpperCamelCase identifier",
                name
            ),
            CodegenError::AlreadyExists(_) => write!(f, "Value Object already exists!"),
            CodegenError::Generation(msg) => write!(f, "Generation error: {}", msg),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodegenError {
    fn from(err: std::io::Error) -> Self {
        CodegenError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
