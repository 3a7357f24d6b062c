//! Value object definition structures

use syn::{Ident, Type};

use crate::error::{CodegenError, Result};
use crate::naming;

/// A value object to scaffold
#[derive(Debug, Clone)]
pub struct ValueObjectDefinition {
    pub name: Ident,
    /// Type of the raw value
    pub raw: Type,
}

impl ValueObjectDefinition {
    /// Parse a definition from the command line form.
    pub fn parse(name: &str, raw: &str) -> Result<Self> {
        naming::validate_name(name)?;
        let name = syn::parse_str::<Ident>(name).map_err(|_| CodegenError::InvalidName(name.to_string()))?;
        let raw = syn::parse_str::<Type>(raw)
            .map_err(|e| CodegenError::Parse(format!("'{}' is not a Rust type: {}", raw, e)))?;
        Ok(Self { name, raw })
    }

    /// File name the definition is written to, e.g. `email_address.rs`.
    pub fn file_name(&self) -> Result<String> {
        naming::file_name(&self.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    #[test]
    fn test_parse() {
        let def = ValueObjectDefinition::parse("Gender", "String").unwrap();
        assert_eq!(def.name, "Gender");
        assert_eq!(def.raw.to_token_stream().to_string(), "String");
        assert_eq!(def.file_name().unwrap(), "gender.rs");
    }

    #[test]
    fn test_parse_generic_raw_type() {
        let def = ValueObjectDefinition::parse("Tags", "Vec<u8>").unwrap();
        assert_eq!(def.raw.to_token_stream().to_string(), "Vec < u8 >");
    }

    #[test]
    fn test_rejects_keyword_name() {
        // Matches the pattern but is not a usable identifier
        assert!(matches!(
            ValueObjectDefinition::parse("Self", "String"),
            Err(CodegenError::InvalidName(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_raw_type() {
        assert!(matches!(
            ValueObjectDefinition::parse("Gender", "not a type"),
            Err(CodegenError::Parse(_))
        ));
    }
}
