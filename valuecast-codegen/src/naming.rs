//! Name validation and file naming

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CodegenError, Result};

struct Patterns {
    upper_camel: Regex,
    /// `HTTPCode` -> `HTTP_Code`
    acronym: Regex,
    /// `emailAddress` -> `email_Address`
    word: Regex,
}

static PATTERNS: Lazy<std::result::Result<Patterns, regex::Error>> = Lazy::new(|| {
    Ok(Patterns {
        upper_camel: Regex::new(r"^[A-Z][A-Za-z0-9]*$")?,
        acronym: Regex::new(r"([A-Z]+)([A-Z][a-z])")?,
        word: Regex::new(r"([a-z0-9])([A-Z])")?,
    })
});

fn patterns() -> Result<&'static Patterns> {
    PATTERNS
        .as_ref()
        .map_err(|e| CodegenError::Generation(format!("Invalid regex: {}", e)))
}

/// Check that `name` is an UpperCamelCase identifier.
pub fn validate_name(name: &str) -> Result<()> {
    if patterns()?.upper_camel.is_match(name) {
        Ok(())
    } else {
        Err(CodegenError::InvalidName(name.to_string()))
    }
}

/// `EmailAddress` -> `email_address`
pub fn snake_case(name: &str) -> Result<String> {
    let patterns = patterns()?;
    let split = patterns.acronym.replace_all(name, "${1}_${2}");
    let split = patterns.word.replace_all(&split, "${1}_${2}");
    Ok(split.to_lowercase())
}

/// File name the value object `name` is written to.
pub fn file_name(name: &str) -> Result<String> {
    Ok(format!("{}.rs", snake_case(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Gender").is_ok());
        assert!(validate_name("EmailAddress").is_ok());
        assert!(validate_name("Iso3166Code").is_ok());

        for bad in ["gender", "email_address", "Email-Address", "", "1Gender", "Gen der"] {
            assert!(
                matches!(validate_name(bad), Err(CodegenError::InvalidName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Gender").unwrap(), "gender");
        assert_eq!(snake_case("EmailAddress").unwrap(), "email_address");
        assert_eq!(snake_case("HTTPStatus").unwrap(), "http_status");
        assert_eq!(snake_case("Iso3166Code").unwrap(), "iso3166_code");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("PostalCode").unwrap(), "postal_code.rs");
    }
}
