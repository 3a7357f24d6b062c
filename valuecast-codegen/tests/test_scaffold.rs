//! Tests for scaffolding value objects to disk
//!
//! Generated code is compared with whitespace removed so the assertions hold
//! whether or not rustfmt is installed.

use std::fs;

use tempfile::TempDir;
use valuecast_codegen::{scaffold, CodegenError, ScaffoldOptions, Scaffolded};

fn options(dir: &TempDir, name: &str) -> ScaffoldOptions {
    ScaffoldOptions {
        output: dir.path().join("value_objects"),
        ..ScaffoldOptions::new(name)
    }
}

fn squash(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_creates_file_and_directory() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir, "EmailAddress");

    let scaffolded = scaffold(&options).unwrap();
    assert_eq!(
        scaffolded,
        Scaffolded {
            path: dir.path().join("value_objects").join("email_address.rs"),
            overwritten: false,
        }
    );

    let code = squash(&fs::read_to_string(&scaffolded.path).unwrap());
    assert!(code.contains("pubstructEmailAddress{value:String,}"));
    assert!(code.contains("implEmailAddress{pubfnnew(value:String)->Result<Self,ValidationError>{Ok(Self{value})}}"));
}

#[test]
fn test_custom_raw_type() {
    let dir = TempDir::new().unwrap();
    let options = ScaffoldOptions {
        raw: "i32".to_string(),
        ..options(&dir, "Age")
    };

    let scaffolded = scaffold(&options).unwrap();
    let code = squash(&fs::read_to_string(scaffolded.path).unwrap());
    assert!(code.contains("pubstructAge{value:i32,}"));
    assert!(code.contains("pubfnnew(value:i32)"));
}

#[test]
fn test_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir, "Gender");
    let path = scaffold(&options).unwrap().path;

    fs::write(&path, "// hand-written validation").unwrap();

    let err = scaffold(&options).unwrap_err();
    assert!(matches!(err, CodegenError::AlreadyExists(ref existing) if *existing == path));
    assert_eq!(err.to_string(), "Value Object already exists!");
    assert_eq!(fs::read_to_string(&path).unwrap(), "// hand-written validation");
}

#[test]
fn test_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let mut options = options(&dir, "Gender");
    let path = scaffold(&options).unwrap().path;
    fs::write(&path, "// stale").unwrap();

    options.force = true;
    let scaffolded = scaffold(&options).unwrap();
    assert!(scaffolded.overwritten);
    assert!(squash(&fs::read_to_string(&path).unwrap()).contains("pubstructGender"));
}

#[test]
fn test_invalid_name_writes_nothing() {
    let dir = TempDir::new().unwrap();

    for name in ["gender", "Postal_Code", "9Lives"] {
        let err = scaffold(&options(&dir, name)).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidName(_)), "{name:?}");
    }
    assert!(!dir.path().join("value_objects").exists());
}

#[test]
fn test_invalid_raw_type() {
    let dir = TempDir::new().unwrap();
    let options = ScaffoldOptions {
        raw: "Vec<".to_string(),
        ..options(&dir, "Tags")
    };
    assert!(matches!(scaffold(&options), Err(CodegenError::Parse(_))));
}
