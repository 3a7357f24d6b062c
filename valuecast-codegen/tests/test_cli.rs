//! Tests for the `valuecast-codegen make` command
//!
//! Runs the built binary and checks exit codes and output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn make(output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_valuecast-codegen"))
        .arg("make")
        .args(args)
        .arg("--output")
        .arg(output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_make_creates_file() {
    let dir = TempDir::new().unwrap();
    let result = make(dir.path(), &["Gender"]);

    assert_eq!(result.status.code(), Some(0));
    let code = fs::read_to_string(dir.path().join("gender.rs")).unwrap();
    assert!(code.contains("pub struct Gender"));
}

#[test]
fn test_make_refuses_existing_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(make(dir.path(), &["Gender"]).status.code(), Some(0));

    let path = dir.path().join("gender.rs");
    fs::write(&path, "// validation in progress").unwrap();

    let result = make(dir.path(), &["Gender"]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Value Object already exists!"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "// validation in progress");
}

#[test]
fn test_make_force_overwrites() {
    let dir = TempDir::new().unwrap();
    assert_eq!(make(dir.path(), &["Gender"]).status.code(), Some(0));

    let path = dir.path().join("gender.rs");
    fs::write(&path, "// stale").unwrap();

    let result = make(dir.path(), &["Gender", "--force"]);
    assert_eq!(result.status.code(), Some(0));
    assert!(fs::read_to_string(&path).unwrap().contains("pub struct Gender"));
}

#[test]
fn test_make_rejects_invalid_name() {
    let dir = TempDir::new().unwrap();
    let result = make(dir.path(), &["gender"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("UpperCamelCase"));
    assert!(!dir.path().join("gender.rs").exists());
}
