//! Code generation writer

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::definition::ValueObjectDefinition;
use crate::error::{CodegenError, Result};

pub struct ValueObjectWriter;

impl Default for ValueObjectWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObjectWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate the source file for `definition`
    pub fn generate_code(&self, definition: &ValueObjectDefinition) -> Result<String> {
        let code = self.generate_tokens(definition);
        let formatted = format_code(&code.to_string())?;
        Ok(format!("{}\n{}", header(definition), formatted))
    }

    /// The value object struct plus the constructor validation goes in
    fn generate_tokens(&self, definition: &ValueObjectDefinition) -> TokenStream {
        let name = &definition.name;
        let raw = &definition.raw;

        quote! {
            use valuecast::{ValidationError, ValueObject};

            #[derive(Debug, Clone, ValueObject)]
            pub struct #name {
                value: #raw,
            }

            impl #name {
                pub fn new(value: #raw) -> Result<Self, ValidationError> {
                    Ok(Self { value })
                }
            }
        }
    }
}

fn header(definition: &ValueObjectDefinition) -> String {
    format!(
        "//! `{}` value object over `{}`\n//!\n//! Reject invalid raw values in `new`; every read and raw write goes through it.\n",
        definition.name,
        definition.raw.to_token_stream()
    )
}

/// Format code with rustfmt, returning it unformatted when rustfmt is unavailable
fn format_code(code: &str) -> Result<String> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::debug!("rustfmt not available ({}), writing unformatted code", err);
            return Ok(code.to_string());
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(code.as_bytes())?;
        stdin.flush()?;
    }

    let output = child.wait_with_output()?;

    if output.status.success() {
        String::from_utf8(output.stdout).map_err(|e| CodegenError::Generation(e.to_string()))
    } else {
        log::debug!(
            "rustfmt failed, writing unformatted code: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(code.to_string())
    }
}
