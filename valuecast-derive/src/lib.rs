//! Procedural macros for valuecast
//!
//! This crate provides the `ValueObject` derive, re-exported by `valuecast`.

mod attributes;
mod macros;

use proc_macro::TokenStream;

/// Derive macro for `ValueObject` - the shared value object behaviour
///
/// This macro generates:
/// - `ValueObject` implementation (`Raw` = the raw field's type, `value()`, `make()`)
/// - `Display` (stringable / scalar / JSON fallback over the raw value)
/// - `PartialEq` (equality of raw values only)
/// - `Serialize` and `Deserialize` as the bare raw value; deserializing runs `make()`
///
/// The raw field is the struct's only field, or the one marked `#[value]`.
/// `make()` forwards to `Self::new(raw)`, which must return
/// `Result<Self, ValidationError>`.
///
/// # Attributes
///
/// - `#[value_object(constructor = "path")]` - call `path(raw)` instead of `Self::new`
/// - `#[value_object(unchecked)]` - build single-field wrappers directly, without validation
/// - `#[value_object(name = "...")]` - registration name (defaults to the struct name)
///
/// # Example
///
/// ```ignore
/// use valuecast::{ValidationError, ValueObject};
///
/// #[derive(Debug, Clone, ValueObject)]
/// pub struct Gender {
///     value: String,
/// }
///
/// impl Gender {
///     pub fn new(value: String) -> Result<Self, ValidationError> {
///         match value.as_str() {
///             "m" | "w" => Ok(Self { value }),
///             _ => Err(ValidationError::new(format!("Invalid gender value: {value}."))),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(ValueObject, attributes(value_object, value))]
pub fn derive_value_object(input: TokenStream) -> TokenStream {
    macros::derive_value_object(input)
}
