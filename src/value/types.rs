//! ValueType trait for column value conversions
//!
//! The `ValueType` trait maps Rust primitives to their corresponding
//! `sea_query::Value` variant. Every raw value a value object can wrap goes
//! through this trait on its way to (and from) storage.
//!
//! ## Usage
//!
//! ```rust
//! use valuecast::ValueType;
//! use sea_query::Value;
//!
//! let value: Value = "m".to_string().into_value();
//! assert_eq!(value, Value::String(Some("m".to_string())));
//! ```
//!
//! Implemented for `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`, `String`,
//! `Vec<u8>` and `serde_json::Value`.

use sea_query::Value;

/// Trait for mapping Rust types to their corresponding `sea_query::Value` variant.
pub trait ValueType: Sized {
    /// Convert this value into a `sea_query::Value`.
    fn into_value(self) -> Value;

    /// Convert a `sea_query::Value` into this type, if possible.
    ///
    /// Returns `None` if the value doesn't match the expected variant or is null.
    fn from_value(value: Value) -> Option<Self>;

    /// Return the null variant for this type.
    ///
    /// Writing an absent value object stores this typed null, so the column
    /// keeps the variant the storage layer expects.
    fn null_value() -> Value;
}

macro_rules! impl_value_type {
    ($type:ty, $variant:ident) => {
        impl ValueType for $type {
            fn into_value(self) -> Value {
                Value::$variant(Some(self))
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => v,
                    _ => None,
                }
            }

            fn null_value() -> Value {
                Value::$variant(None)
            }
        }
    };
}

impl_value_type!(i8, TinyInt);
impl_value_type!(i16, SmallInt);
impl_value_type!(i32, Int);
impl_value_type!(i64, BigInt);
impl_value_type!(f32, Float);
impl_value_type!(f64, Double);
impl_value_type!(bool, Bool);
impl_value_type!(String, String);
impl_value_type!(Vec<u8>, Bytes);

/// Whether `value` is a null, whatever its variant.
///
/// Storage layers do not always hand back the typed null of the column's raw
/// type, e.g. a `Value::Int(None)` for a text column that was never set.
pub fn is_null(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::BigUnsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::Char(None)
            | Value::Bytes(None)
            | Value::Json(None)
    )
}

impl ValueType for serde_json::Value {
    fn into_value(self) -> Value {
        Value::Json(Some(Box::new(self)))
    }

    /// Text columns are read as JSON text, like [`crate::TryGetable`] does.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Json(Some(v)) => Some(*v),
            Value::String(Some(text)) => serde_json::from_str(&text).ok(),
            _ => None,
        }
    }

    fn null_value() -> Value {
        Value::Json(None)
    }
}
