//! TryGetable trait for safe raw value extraction
//!
//! Reading a column hands the cast a `sea_query::Value`. `TryGetable` turns it
//! back into the raw primitive, telling a null apart from a value of the wrong
//! type so the cast can report which field held what.

use sea_query::Value;
use thiserror::Error;

use crate::value::ValueType;

/// Error type for value extraction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueExtractionError {
    /// The value is null (None variant)
    #[error("Value is null")]
    NullValue,
    /// The value type doesn't match the expected type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
    /// Value conversion failed (e.g., overflow, invalid format)
    #[error("Conversion error: {0}")]
    ConversionError(String),
}

/// Error-aware extraction of a raw primitive from a stored value.
///
/// ```rust
/// use valuecast::{TryGetable, ValueExtractionError};
/// use sea_query::Value;
///
/// let result: Result<String, _> = TryGetable::try_get(Value::String(Some("m".into())));
/// assert_eq!(result, Ok("m".to_string()));
///
/// let result: Result<String, _> = TryGetable::try_get(Value::String(None));
/// assert_eq!(result, Err(ValueExtractionError::NullValue));
/// ```
pub trait TryGetable: ValueType {
    /// Try to extract a value, returning an error if extraction fails.
    ///
    /// Returns:
    /// - `Ok(T)` if the value matches the expected type and is not null
    /// - `Err(ValueExtractionError::NullValue)` if the value is a null of the expected type
    /// - `Err(ValueExtractionError::TypeMismatch)` if the value type doesn't match
    fn try_get(value: Value) -> Result<Self, ValueExtractionError>;

    /// Try to extract a value, allowing null values to return `None`.
    fn try_get_opt(value: Value) -> Result<Option<Self>, ValueExtractionError> {
        match Self::try_get(value) {
            Ok(v) => Ok(Some(v)),
            Err(ValueExtractionError::NullValue) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

macro_rules! impl_try_getable {
    ($type:ty, $variant:ident) => {
        impl TryGetable for $type {
            fn try_get(value: Value) -> Result<Self, ValueExtractionError> {
                match value {
                    Value::$variant(Some(v)) => Ok(v),
                    Value::$variant(None) => Err(ValueExtractionError::NullValue),
                    other => Err(ValueExtractionError::TypeMismatch {
                        expected: stringify!($variant).to_string(),
                        actual: format!("{:?}", other),
                    }),
                }
            }
        }
    };
}

impl_try_getable!(i8, TinyInt);
impl_try_getable!(i16, SmallInt);
impl_try_getable!(i32, Int);
impl_try_getable!(i64, BigInt);
impl_try_getable!(f32, Float);
impl_try_getable!(f64, Double);
impl_try_getable!(bool, Bool);
impl_try_getable!(String, String);
impl_try_getable!(Vec<u8>, Bytes);

impl TryGetable for serde_json::Value {
    fn try_get(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Json(Some(v)) => Ok(*v),
            Value::Json(None) => Err(ValueExtractionError::NullValue),
            // Structured raw values may come back from text columns
            Value::String(Some(text)) => serde_json::from_str(&text)
                .map_err(|e| ValueExtractionError::ConversionError(e.to_string())),
            Value::String(None) => Err(ValueExtractionError::NullValue),
            other => Err(ValueExtractionError::TypeMismatch {
                expected: "Json".to_string(),
                actual: format!("{:?}", other),
            }),
        }
    }
}
