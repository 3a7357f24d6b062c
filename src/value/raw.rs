//! The primitives a value object may wrap

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::value::TryGetable;

/// How a raw value turns into a string.
///
/// String conversion of a value object checks these in order: a raw value
/// with its own string conversion wins, then a scalar converts directly, and
/// anything else is JSON-encoded.
pub enum Repr<'a> {
    /// The raw value brings its own string conversion.
    Stringable(&'a dyn fmt::Display),
    /// A primitive scalar, already converted.
    Scalar(String),
    /// Neither; encode the raw value as JSON.
    Structured,
}

impl fmt::Debug for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Stringable(display) => f.debug_tuple("Stringable").field(&display.to_string()).finish(),
            Repr::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Repr::Structured => f.write_str("Structured"),
        }
    }
}

/// A value that can sit inside a value object.
///
/// Besides storage conversion (`TryGetable`) and serde support, a raw value
/// only decides its [`Repr`]. The default is [`Repr::Structured`], so a custom
/// raw type that does nothing else is JSON-encoded when stringified.
///
/// `serde_json::Value` is also read from text columns, which must then hold
/// JSON text: `"dark"` is not, `"\"dark\""` is.
///
/// ```rust
/// use std::fmt;
/// use sea_query::Value;
/// use serde::{Deserialize, Serialize};
/// use valuecast::{RawValue, Repr, TryGetable, ValueExtractionError, ValueType};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Point { x: i32, y: i32 }
///
/// impl fmt::Display for Point {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "({}, {})", self.x, self.y)
///     }
/// }
///
/// impl ValueType for Point {
///     fn into_value(self) -> Value {
///         serde_json::to_value(self).map(ValueType::into_value).unwrap_or(Value::Json(None))
///     }
///     fn from_value(value: Value) -> Option<Self> {
///         <serde_json::Value as ValueType>::from_value(value).and_then(|v| serde_json::from_value(v).ok())
///     }
///     fn null_value() -> Value {
///         Value::Json(None)
///     }
/// }
///
/// impl TryGetable for Point {
///     fn try_get(value: Value) -> Result<Self, ValueExtractionError> {
///         let json = <serde_json::Value as TryGetable>::try_get(value)?;
///         serde_json::from_value(json).map_err(|e| ValueExtractionError::ConversionError(e.to_string()))
///     }
/// }
///
/// impl RawValue for Point {
///     fn repr(&self) -> Repr<'_> {
///         Repr::Stringable(self)
///     }
/// }
/// ```
pub trait RawValue:
    TryGetable + Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Classify this value for string conversion.
    fn repr(&self) -> Repr<'_> {
        Repr::Structured
    }
}

macro_rules! impl_scalar_raw_value {
    ($($type:ty),*) => {
        $(
            impl RawValue for $type {
                fn repr(&self) -> Repr<'_> {
                    Repr::Scalar(self.to_string())
                }
            }
        )*
    };
}

impl_scalar_raw_value!(i8, i16, i32, i64, f32, f64, bool, String);

impl RawValue for Vec<u8> {}

impl RawValue for serde_json::Value {
    fn repr(&self) -> Repr<'_> {
        match self {
            serde_json::Value::String(s) => Repr::Scalar(s.clone()),
            serde_json::Value::Number(n) => Repr::Scalar(n.to_string()),
            serde_json::Value::Bool(b) => Repr::Scalar(b.to_string()),
            serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Repr::Structured
            }
        }
    }
}
