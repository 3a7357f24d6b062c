//! Shared value object behaviour
//!
//! These helpers are what `#[derive(ValueObject)]` expands to. Types that
//! implement [`ValueObject`] by hand can call them from their own `Display`,
//! `Serialize` and `PartialEq` impls to behave the same way.

use serde::{Serialize, Serializer};

use crate::value::{RawValue, Repr};
use crate::value_object::ValueObject;

/// String form of a raw value.
///
/// A raw value with its own string conversion uses it; a scalar converts
/// directly; anything else falls back to its JSON encoding.
pub fn stringify<R: RawValue>(raw: &R) -> String {
    match raw.repr() {
        Repr::Stringable(display) => display.to_string(),
        Repr::Scalar(s) => s,
        Repr::Structured => serde_json::to_string(raw).unwrap_or_else(|err| {
            log::warn!("failed to encode raw value {:?} as JSON, using an empty string: {}", raw, err);
            String::new()
        }),
    }
}

/// Serialize a value object as its raw value, unwrapped.
pub fn serialize<T, S>(object: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ValueObject,
    S: Serializer,
{
    object.value().serialize(serializer)
}

/// Equality for `PartialEq` impls; see [`ValueObject::equals`].
pub fn equals<T: ValueObject>(a: &T, b: &T) -> bool {
    a.equals(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_scalar() {
        assert_eq!(stringify(&"m".to_string()), "m");
        assert_eq!(stringify(&42i64), "42");
        assert_eq!(stringify(&1.5f64), "1.5");
        assert_eq!(stringify(&false), "false");
    }

    #[test]
    fn test_stringify_structured_falls_back_to_json() {
        assert_eq!(stringify(&serde_json::json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
        assert_eq!(stringify(&vec![1u8, 2, 3]), "[1,2,3]");
        assert_eq!(stringify(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_stringify_unencodable_value_is_empty() {
        use std::collections::BTreeMap;

        // JSON object keys must be strings
        let map = BTreeMap::from([(vec![1u8], 1i32)]);
        assert!(serde_json::to_string(&map).is_err());
        assert_eq!(stringify(&Keyed(map)), "");
    }

    #[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
    struct Keyed(std::collections::BTreeMap<Vec<u8>, i32>);

    impl crate::value::ValueType for Keyed {
        fn into_value(self) -> sea_query::Value {
            sea_query::Value::Json(None)
        }

        fn from_value(_: sea_query::Value) -> Option<Self> {
            None
        }

        fn null_value() -> sea_query::Value {
            sea_query::Value::Json(None)
        }
    }

    impl crate::value::TryGetable for Keyed {
        fn try_get(_: sea_query::Value) -> Result<Self, crate::value::ValueExtractionError> {
            Err(crate::value::ValueExtractionError::NullValue)
        }
    }

    impl RawValue for Keyed {}

    #[test]
    fn test_stringify_json_scalar_is_unquoted() {
        assert_eq!(stringify(&serde_json::json!("w")), "w");
    }
}
