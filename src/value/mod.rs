//! Raw column values
//!
//! A value object wraps exactly one raw value, and the persistence layer stores
//! that raw value as a `sea_query::Value`. This module provides the traits that
//! connect the two:
//!
//! - **`ValueType`** - Maps a Rust primitive to its `sea_query::Value` variant
//! - **`TryGetable`** - Extracts a primitive back out of a stored value, with errors
//! - **`RawValue`** - The set of primitives a value object may wrap, and how each
//!   one renders as a string (see [`Repr`])

pub mod raw;
pub mod try_getable;
pub mod types;

pub use raw::{RawValue, Repr};
pub use try_getable::{TryGetable, ValueExtractionError};
pub use types::{is_null, ValueType};
