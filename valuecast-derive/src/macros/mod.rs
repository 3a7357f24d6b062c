//! Macro implementations

pub mod value_object;

pub use value_object::derive_value_object;
