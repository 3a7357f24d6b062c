//! # valuecast
//!
//! Typed value objects for ORM columns.
//!
//! A value object is a small immutable wrapper around one primitive - a
//! validated gender code, an email address, an amount. This crate provides:
//!
//! - the [`ValueObject`] contract and `#[derive(ValueObject)]`, which gives a
//!   wrapper its string form, JSON form and equality from its raw value alone;
//! - [`ValueObjectCast`], the attribute cast a persistence layer calls to turn
//!   a stored `sea_query::Value` into a value object and back;
//! - [`CastMap`], [`ValueObjectRegistry`] and [`CastsConfig`] for declaring
//!   per-field casts in code or configuration.
//!
//! New value objects can be scaffolded with the `valuecast-codegen` tool.

// Lets `#[derive(ValueObject)]` refer to `::valuecast` inside this crate too.
extern crate self as valuecast;

pub mod base;
pub mod cast;
pub mod casts;
pub mod config;
pub mod registry;
pub mod value;
pub mod value_object;

pub use cast::{Attribute, AttributeCast, CastError, Candidate, ConfigurationError, ValueObjectCast};
pub use casts::CastMap;
pub use config::CastsConfig;
pub use registry::ValueObjectRegistry;
pub use value::{RawValue, Repr, TryGetable, ValueExtractionError, ValueType};
pub use value_object::{AnyValueObject, ValidationError, ValueObject};
pub use valuecast_derive::ValueObject;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
