//! Casting a `gender` column to a `Gender` value object
//!
//! Run with `RUST_LOG=debug cargo run --example gender_cast` to see the cast
//! table being built and the rejected write.

use std::collections::HashMap;

use sea_query::Value;
use valuecast::{Attribute, Candidate, CastsConfig, ValidationError, ValueObject, ValueObjectCast, ValueObjectRegistry};

#[derive(Debug, Clone, ValueObject)]
pub struct Gender {
    value: String,
}

impl Gender {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value != "m" && value != "w" {
            return Err(ValidationError::new(format!(
                "Invalid gender value: {value}. Must be 'm' or 'w'."
            )));
        }
        Ok(Self { value })
    }

    pub fn label(&self) -> &'static str {
        if self.value == "m" {
            "Male"
        } else {
            "Female"
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Typed cast, declared next to the model
    let cast = ValueObjectCast::<Gender>::new();
    let mut row: HashMap<&str, Value> = HashMap::new();

    row.insert("gender", cast.set("gender", Some(Candidate::raw("w")))?);
    if let Some(gender) = cast.get("gender", row.get("gender").cloned())? {
        println!("stored {:?} -> {} ({})", row["gender"], gender, gender.label());
    }

    match cast.set("gender", Some(Candidate::raw("x"))) {
        Ok(_) => println!("unexpectedly accepted 'x'"),
        Err(err) => println!("rejected: {err}"),
    }

    // Name-based casts, as loaded from config/casts.toml
    let registry = ValueObjectRegistry::new().with::<Gender>()?;
    let config = CastsConfig::from_toml_str("[casts.users]\ngender = \"Gender\"\n")?;
    let casts = config.cast_map("users", &registry)?;

    let stored = casts.set("gender", Attribute::raw("m"))?;
    if let Some(gender) = casts.get("gender", Some(stored))? {
        println!("dynamic read -> {} ({})", gender, gender.type_name());
    }

    Ok(())
}
