//! Tests for the ValueObject derive
//!
//! Covers raw field selection, the constructor forms, and the derived
//! Display / PartialEq / serde behaviour.

use serde::{Deserialize, Serialize};
use valuecast::{ValidationError, ValueObject};

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
        match self.value.as_str() {
            "m" => "Male",
            "w" => "Female",
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, ValueObject)]
#[value_object(unchecked)]
pub struct Nickname(String);

#[derive(Debug, Clone, ValueObject)]
#[value_object(constructor = "Percentage::from_points", name = "Percent")]
pub struct Percentage(f64);

impl Percentage {
    fn from_points(points: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&points) {
            return Err(ValidationError::new(format!("{points} is outside 0..=100")));
        }
        Ok(Self(points))
    }
}

/// Carries a display label next to the raw code
#[derive(Debug, Clone, ValueObject)]
pub struct CountryCode {
    #[value]
    code: String,
    label: String,
}

impl CountryCode {
    pub fn new(code: String) -> Result<Self, ValidationError> {
        let label = match code.as_str() {
            "CH" => "Switzerland",
            "FR" => "France",
            _ => return Err(ValidationError::new(format!("Unknown country code: {code}"))),
        };
        Ok(Self {
            code,
            label: label.to_string(),
        })
    }

    pub fn with_label(&self, label: &str) -> Self {
        Self {
            code: self.code.clone(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, ValueObject)]
#[value_object(unchecked)]
pub struct Tags(serde_json::Value);

#[test]
fn test_make_runs_constructor_validation() {
    let gender = Gender::make("m".to_string()).unwrap();
    assert_eq!(gender.value(), "m");
    assert_eq!(gender.label(), "Male");

    let err = Gender::make("x".to_string()).unwrap_err();
    assert_eq!(err.message(), "Invalid gender value: x. Must be 'm' or 'w'.");
}

#[test]
fn test_unchecked_tuple_struct() {
    let nick = Nickname::make("ziggy".to_string()).unwrap();
    assert_eq!(nick.value(), "ziggy");
}

#[test]
fn test_custom_constructor_and_name() {
    assert_eq!(Percentage::NAME, "Percent");
    assert_eq!(Percentage::make(12.5).unwrap().value(), &12.5);
    assert!(Percentage::make(101.0).is_err());
}

#[test]
fn test_default_name_is_struct_name() {
    assert_eq!(Gender::NAME, "Gender");
    assert_eq!(CountryCode::NAME, "CountryCode");
}

#[test]
fn test_marked_raw_field() {
    let code = CountryCode::make("CH".to_string()).unwrap();
    assert_eq!(code.value(), "CH");
    assert_eq!(code.label, "Switzerland");
}

#[test]
fn test_display_is_raw_string_form() {
    assert_eq!(Gender::make("w".to_string()).unwrap().to_string(), "w");
    assert_eq!(Percentage::make(50.0).unwrap().to_string(), "50");
    let tags = Tags::make(serde_json::json!(["a", "b"])).unwrap();
    assert_eq!(tags.to_string(), r#"["a","b"]"#);
}

#[test]
fn test_equality_uses_raw_value_only() {
    let a = CountryCode::make("FR".to_string()).unwrap();
    let b = a.with_label("République française");
    let c = CountryCode::make("CH".to_string()).unwrap();

    assert_eq!(a, a.clone());
    assert_eq!(a, b);
    assert!(a.equals(&b));
    assert_ne!(a, c);
    assert!(a.not_equals(&c));
}

#[test]
fn test_serializes_as_bare_raw_value() {
    let gender = Gender::make("m".to_string()).unwrap();
    assert_eq!(serde_json::to_string(&gender).unwrap(), r#""m""#);
    assert_eq!(gender.to_json().unwrap(), r#""m""#);
    assert_eq!(gender.json_value().unwrap(), serde_json::json!("m"));
}

#[test]
fn test_embedded_in_larger_structure() {
    #[derive(Serialize, Deserialize)]
    struct Athlete {
        name: String,
        gender: Gender,
    }

    let athlete = Athlete {
        name: "Jane".to_string(),
        gender: Gender::make("w".to_string()).unwrap(),
    };
    let json = serde_json::to_value(&athlete).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Jane", "gender": "w"}));

    let back: Athlete = serde_json::from_value(json).unwrap();
    assert_eq!(back.gender, athlete.gender);
}

#[test]
fn test_deserialize_validates() {
    let ok: Gender = serde_json::from_str(r#""w""#).unwrap();
    assert_eq!(ok.value(), "w");

    let err = serde_json::from_str::<Gender>(r#""x""#).unwrap_err();
    assert!(err.to_string().contains("Invalid gender value: x"));
}

#[test]
fn test_into_raw() {
    let nick = Nickname::make("ziggy".to_string()).unwrap();
    assert_eq!(nick.into_raw(), "ziggy");
}
