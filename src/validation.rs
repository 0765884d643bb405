// src/validation.rs
//! Declarative request validation.
//!
//! Request models describe their required string fields and their semantic
//! constraints through [`Validate`]. The [`ValidatedJson`](crate::extract::ValidatedJson)
//! extractor runs both checks before a handler body executes and reports every
//! problem as a [`FieldViolation`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    StringType,
    StringTooShort,
    StringTooLong,
    JsonInvalid,
    ModelAttributesType,
}

/// One entry of a 422 response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldViolation {
    fn at_body(kind: ViolationKind, msg: impl Into<String>, input: Option<Value>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind,
            input,
            ctx: None,
        }
    }

    fn at_field(field: &str, kind: ViolationKind, msg: impl Into<String>, input: Value) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind,
            input: Some(input),
            ctx: None,
        }
    }

    pub fn json_invalid(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            ctx: Some(json!({ "error": detail })),
            ..Self::at_body(ViolationKind::JsonInvalid, "JSON decode error", None)
        }
    }

    pub fn not_an_object(input: Option<Value>) -> Self {
        Self::at_body(
            ViolationKind::ModelAttributesType,
            "Input should be a valid dictionary or object to extract fields from",
            input,
        )
    }

    /// `body` is the whole request object, which is what gets echoed back as `input`.
    pub fn missing(field: &str, body: &Value) -> Self {
        Self::at_field(field, ViolationKind::Missing, "Field required", body.clone())
    }

    pub fn string_type(field: &str, input: Value) -> Self {
        Self::at_field(
            field,
            ViolationKind::StringType,
            "Input should be a valid string",
            input,
        )
    }

    pub fn too_short(field: &str, value: &str, min_length: usize) -> Self {
        let unit = if min_length == 1 { "character" } else { "characters" };
        Self {
            ctx: Some(json!({ "min_length": min_length })),
            ..Self::at_field(
                field,
                ViolationKind::StringTooShort,
                format!("String should have at least {min_length} {unit}"),
                Value::String(value.to_string()),
            )
        }
    }

    pub fn too_long(field: &str, value: &str, max_length: usize) -> Self {
        let unit = if max_length == 1 { "character" } else { "characters" };
        Self {
            ctx: Some(json!({ "max_length": max_length })),
            ..Self::at_field(
                field,
                ViolationKind::StringTooLong,
                format!("String should have at most {max_length} {unit}"),
                Value::String(value.to_string()),
            )
        }
    }
}

/// Length check counted in Unicode scalar values, inclusive on both ends.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Option<FieldViolation> {
    let len = value.chars().count();
    if len < min {
        Some(FieldViolation::too_short(field, value, min))
    } else if len > max {
        Some(FieldViolation::too_long(field, value, max))
    } else {
        None
    }
}

pub trait Validate: DeserializeOwned {
    /// Fields that must be present in the body and hold a JSON string.
    const STRING_FIELDS: &'static [&'static str];

    fn validate(&self) -> Result<(), Vec<FieldViolation>>;
}

/// Structural checks on the raw body, run before deserializing into `T`.
pub fn check_shape<T: Validate>(body: &Value) -> Result<(), Vec<FieldViolation>> {
    let Some(fields) = body.as_object() else {
        return Err(vec![FieldViolation::not_an_object(Some(body.clone()))]);
    };

    let violations: Vec<FieldViolation> = T::STRING_FIELDS
        .iter()
        .filter_map(|name| match fields.get(*name) {
            None => Some(FieldViolation::missing(name, body)),
            Some(Value::String(_)) => None,
            Some(other) => Some(FieldViolation::string_type(name, other.clone())),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
