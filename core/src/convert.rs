//! Conversions between primitives and their string forms.
//!
//! Each primitive has a strict `parse_*` returning `ConvertError` and a
//! lenient `string_to_*` that falls back to the zero value and logs a warning.
//! Values whose kind is only known at runtime come from decoded JSON and are
//! handled through [`Primitive::from_json`].

use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ConvertError;

pub fn bool_to_string(v: bool) -> String {
    v.to_string()
}

/// Shortest decimal form that round-trips. Never uses an exponent.
pub fn f64_to_string(v: f64) -> String {
    v.to_string()
}

pub fn int_to_string(v: i64) -> String {
    v.to_string()
}

pub fn int_slice_to_strings(values: &[i64]) -> Vec<String> {
    values.iter().copied().map(int_to_string).collect()
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(v: &str) -> Result<bool, ConvertError> {
    match v {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(invalid(v, "bool")),
    }
}

pub fn parse_f64(v: &str) -> Result<f64, ConvertError> {
    v.parse().map_err(|_| invalid(v, "f64"))
}

/// Base 10 with an optional leading sign.
pub fn parse_i64(v: &str) -> Result<i64, ConvertError> {
    v.parse().map_err(|_| invalid(v, "i64"))
}

pub fn string_to_bool(v: &str) -> bool {
    parse_bool(v).unwrap_or_else(|err| {
        warn!(input = v, error = %err, "falling back to false");
        false
    })
}

pub fn string_to_f64(v: &str) -> f64 {
    parse_f64(v).unwrap_or_else(|err| {
        warn!(input = v, error = %err, "falling back to 0.0");
        0.0
    })
}

pub fn string_to_i64(v: &str) -> i64 {
    parse_i64(v).unwrap_or_else(|err| {
        warn!(input = v, error = %err, "falling back to 0");
        0
    })
}

fn invalid(input: &str, target: &'static str) -> ConvertError {
    ConvertError::Invalid {
        input: input.to_string(),
        target,
    }
}

/// The primitive kinds that have a string form.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Primitive {
    /// Classify a decoded JSON value. Null, arrays and objects have no
    /// primitive form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Primitive::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Primitive::Int(i)),
                None => n.as_f64().map(Primitive::Float),
            },
            Value::String(s) => Some(Primitive::Str(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Int(i) => write!(f, "{i}"),
            Primitive::Float(x) => write!(f, "{x}"),
            Primitive::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Primitive {
    fn from(v: bool) -> Self {
        Primitive::Bool(v)
    }
}

impl From<i32> for Primitive {
    fn from(v: i32) -> Self {
        Primitive::Int(v.into())
    }
}

impl From<i64> for Primitive {
    fn from(v: i64) -> Self {
        Primitive::Int(v)
    }
}

impl From<f64> for Primitive {
    fn from(v: f64) -> Self {
        Primitive::Float(v)
    }
}

impl From<&str> for Primitive {
    fn from(v: &str) -> Self {
        Primitive::Str(v.to_string())
    }
}

impl From<String> for Primitive {
    fn from(v: String) -> Self {
        Primitive::Str(v)
    }
}

/// String form of a JSON scalar, or `""` (with a warning) for anything else.
pub fn value_to_string(value: &Value) -> String {
    match Primitive::from_json(value) {
        Some(p) => p.to_string(),
        None => {
            warn!(kind = json_kind(value), "value has no string form");
            String::new()
        }
    }
}

/// Take the object out of a JSON value.
pub fn map_from_value(value: Value) -> Result<Map<String, Value>, ConvertError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConvertError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
