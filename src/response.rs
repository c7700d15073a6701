//! Response body returned by the `/bfhl` endpoint.
//!
//! The three rendered fields are kept as raw JSON so that a response with a
//! missing or oddly shaped field still decodes; shape problems surface at
//! render time as [`FieldValue::Unavailable`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Text shown in place of a field that is missing or has an unexpected shape.
pub const UNAVAILABLE: &str = "unavailable";

/// Parsed response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BfhlResponse {
    #[serde(default)]
    pub numbers: Value,
    #[serde(default)]
    pub alphabets: Value,
    #[serde(default)]
    pub highest_lowercase_alphabet: Value,
    /// Everything else the backend sends (`is_success`, `user_id`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BfhlResponse {
    /// Build a response from the three rendered fields.
    pub fn new(numbers: &[&str], alphabets: &[&str], highest: Option<&str>) -> Self {
        Self {
            numbers: Value::from(numbers.to_vec()),
            alphabets: Value::from(alphabets.to_vec()),
            highest_lowercase_alphabet: highest.map(Value::from).unwrap_or(Value::Null),
            extra: Map::new(),
        }
    }

    pub fn field(&self, field: ResponseField) -> FieldValue {
        field.extract(self)
    }
}

/// The response fields the filter can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    Numbers,
    Alphabets,
    HighestLowercaseAlphabet,
}

impl ResponseField {
    /// JSON key in the response body.
    pub fn key(self) -> &'static str {
        match self {
            ResponseField::Numbers => "numbers",
            ResponseField::Alphabets => "alphabets",
            ResponseField::HighestLowercaseAlphabet => "highest_lowercase_alphabet",
        }
    }

    /// List fields must be arrays; the single field may be a scalar or an array.
    fn is_list(self) -> bool {
        !matches!(self, ResponseField::HighestLowercaseAlphabet)
    }

    fn raw(self, response: &BfhlResponse) -> &Value {
        match self {
            ResponseField::Numbers => &response.numbers,
            ResponseField::Alphabets => &response.alphabets,
            ResponseField::HighestLowercaseAlphabet => &response.highest_lowercase_alphabet,
        }
    }

    pub fn extract(self, response: &BfhlResponse) -> FieldValue {
        match self.raw(response) {
            Value::Array(items) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map_or(FieldValue::Unavailable, FieldValue::List),
            value if !self.is_list() => {
                scalar_text(value).map_or(FieldValue::Unavailable, FieldValue::Single)
            }
            _ => FieldValue::Unavailable,
        }
    }
}

/// Strings render bare, numbers and booleans in JSON form, anything else is rejected.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A response field ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    List(Vec<String>),
    Single(String),
    Unavailable,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Single(value) => write!(f, "{value}"),
            FieldValue::Unavailable => write!(f, "{UNAVAILABLE}"),
        }
    }
}
