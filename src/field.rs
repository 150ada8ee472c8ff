//! Declared field kinds and run-time value inspection.
//!
//! Inbound bodies arrive as `serde_json::Value`, which already is the tagged
//! discriminated union a schema check needs: a [`ParameterSpec`] declares a
//! [`FieldKind`] and the validator matches it against the tag of the value
//! actually present, reported back as a [`ValueKind`].
//!
//! [`ParameterSpec`]: crate::validation::ParameterSpec

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Kind a request field is declared to have.
///
/// `Identifier` is a distinct primitive: a 24-character hex document-store
/// reference validated by [`crate::identifier::is_object_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(rename = "string")]
    Text,
    Number,
    Boolean,
    Object,
    Identifier,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Identifier => "identifier",
        })
    }
}

/// Run-time kind of a value actually present in a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Inspect the tag of a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn value_kind_follows_json_tag() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!(12)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("a")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
    }

    #[test]
    fn display_names_match_wire_vocabulary() {
        assert_eq!(FieldKind::Text.to_string(), "string");
        assert_eq!(FieldKind::Identifier.to_string(), "identifier");
        assert_eq!(ValueKind::String.to_string(), "string");
        assert_eq!(ValueKind::Null.to_string(), "null");
    }
}
