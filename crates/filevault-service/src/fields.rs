//! Tolerant field readers for client request bodies.
//!
//! A field with the wrong JSON type must not discard the rest of the body,
//! so these read any value and interpret it instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a string field. Any non-string value counts as absent.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Reads a flag by JSON truthiness: `false`, `null`, `0`, and `""` are false,
/// everything else is true.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
