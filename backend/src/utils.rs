//! Lenient deserializers for request bodies.
//!
//! Clients send identifiers and scores either as JSON numbers or as numeric
//! strings, and the quiz client sends `"all"` or `0` for "every category".

use std::collections::BTreeSet;

use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

use crate::services::quiz::QuizCategory;

/// Reads an integer from a JSON number or a numeric string.
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn deserialize_quiz_category<'de, D>(deserializer: D) -> Result<QuizCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    if let Value::String(s) = &value {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(QuizCategory::All);
        }
    }

    integer(&value)
        .map(QuizCategory::from_id)
        .ok_or_else(|| D::Error::custom(format!("invalid quiz category: {value}")))
}

/// Accepts an array of identifiers. An empty string stands for "nothing served
/// yet", which older clients send on the first call.
pub fn deserialize_id_set<'de, D>(deserializer: D) -> Result<BTreeSet<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                integer(item).ok_or_else(|| D::Error::custom(format!("invalid question id: {item}")))
            })
            .collect(),
        Value::String(s) if s.trim().is_empty() => Ok(BTreeSet::new()),
        other => Err(D::Error::custom(format!(
            "expected a list of question ids, got {other}"
        ))),
    }
}
