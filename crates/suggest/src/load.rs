//! Fail-soft loading of contact-match JSON.
//!
//! Accepts `{"matches": [...]}` or a bare array. Scalar fields are coerced to
//! strings, anything else becomes empty. Only malformed JSON is an error.

use serde_json::Value;

use crate::error::SuggestError;
use crate::model::{ContactHint, ContactMatch, SuggestInput};

/// Textual form of a scalar. `null`, objects and arrays are empty.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_optional(value: Option<&Value>) -> Option<String> {
    let s = coerce_string(value);
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn parse_hint(value: &Value) -> Option<ContactHint> {
    let obj = value.as_object()?;
    Some(ContactHint {
        kind: coerce_optional(obj.get("kind")),
        domain: coerce_optional(obj.get("domain")),
        workish: matches!(obj.get("workish"), Some(Value::Bool(true))),
    })
}

fn parse_match(value: &Value) -> Option<ContactMatch> {
    let obj = value.as_object()?;
    Some(ContactMatch {
        handle: coerce_string(obj.get("handle")),
        display_name: coerce_string(obj.get("display_name")),
        hint: obj.get("hint").and_then(parse_hint),
    })
}

/// Matches from an already-parsed JSON document. Unknown shapes yield none.
pub fn matches_from_value(doc: &Value) -> Vec<ContactMatch> {
    let items: &[Value] = match doc {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => match obj.get("matches") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };
    items.iter().filter_map(parse_match).collect()
}

pub fn parse_matches_json(input: &str) -> Result<SuggestInput, SuggestError> {
    let doc: Value =
        serde_json::from_str(input).map_err(|e| SuggestError::InputParse(e.to_string()))?;
    Ok(SuggestInput {
        matches: matches_from_value(&doc),
    })
}
