//! Rendering JSON values as source-level text
//!
//! Used when a structured value has to flow back into a textual position of a
//! curl command: a string renders as its raw content, everything else as its
//! compact JSON form.

use serde_json::Value;

/// Serialize a value to the literal text a user would have typed.
pub fn to_source_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
