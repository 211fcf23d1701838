//! A document producer for JSON values.
//!
//! This is a small, self-contained producer that exercises the same algebra
//! as the statement pipeline: objects and arrays become bracketed, nestable
//! groups; everything else becomes a single text atom.

use crate::doc::Doc;
use serde_json::Value;

/// Parse `s` as JSON and produce its document.
pub fn fmt_json(s: &str) -> Result<Doc, serde_json::Error> {
    let value: Value = serde_json::from_str(s)?;
    Ok(json_doc(&value))
}

/// Produce a document for a JSON value.
///
/// A non-empty object becomes `{` … `}` around its `key: value` entries,
/// each entry nesting its value under the key; a non-empty array becomes
/// `[` … `]` around its elements. Scalars, `null`, and empty containers
/// render as their canonical single-line form.
pub fn json_doc(value: &Value) -> Doc {
    match value {
        Value::Object(map) if !map.is_empty() => {
            let entries = map
                .iter()
                .map(|(key, val)| {
                    Doc::nest_under(
                        Doc::text(Value::String(key.clone()).to_string()) + Doc::text(":"),
                        json_doc(val),
                    )
                })
                .collect();
            Doc::bracket("{", Doc::join(",", entries), "}")
        }
        Value::Array(elements) if !elements.is_empty() => {
            let elements = elements.iter().map(json_doc).collect();
            Doc::bracket("[", Doc::join(",", elements), "]")
        }
        other => Doc::text(other.to_string()),
    }
}
