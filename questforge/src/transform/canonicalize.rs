//! Canonical key ordering
//!
//! Reorders every map in the document by natural key order so the
//! rewritten book serializes deterministically no matter what order the
//! source happened to use. Arrays keep their element order; elements
//! that are maps are still canonicalized.

use serde_json::Value;

use crate::formats::quests::JsonMap;
use crate::utils::natural_cmp;

/// Produce a tree whose maps are all natural-sorted. Pure; the input is
/// consumed and rebuilt.
#[must_use]
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
            let mut sorted = JsonMap::new();
            for (key, child) in entries {
                sorted.insert(key, canonicalize(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
