//! `.lang` file writing
//!
//! Output contains only keys still referenced by the document, in a
//! deterministic order: natural order of the entity-root key segment,
//! with `desc` before `name` for the same root. Unused legacy keys are
//! pruned by the filter.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::LangTable;
use crate::error::Result;
use crate::utils::natural_cmp;

/// Serialize the used subset of a table, sorted and escaped.
#[must_use]
pub fn serialize_lang(table: &LangTable, used: &HashSet<String>) -> String {
    let mut entries: Vec<(&str, &str)> = table
        .entries
        .iter()
        .filter(|(key, _)| used.contains(*key))
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    entries.sort_by(|(a_key, _), (b_key, _)| {
        let (a_root, a_field) = split_key(a_key);
        let (b_root, b_field) = split_key(b_key);
        natural_cmp(a_root, b_root).then_with(|| a_field.cmp(b_field))
    });

    entries
        .iter()
        .map(|(key, value)| format!("{key}={}", value.replace('\n', "%n")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a locale table back to disk, creating parent directories.
pub fn write_lang<P: AsRef<Path>>(path: P, table: &LangTable, used: &HashSet<String>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialize_lang(table, used))?;
    Ok(())
}

/// Second and third dot segments of a key: `bq.quest7.name` →
/// `("quest7", "name")`.
fn split_key(key: &str) -> (&str, &str) {
    let mut segments = key.split('.');
    segments.next();
    let root = segments.next().unwrap_or("");
    let field = segments.next().unwrap_or("");
    (root, field)
}
