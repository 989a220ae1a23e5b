//! Quest book file reading

use std::fs;
use std::path::Path;

use super::document::QuestDocument;
use crate::error::{Error, Result};

/// Read a quest book from disk.
///
/// # Errors
/// Returns [`Error::DocumentNotFound`] if the file does not exist, so the
/// caller can report it with path guidance instead of a bare IO error.
pub fn read_quests<P: AsRef<Path>>(path: P) -> Result<QuestDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_quests(&content)
}

/// Parse a quest book from a JSON string.
///
/// # Errors
/// Returns an error if the JSON is malformed or the root is not an object.
pub fn parse_quests(content: &str) -> Result<QuestDocument> {
    let root: serde_json::Value = serde_json::from_str(content)?;
    QuestDocument::new(root)
}
