//! Minecraft `.lang` locale table format
//!
//! One `key=value` pair per line, one file per locale code. Keys follow
//! the externalized-key convention `<prefix>.<entity-root>.<field>`,
//! e.g. `bq.quest7.name`.

pub mod reader;
pub mod writer;

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

pub use reader::read_lang;
pub use writer::write_lang;

/// A single locale's key → text mapping.
#[derive(Debug, Clone, Default)]
pub struct LangTable {
    /// Entries in file order.
    pub entries: IndexMap<String, String>,
}

impl LangTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the text for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite an entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Check whether a key is defined.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Test whether a text value has the externalized-key shape: one or more
/// dot-separated word segments (`bq.quest7.name`).
#[must_use]
pub fn is_lang_key(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+\.)+\w+$").expect("valid regex"))
        .is_match(text)
}
