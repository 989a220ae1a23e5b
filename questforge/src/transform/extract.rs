//! Display-string externalization
//!
//! Scans every quest and chapter for raw `name:8`/`desc:8` text, moves
//! the text into per-locale `.lang` tables under synthesized keys, and
//! rewrites the fields to reference the keys. Fields that already hold
//! an externalized key are kept as-is. Tables written back contain only
//! keys the document still references.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::Result;
use crate::formats::lang::{LangTable, is_lang_key, read_lang, write_lang};
use crate::formats::quests::QuestDocument;
use crate::formats::quests::document::{line_id, property_bag_mut, quest_id};

/// The primary locale used to resolve display names.
pub const DEFAULT_LOCALE: &str = "en_us";

/// Marker text registered for externalized keys no locale defines.
const UNDEFINED_MARKER: &str = "[undefined lang code]";

/// Locale table location and key prefix.
#[derive(Debug, Clone)]
pub struct LangOptions {
    /// Directory holding `<code>.lang` files.
    pub lang_path: PathBuf,
    /// First segment of every synthesized key.
    pub lang_prefix: String,
}

impl Default for LangOptions {
    fn default() -> Self {
        LangOptions {
            lang_path: PathBuf::from("resources/betterquesting/lang/"),
            lang_prefix: "bq".to_string(),
        }
    }
}

/// Per-run locale table cache plus the extraction pass itself.
///
/// All tables are loaded when the helper is constructed and live for one
/// pipeline run; the linker and splitter borrow the same helper to
/// resolve externalized names against the primary locale.
#[derive(Debug)]
pub struct LangHelper {
    options: LangOptions,
    tables: IndexMap<String, LangTable>,
}

impl LangHelper {
    /// Discover locale files and load every table.
    ///
    /// Falls back to a single `en_us` locale (logged, not an error) when
    /// the directory is missing or holds no `.lang` files.
    pub fn load(options: LangOptions) -> Result<Self> {
        let mut codes: Vec<String> = WalkDir::new(&options.lang_path)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "lang") {
                    path.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        codes.sort();

        if codes.is_empty() {
            tracing::info!(
                "no .lang files found in {:?}, using {} as default",
                options.lang_path,
                DEFAULT_LOCALE
            );
            codes.push(DEFAULT_LOCALE.to_string());
        }

        let mut tables = IndexMap::new();
        for code in codes {
            let table = read_lang(table_path(&options.lang_path, &code))?;
            tables.insert(code, table);
        }

        Ok(LangHelper { options, tables })
    }

    /// Build a helper from in-memory tables (no disk access).
    #[must_use]
    pub fn from_tables(options: LangOptions, tables: IndexMap<String, LangTable>) -> Self {
        LangHelper { options, tables }
    }

    /// Locale codes known to this run.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Resolve a display value to primary-locale text.
    ///
    /// Raw text passes through; an externalized key is looked up in the
    /// `en_us` table and falls back to the key itself when undefined.
    #[must_use]
    pub fn localized_name<'a>(&'a self, text: &'a str) -> &'a str {
        if !is_lang_key(text) {
            return text;
        }
        self.tables
            .get(DEFAULT_LOCALE)
            .and_then(|table| table.get(text))
            .unwrap_or(text)
    }

    /// Externalize every quest and chapter text field, then write the
    /// pruned locale tables back to disk.
    ///
    /// Returns the number of fields whose value changed; a rerun over an
    /// already-externalized document reports zero.
    pub fn apply_lang_codes(&mut self, doc: &mut QuestDocument) -> Result<usize> {
        let mut used: HashSet<String> = HashSet::new();
        let mut changes = 0;

        for quest in doc.quest_database_mut()?.values_mut() {
            let id = quest_id(quest)?;
            let root = format!("quest{id}");
            changes += self.externalize(quest, &root, "name", &mut used)?;
            changes += self.externalize(quest, &root, "desc", &mut used)?;
        }

        for chapter in doc.quest_lines_mut()?.values_mut() {
            let id = line_id(chapter)?;
            let root = format!("chapter{id}");
            changes += self.externalize(chapter, &root, "name", &mut used)?;
            changes += self.externalize(chapter, &root, "desc", &mut used)?;
        }

        for (code, table) in &self.tables {
            write_lang(table_path(&self.options.lang_path, code), table, &used)?;
        }

        Ok(changes)
    }

    /// Handle one text field of one entity; returns 1 if it changed.
    fn externalize(
        &mut self,
        entity: &mut Value,
        root: &str,
        field: &str,
        used: &mut HashSet<String>,
    ) -> Result<usize> {
        let bag_key = format!("{field}:8");
        let bag = property_bag_mut(entity, root)?;
        let text = bag
            .get(&bag_key)
            .and_then(Value::as_str)
            .ok_or_else(|| crate::error::Error::shape(format!("{root}: missing {bag_key}")))?
            .to_string();

        if is_lang_key(&text) {
            // Already externalized. Register a placeholder if no locale
            // defines it, and keep the key.
            if !self.tables.values().any(|table| table.contains_key(&text)) {
                for table in self.tables.values_mut() {
                    table.insert(text.clone(), UNDEFINED_MARKER);
                }
            }
            used.insert(text);
            return Ok(0);
        }

        let lang_code = format!("{}.{root}.{field}", self.options.lang_prefix);
        for table in self.tables.values_mut() {
            table.insert(lang_code.clone(), text.clone());
        }
        let changed = usize::from(text != lang_code);
        used.insert(lang_code.clone());
        bag.insert(bag_key, Value::String(lang_code));
        Ok(changed)
    }
}

fn table_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{code}.lang"))
}
