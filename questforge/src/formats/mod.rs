//! File format handlers for BetterQuesting data

pub mod lang;
pub mod quests;

// Re-export main format types
pub use lang::{LangTable, is_lang_key, read_lang, write_lang};
pub use quests::{JsonMap, QuestDocument, TypeTag, parse_quests, read_quests, write_quests};
