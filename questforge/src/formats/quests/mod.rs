//! `DefaultQuests.json` quest book format
//!
//! Reading, typed access, and fidelity-preserving serialization of the
//! monolithic quest book.

pub mod document;
pub mod reader;
pub mod tags;
pub mod writer;

pub use document::{JsonMap, QuestDocument};
pub use reader::{parse_quests, read_quests};
pub use tags::{TaggedKey, TypeTag, entry_index, parse_key};
pub use writer::{apply_literal_fidelity, serialize_quests, write_quests};
