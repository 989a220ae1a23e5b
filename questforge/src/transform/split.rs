//! Quest book splitting
//!
//! Walks the canonical document and emits one file per chapter quest
//! entry, one index file per chapter, and one global properties file.
//! Every file carries the positional metadata (`_IDs` arrays, `_index`,
//! `_pos`) needed to rebuild the monolithic book in its original entry
//! order. The previous output tree is wiped first; the document itself
//! is never mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::formats::quests::document::{
    KEY_ENTRY_ID, KEY_NAME, KEY_QUESTS, KEY_QUEST_DATABASE, KEY_QUEST_LINES, JsonMap, as_object,
    bag_text, property_bag, quest_id,
};
use crate::formats::quests::{QuestDocument, entry_index};
use crate::transform::extract::LangHelper;
use crate::transform::names::UniqueNameGenerator;

/// Folder under the output root holding one subfolder per chapter.
const CHAPTERS_DIR: &str = "Chapters";

/// A standalone quest file: the chapter membership entry it came from
/// (minus the quest ID) plus the quest's full data.
#[derive(Serialize)]
struct QuestFile<'a> {
    #[serde(rename = "_pos")]
    pos: Value,
    #[serde(rename = "_data")]
    data: &'a Value,
}

/// The global properties file: every top-level field that is neither the
/// quest database nor the chapter index, plus the database position map.
#[derive(Serialize)]
struct GlobalProps {
    #[serde(rename = "_data")]
    data: Value,
    #[serde(rename = "_IDs")]
    ids: Vec<Option<i64>>,
}

/// A chapter index file: the chapter's own positional key, its remaining
/// properties, and its membership position map.
#[derive(Serialize)]
struct ChapterProps<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_data")]
    data: Value,
    #[serde(rename = "_IDs")]
    ids: Vec<Option<i64>>,
}

/// Split the quest book into the output directory tree.
///
/// Returns the number of files written: one global properties file, one
/// index file per chapter, and one file per chapter quest entry.
pub fn split_quests(doc: &QuestDocument, lang: &LangHelper, output: &Path) -> Result<usize> {
    // Stale output from the previous run; absence is fine.
    let _ = fs::remove_dir_all(output);

    let mut files_written = 0;

    let db = doc.quest_database()?;
    let mut quest_by_id: HashMap<i64, &Value> = HashMap::new();
    let mut db_positions: Vec<Option<i64>> = Vec::new();
    for (key, quest) in db {
        let index = entry_index(key)?;
        let id = quest_id(quest)?;
        set_position(&mut db_positions, index, id);
        quest_by_id.insert(id, quest);
    }

    let root = doc.root_object()?;
    let mut global_data = JsonMap::new();
    for (key, value) in root {
        if key != KEY_QUEST_DATABASE && key != KEY_QUEST_LINES {
            global_data.insert(key.clone(), value.clone());
        }
    }
    save_json(
        &output.join("_props.json"),
        &GlobalProps {
            data: Value::Object(global_data),
            ids: db_positions,
        },
        &mut files_written,
    )?;

    let mut chapter_names = UniqueNameGenerator::new();
    for (chapter_key, chapter) in doc.quest_lines()? {
        let chapter_map = as_object(chapter, "chapter")?;
        let bag = property_bag(chapter, "chapter")?;
        let folder = output
            .join(CHAPTERS_DIR)
            .join(chapter_names.allocate(lang, bag_text(bag, KEY_NAME, "chapter")?));

        let entries = as_object(
            chapter_map
                .get(KEY_QUESTS)
                .ok_or_else(|| Error::shape("chapter: missing quests:9"))?,
            KEY_QUESTS,
        )?;

        let mut chapter_positions: Vec<Option<i64>> = Vec::new();
        let mut quest_names = UniqueNameGenerator::new();
        for (entry_key, entry) in entries {
            let index = entry_index(entry_key)?;
            let entry_map = as_object(entry, "chapter quest entry")?;
            let id = entry_map
                .get(KEY_ENTRY_ID)
                .and_then(Value::as_i64)
                .ok_or_else(|| Error::shape("chapter quest entry: missing id:3"))?;
            set_position(&mut chapter_positions, index, id);

            // The entry's layout data travels with the quest file; the
            // ID is implied by the file itself.
            let mut pos = entry_map.clone();
            pos.remove(KEY_ENTRY_ID);

            let quest = *quest_by_id
                .get(&id)
                .ok_or(Error::UnknownQuestId { id })?;
            let quest_bag = property_bag(quest, "quest")?;
            let file_name = quest_names.allocate(lang, bag_text(quest_bag, KEY_NAME, "quest")?);
            save_json(
                &folder.join(format!("{file_name}.json")),
                &QuestFile {
                    pos: Value::Object(pos),
                    data: quest,
                },
                &mut files_written,
            )?;
        }

        let mut chapter_data = chapter_map.clone();
        chapter_data.remove(KEY_QUESTS);
        save_json(
            &folder.join("_props.json"),
            &ChapterProps {
                index: chapter_key,
                data: Value::Object(chapter_data),
                ids: chapter_positions,
            },
            &mut files_written,
        )?;
    }

    Ok(files_written)
}

fn set_position(positions: &mut Vec<Option<i64>>, index: usize, id: i64) {
    if positions.len() <= index {
        positions.resize(index + 1, None);
    }
    positions[index] = Some(id);
}

fn save_json<T: Serialize>(path: &Path, value: &T, files_written: &mut usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    *files_written += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::quests::parse_quests;
    use crate::transform::extract::{LangHelper, LangOptions};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use walkdir::WalkDir;

    fn no_lang() -> LangHelper {
        LangHelper::from_tables(LangOptions::default(), IndexMap::new())
    }

    fn sample_doc() -> QuestDocument {
        parse_quests(
            r#"{
                "format:8": "2.0.0",
                "questDatabase:9": {
                    "0:10": {
                        "questID:3": 10,
                        "preRequisites:11": [],
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Iron Ingot", "desc:8": "a"
                        } }
                    },
                    "1:10": {
                        "questID:3": 11,
                        "preRequisites:11": [10],
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Iron Ingot", "desc:8": "b"
                        } }
                    },
                    "3:10": {
                        "questID:3": 12,
                        "preRequisites:11": [],
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Lonely", "desc:8": "c"
                        } }
                    }
                },
                "questLines:9": {
                    "0:10": {
                        "lineID:3": 0,
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Getting Started", "desc:8": "d"
                        } },
                        "quests:9": {
                            "0:10": { "id:3": 10, "x:3": 0, "y:3": 24 },
                            "1:10": { "id:3": 11, "x:3": 48, "y:3": 24 }
                        }
                    },
                    "1:10": {
                        "lineID:3": 1,
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Getting Started", "desc:8": "e"
                        } },
                        "quests:9": {
                            "0:10": { "id:3": 12, "x:3": 0, "y:3": 0 }
                        }
                    }
                },
                "questSettings:10": { "betterquesting:10": { "editmode:1": 0 } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_file_count_is_one_plus_chapters_plus_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let count = split_quests(&sample_doc(), &no_lang(), tmp.path()).unwrap();
        // 1 global + 2 chapter indexes + 3 membership entries.
        assert_eq!(count, 6);

        let on_disk = WalkDir::new(tmp.path())
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .count();
        assert_eq!(on_disk, count);
    }

    #[test]
    fn test_layout_and_collision_handling() {
        let tmp = tempfile::tempdir().unwrap();
        split_quests(&sample_doc(), &no_lang(), tmp.path()).unwrap();

        let chapters = tmp.path().join(CHAPTERS_DIR);
        // Two chapters share a display name; the second gets a suffix.
        assert!(chapters.join("Getting Started").is_dir());
        assert!(chapters.join("Getting Started _0").is_dir());
        // Two quests in the first chapter share a display name.
        assert!(chapters.join("Getting Started/Iron Ingot.json").exists());
        assert!(chapters.join("Getting Started/Iron Ingot _0.json").exists());
        assert!(chapters.join("Getting Started/_props.json").exists());
    }

    #[test]
    fn test_position_arrays_reconstruct_entry_order() {
        let tmp = tempfile::tempdir().unwrap();
        split_quests(&sample_doc(), &no_lang(), tmp.path()).unwrap();

        let global: Value = serde_json::from_str(
            &std::fs::read_to_string(tmp.path().join("_props.json")).unwrap(),
        )
        .unwrap();
        // Database entry 2 is a gap in the source keys.
        assert_eq!(global["_IDs"], serde_json::json!([10, 11, null, 12]));
        assert_eq!(global["_data"]["format:8"], "2.0.0");
        assert!(global["_data"].get(KEY_QUEST_DATABASE).is_none());
        assert!(global["_data"].get(KEY_QUEST_LINES).is_none());

        let chapter: Value = serde_json::from_str(
            &std::fs::read_to_string(
                tmp.path().join(CHAPTERS_DIR).join("Getting Started/_props.json"),
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(chapter["_index"], "0:10");
        assert_eq!(chapter["_IDs"], serde_json::json!([10, 11]));
        assert!(chapter["_data"].get(KEY_QUESTS).is_none());
    }

    #[test]
    fn test_quest_file_carries_entry_position_without_id() {
        let tmp = tempfile::tempdir().unwrap();
        split_quests(&sample_doc(), &no_lang(), tmp.path()).unwrap();

        let quest: Value = serde_json::from_str(
            &std::fs::read_to_string(
                tmp.path()
                    .join(CHAPTERS_DIR)
                    .join("Getting Started/Iron Ingot _0.json"),
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(quest["_pos"]["x:3"], serde_json::json!(48));
        assert!(quest["_pos"].get(KEY_ENTRY_ID).is_none());
        assert_eq!(quest["_data"]["questID:3"], serde_json::json!(11));
    }

    #[test]
    fn test_previous_output_wiped() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join(CHAPTERS_DIR).join("Old Chapter");
        std::fs::create_dir_all(&stale).unwrap();
        std::fs::write(stale.join("stale.json"), "{}").unwrap();

        split_quests(&sample_doc(), &no_lang(), tmp.path()).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_dangling_membership_id_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = parse_quests(
            r#"{
                "questDatabase:9": {},
                "questLines:9": {
                    "0:10": {
                        "lineID:3": 0,
                        "properties:10": { "betterquesting:10": {
                            "name:8": "Broken", "desc:8": ""
                        } },
                        "quests:9": { "0:10": { "id:3": 99 } }
                    }
                }
            }"#,
        )
        .unwrap();
        let err = split_quests(&doc, &no_lang(), tmp.path()).unwrap_err();
        assert!(matches!(err, Error::UnknownQuestId { id: 99 }));
    }
}
