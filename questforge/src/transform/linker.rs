//! Tail-quest linking
//!
//! Quests whose resolved display name matches the configured sentinel
//! ("[Complete This Chapter]" by default) are rewired: their
//! prerequisites become the current leaf quests of their chapter, so the
//! completion quest always depends on every open line of the chapter.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::formats::quests::QuestDocument;
use crate::formats::quests::document::{
    KEY_ENTRY_ID, KEY_NAME, KEY_QUESTS, as_object, bag_text, prerequisites, property_bag,
    quest_id, set_prerequisites,
};
use crate::transform::extract::LangHelper;

/// Display name of the trophy quest that must never become a
/// prerequisite of the sentinel.
const CHAPTER_DONE_NAME: &str = "The chapter is complete!";

/// Rewire every sentinel quest's prerequisites to its chapter's current
/// leaves. Returns the number of quests rewired.
///
/// A sentinel not contained in any chapter is skipped. If a quest ever
/// appears in more than one chapter the first chapter in document order
/// wins; the format does not guard against that.
pub fn connect_tails(
    doc: &mut QuestDocument,
    lang: &LangHelper,
    sentinel: &str,
) -> Result<usize> {
    // Read-only scan first so later mutations cannot affect which quests
    // count as sentinels.
    let mut sentinel_ids = Vec::new();
    for quest in doc.quest_database()?.values() {
        let id = quest_id(quest)?;
        let bag = property_bag(quest, "quest")?;
        let name = bag_text(bag, KEY_NAME, "quest")?;
        if lang.localized_name(name) == sentinel {
            sentinel_ids.push(id);
        }
    }

    let mut rewired = 0;
    for id in sentinel_ids {
        // The sentinel's own stale edges must not keep other quests
        // non-leaf, so clear them before computing the leaf set.
        clear_prerequisites(doc, id)?;
        if let Some(leaves) = chapter_leaves(doc, lang, id)? {
            let quest = quest_by_id_mut(doc, id)?;
            set_prerequisites(quest, &leaves, "sentinel quest")?;
            rewired += 1;
        }
    }
    Ok(rewired)
}

/// Leaf quests of the first chapter containing `sentinel_id`, in chapter
/// entry order; `None` when no chapter contains it.
fn chapter_leaves(
    doc: &QuestDocument,
    lang: &LangHelper,
    sentinel_id: i64,
) -> Result<Option<Vec<i64>>> {
    let Some(member_ids) = containing_chapter_ids(doc, sentinel_id)? else {
        return Ok(None);
    };

    let db = doc.quest_database()?;

    // Every quest ID referenced as a prerequisite anywhere.
    let mut referenced: HashSet<i64> = HashSet::new();
    for quest in db.values() {
        referenced.extend(prerequisites(quest, "quest")?);
    }

    let mut by_id: HashMap<i64, &Value> = HashMap::new();
    for quest in db.values() {
        by_id.insert(quest_id(quest)?, quest);
    }

    let mut leaves = Vec::new();
    for id in member_ids {
        let quest = by_id.get(&id).ok_or(Error::UnknownQuestId { id })?;
        // The sentinel cannot be its own prerequisite.
        if id == sentinel_id || referenced.contains(&id) {
            continue;
        }
        let bag = property_bag(quest, "quest")?;
        let name = bag_text(bag, KEY_NAME, "quest")?;
        if lang.localized_name(name) == CHAPTER_DONE_NAME {
            continue;
        }
        leaves.push(id);
    }
    Ok(Some(leaves))
}

/// Membership quest IDs of the first chapter containing `target`.
fn containing_chapter_ids(doc: &QuestDocument, target: i64) -> Result<Option<Vec<i64>>> {
    for chapter in doc.quest_lines()?.values() {
        let map = as_object(chapter, "chapter")?;
        let Some(entries) = map.get(KEY_QUESTS) else {
            continue;
        };
        let entries = as_object(entries, KEY_QUESTS)?;
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries.values() {
            let entry = as_object(entry, "chapter quest entry")?;
            let id = entry
                .get(KEY_ENTRY_ID)
                .and_then(Value::as_i64)
                .ok_or_else(|| Error::shape("chapter quest entry: missing id:3"))?;
            ids.push(id);
        }
        if ids.contains(&target) {
            return Ok(Some(ids));
        }
    }
    Ok(None)
}

fn clear_prerequisites(doc: &mut QuestDocument, id: i64) -> Result<()> {
    let quest = quest_by_id_mut(doc, id)?;
    set_prerequisites(quest, &[], "sentinel quest")
}

fn quest_by_id_mut(doc: &mut QuestDocument, id: i64) -> Result<&mut Value> {
    for quest in doc.quest_database_mut()?.values_mut() {
        if quest_id(quest)? == id {
            return Ok(quest);
        }
    }
    Err(Error::UnknownQuestId { id })
}
