//! Quest book document model
//!
//! The quest book is a loosely-shaped JSON tree with tagged keys; rather
//! than mirroring every blob into structs, the document keeps the raw
//! `serde_json::Value` (order-preserving) and exposes typed accessors for
//! the handful of well-known paths the transformation passes touch.
//! Anything off-schema surfaces as [`Error::UnexpectedShape`].

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Format version string.
pub const KEY_FORMAT: &str = "format:8";
/// Map of positional keys to quest objects.
pub const KEY_QUEST_DATABASE: &str = "questDatabase:9";
/// Map of positional keys to chapter (quest line) objects.
pub const KEY_QUEST_LINES: &str = "questLines:9";
/// Global settings block.
pub const KEY_QUEST_SETTINGS: &str = "questSettings:10";
/// Mod-scoped property bag nested under settings and properties blocks.
pub const KEY_BETTERQUESTING: &str = "betterquesting:10";
/// Edit-mode flag inside the settings bag.
pub const KEY_EDIT_MODE: &str = "editmode:1";
/// Quest integer ID.
pub const KEY_QUEST_ID: &str = "questID:3";
/// Chapter integer ID.
pub const KEY_LINE_ID: &str = "lineID:3";
/// Quest prerequisite ID array.
pub const KEY_PREREQUISITES: &str = "preRequisites:11";
/// Properties block on quests and chapters.
pub const KEY_PROPERTIES: &str = "properties:10";
/// Display name inside the property bag.
pub const KEY_NAME: &str = "name:8";
/// Description inside the property bag.
pub const KEY_DESC: &str = "desc:8";
/// Chapter membership entry map.
pub const KEY_QUESTS: &str = "quests:9";
/// Quest ID inside a chapter membership entry.
pub const KEY_ENTRY_ID: &str = "id:3";

/// Order-preserving JSON object, the node type of the whole tree.
pub type JsonMap = Map<String, Value>;

/// An in-memory quest book.
#[derive(Debug, Clone)]
pub struct QuestDocument {
    /// The full document tree.
    pub root: Value,
}

/// View a value as an object, naming the spot for the error message.
pub fn as_object<'a>(value: &'a Value, context: &str) -> Result<&'a JsonMap> {
    value.as_object().ok_or_else(|| Error::shape(context))
}

/// Mutable counterpart of [`as_object`].
pub fn as_object_mut<'a>(value: &'a mut Value, context: &str) -> Result<&'a mut JsonMap> {
    value.as_object_mut().ok_or_else(|| Error::shape(context))
}

fn field<'a>(map: &'a JsonMap, key: &str, context: &str) -> Result<&'a Value> {
    map.get(key)
        .ok_or_else(|| Error::shape(format!("{context}: missing {key}")))
}

impl QuestDocument {
    /// Wrap a parsed tree. The root must be an object.
    pub fn new(root: Value) -> Result<Self> {
        as_object(&root, "document root")?;
        Ok(QuestDocument { root })
    }

    /// The document root as an object.
    pub fn root_object(&self) -> Result<&JsonMap> {
        as_object(&self.root, "document root")
    }

    /// The quest database map (positional key → quest).
    pub fn quest_database(&self) -> Result<&JsonMap> {
        let root = self.root_object()?;
        as_object(field(root, KEY_QUEST_DATABASE, "document")?, KEY_QUEST_DATABASE)
    }

    /// Mutable quest database map.
    pub fn quest_database_mut(&mut self) -> Result<&mut JsonMap> {
        let root = as_object_mut(&mut self.root, "document root")?;
        let db = root
            .get_mut(KEY_QUEST_DATABASE)
            .ok_or_else(|| Error::shape("document: missing questDatabase:9"))?;
        as_object_mut(db, KEY_QUEST_DATABASE)
    }

    /// The chapter index map (positional key → chapter).
    pub fn quest_lines(&self) -> Result<&JsonMap> {
        let root = self.root_object()?;
        as_object(field(root, KEY_QUEST_LINES, "document")?, KEY_QUEST_LINES)
    }

    /// Mutable chapter index map.
    pub fn quest_lines_mut(&mut self) -> Result<&mut JsonMap> {
        let root = as_object_mut(&mut self.root, "document root")?;
        let lines = root
            .get_mut(KEY_QUEST_LINES)
            .ok_or_else(|| Error::shape("document: missing questLines:9"))?;
        as_object_mut(lines, KEY_QUEST_LINES)
    }

    /// Set the edit-mode flag under `questSettings:10`/`betterquesting:10`.
    pub fn set_edit_mode(&mut self, value: i64) -> Result<()> {
        let root = as_object_mut(&mut self.root, "document root")?;
        let settings = root
            .get_mut(KEY_QUEST_SETTINGS)
            .ok_or_else(|| Error::shape("document: missing questSettings:10"))?;
        let bag = as_object_mut(settings, KEY_QUEST_SETTINGS)?
            .get_mut(KEY_BETTERQUESTING)
            .ok_or_else(|| Error::shape("questSettings:10: missing betterquesting:10"))?;
        as_object_mut(bag, KEY_BETTERQUESTING)?
            .insert(KEY_EDIT_MODE.to_string(), Value::from(value));
        Ok(())
    }
}

/// Integer ID of a quest object.
pub fn quest_id(quest: &Value) -> Result<i64> {
    let map = as_object(quest, "quest")?;
    field(map, KEY_QUEST_ID, "quest")?
        .as_i64()
        .ok_or_else(|| Error::shape("quest: questID:3 is not an integer"))
}

/// Integer ID of a chapter object.
pub fn line_id(chapter: &Value) -> Result<i64> {
    let map = as_object(chapter, "chapter")?;
    field(map, KEY_LINE_ID, "chapter")?
        .as_i64()
        .ok_or_else(|| Error::shape("chapter: lineID:3 is not an integer"))
}

/// The `betterquesting:10` property bag of a quest or chapter.
pub fn property_bag<'a>(entity: &'a Value, context: &str) -> Result<&'a JsonMap> {
    let map = as_object(entity, context)?;
    let props = as_object(field(map, KEY_PROPERTIES, context)?, KEY_PROPERTIES)?;
    as_object(
        field(props, KEY_BETTERQUESTING, KEY_PROPERTIES)?,
        KEY_BETTERQUESTING,
    )
}

/// Mutable counterpart of [`property_bag`].
pub fn property_bag_mut<'a>(entity: &'a mut Value, context: &str) -> Result<&'a mut JsonMap> {
    let map = as_object_mut(entity, context)?;
    let props = map
        .get_mut(KEY_PROPERTIES)
        .ok_or_else(|| Error::shape(format!("{context}: missing {KEY_PROPERTIES}")))?;
    let bag = as_object_mut(props, KEY_PROPERTIES)?
        .get_mut(KEY_BETTERQUESTING)
        .ok_or_else(|| Error::shape(format!("{KEY_PROPERTIES}: missing {KEY_BETTERQUESTING}")))?;
    as_object_mut(bag, KEY_BETTERQUESTING)
}

/// A text field (`name:8` or `desc:8`) from a property bag.
pub fn bag_text<'a>(bag: &'a JsonMap, key: &str, context: &str) -> Result<&'a str> {
    field(bag, key, context)?
        .as_str()
        .ok_or_else(|| Error::shape(format!("{context}: {key} is not a string")))
}

/// Prerequisite quest IDs of a quest.
pub fn prerequisites(quest: &Value, context: &str) -> Result<Vec<i64>> {
    let map = as_object(quest, context)?;
    let list = field(map, KEY_PREREQUISITES, context)?
        .as_array()
        .ok_or_else(|| Error::shape(format!("{context}: {KEY_PREREQUISITES} is not an array")))?;
    list.iter()
        .map(|v| {
            v.as_i64()
                .ok_or_else(|| Error::shape(format!("{context}: non-integer prerequisite")))
        })
        .collect()
}

/// Replace a quest's prerequisite list.
pub fn set_prerequisites(quest: &mut Value, ids: &[i64], context: &str) -> Result<()> {
    let map = as_object_mut(quest, context)?;
    map.insert(
        KEY_PREREQUISITES.to_string(),
        Value::Array(ids.iter().map(|&id| Value::from(id)).collect()),
    );
    Ok(())
}
