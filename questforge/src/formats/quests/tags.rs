//! Tagged-key utilities - centralized type-tag handling for quest book keys
//!
//! Every key in a quest book carries an NBT-style numeric suffix naming
//! the serialization kind of its value: `"questID:3"`, `"name:8"`,
//! `"questDatabase:9"`, `"properties:10"`. Positional keys inside the
//! database and chapter maps additionally encode their entry index in
//! the name segment (`"12:10"`).

use crate::error::{Error, Result};

/// Serialization kind encoded in a key's numeric suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// Byte, short, int, or long (`:1`, `:2`, `:3`, `:4`).
    Integer,
    /// Single-precision float (`:5`).
    Float,
    /// Double-precision float (`:6`).
    Double,
    /// Text (`:8`).
    String,
    /// Ordered list, including int arrays (`:9`, `:7`, `:11`).
    List,
    /// Ordered map (`:10`).
    Compound,
}

impl TypeTag {
    /// Map a numeric tag suffix to its kind.
    #[must_use]
    pub fn from_suffix(suffix: u8) -> Option<Self> {
        match suffix {
            1..=4 => Some(TypeTag::Integer),
            5 => Some(TypeTag::Float),
            6 => Some(TypeTag::Double),
            8 => Some(TypeTag::String),
            7 | 9 | 11 => Some(TypeTag::List),
            10 => Some(TypeTag::Compound),
            _ => None,
        }
    }

    /// True for both float kinds.
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, TypeTag::Float | TypeTag::Double)
    }
}

/// A key split into its name segment and type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedKey<'a> {
    /// The part before the last `:`.
    pub name: &'a str,
    /// The decoded type tag.
    pub tag: TypeTag,
}

/// Split `"name:8"` into `("name", TypeTag::String)`.
pub fn parse_key(key: &str) -> Result<TaggedKey<'_>> {
    let (name, suffix) = key
        .rsplit_once(':')
        .ok_or_else(|| Error::InvalidTaggedKey { key: key.into() })?;
    let tag = suffix
        .parse::<u8>()
        .ok()
        .and_then(TypeTag::from_suffix)
        .ok_or_else(|| Error::InvalidTaggedKey { key: key.into() })?;
    Ok(TaggedKey { name, tag })
}

/// Parse the entry index from a positional key like `"12:10"`.
pub fn entry_index(key: &str) -> Result<usize> {
    let name = key.split(':').next().unwrap_or(key);
    name.parse::<usize>()
        .map_err(|_| Error::InvalidTaggedKey { key: key.into() })
}
