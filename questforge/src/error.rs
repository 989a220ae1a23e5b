//! Error types for `QuestForge`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `QuestForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Quest Book Errors ====================
    /// The quest book file does not exist on disk.
    #[error("quest book not found: {path} (specify it with --quests)")]
    DocumentNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The document tree does not match the quest book schema.
    #[error("unexpected document shape: {context}")]
    UnexpectedShape {
        /// Where in the tree the shape violation was found.
        context: String,
    },

    /// A chapter membership entry references a quest ID that is not in
    /// the quest database.
    #[error("chapter references unknown quest ID {id}")]
    UnknownQuestId {
        /// The dangling quest ID.
        id: i64,
    },

    /// A field key does not carry a recognized type-tag suffix.
    #[error("invalid tagged key: {key}")]
    InvalidTaggedKey {
        /// The offending key.
        key: String,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

impl Error {
    /// Shorthand for a shape violation at a named spot in the tree.
    pub fn shape(context: impl Into<String>) -> Self {
        Error::UnexpectedShape {
            context: context.into(),
        }
    }
}

/// A specialized Result type for `QuestForge` operations.
pub type Result<T> = std::result::Result<T, Error>;
