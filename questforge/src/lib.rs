//! # QuestForge
//!
//! A pure-Rust library for maintaining BetterQuesting quest books.
//!
//! ## What it does
//!
//! - **Canonicalization** - Natural-ordered keys so diffs stay stable
//! - **Lang extraction** - Display strings move into `.lang` locale tables
//! - **Tail linking** - Chapter completion quests depend on every open leaf
//! - **Literal fidelity** - Numeric and apostrophe spellings survive rewrites
//! - **Splitting** - One reviewable JSON file per quest and chapter
//!
//! ## Quick Start
//!
//! ```no_run
//! use questforge::pipeline::{RunOptions, run};
//!
//! let summary = run(&RunOptions::default())?;
//! println!(
//!     "{} lang changes, {} files written",
//!     summary.lang_changes, summary.files_written
//! );
//! # Ok::<(), questforge::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use questforge::prelude::*;
//!
//! // Now you have access to:
//! // - QuestDocument, LangTable, LangHelper
//! // - RunOptions, RunSummary, run
//! // - Error, Result, and more
//! ```

pub mod error;
pub mod formats;
pub mod pipeline;
pub mod transform;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::lang::{LangTable, read_lang, write_lang};
    pub use crate::formats::quests::{
        QuestDocument, TaggedKey, TypeTag, parse_quests, read_quests, serialize_quests,
        write_quests,
    };
    pub use crate::pipeline::{RunOptions, RunSummary, run};
    pub use crate::transform::{
        DEFAULT_LOCALE, LangHelper, LangOptions, UniqueNameGenerator, canonicalize, connect_tails,
        split_quests,
    };
    pub use crate::utils::{natural_cmp, sanitize_component};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
