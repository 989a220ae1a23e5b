//! Quest book transformation passes
//!
//! Each pass lives in its own module and runs over the in-memory
//! document: canonical key ordering, display-string externalization,
//! sentinel tail linking, and the split into per-quest files.

pub mod canonicalize;
pub mod extract;
pub mod linker;
pub mod names;
pub mod split;

pub use canonicalize::canonicalize;
pub use extract::{DEFAULT_LOCALE, LangHelper, LangOptions};
pub use linker::connect_tails;
pub use names::UniqueNameGenerator;
pub use split::split_quests;
