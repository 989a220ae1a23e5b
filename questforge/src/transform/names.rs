//! Unique file name allocation
//!
//! Display names collide ("Iron Ingot" appears in half the packs out
//! there), so each scope gets its own generator: one for chapter folder
//! names, and a fresh one per chapter for the quest files inside it.

use std::collections::HashSet;

use crate::transform::extract::LangHelper;
use crate::utils::sanitize_component;

/// Allocates collision-free, filesystem-safe slugs within one scope.
#[derive(Debug, Default)]
pub struct UniqueNameGenerator {
    taken: HashSet<String>,
}

impl UniqueNameGenerator {
    /// Create a generator with no names taken.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a slug for a display value.
    ///
    /// Externalized keys are resolved to primary-locale text first, then
    /// the text is sanitized; on collision an ` _<n>` suffix counts up
    /// until the name is free.
    pub fn allocate(&mut self, lang: &LangHelper, display: &str) -> String {
        let base = sanitize_component(lang.localized_name(display));
        let mut candidate = base.clone();
        let mut counter = 0u32;
        while self.taken.contains(&candidate) {
            candidate = format!("{base} _{counter}");
            counter += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
