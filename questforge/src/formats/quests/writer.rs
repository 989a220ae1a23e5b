//! Quest book serialization with literal fidelity
//!
//! The game's own parser is strict about numeric and string literal
//! spellings, so the rewritten book is post-processed line by line after
//! pretty-printing:
//!
//! 1. double-tagged `e+` exponentials are respelled with an uppercase `E`,
//! 2. double-tagged powers of ten of at least 1e7 become `1.0E<n>`,
//! 3. float- and double-tagged bare integers gain a `.0`,
//! 4. the first apostrophe in a string-tagged value becomes `'`.
//!
//! Numeric literals that need no fix round-trip byte-for-byte because the
//! tree is parsed with `arbitrary_precision`. These rules apply only to
//! the monolithic book; split files are plain structural JSON.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::document::QuestDocument;
use crate::error::Result;

fn exponent_rule() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^(\s*"[^:]+:6": -?\d+(?:\.\d+)?)e\+(\d+)(,?)$"#).expect("valid regex")
    })
}

fn power_of_ten_rule() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^(\s*"[^:]+:6": )1(0{7,})(,?)$"#).expect("valid regex")
    })
}

fn bare_integer_rule() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^(\s*"[^:]+:(?:6|5)": -?\d+)(,?)$"#).expect("valid regex")
    })
}

fn apostrophe_rule() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?m)^\s*"[^:]+:8": ".*'.*",?$"#).expect("valid regex"))
}

/// Apply the four literal-fidelity rules to pretty-printed book text.
#[must_use]
pub fn apply_literal_fidelity(text: &str) -> String {
    // Restore e+ values
    let text = exponent_rule().replace_all(text, "${1}E${2}${3}");
    // Add exponents for round numbers
    let text = power_of_ten_rule().replace_all(&text, |caps: &regex::Captures<'_>| {
        format!("{}1.0E{}{}", &caps[1], caps[2].len(), &caps[3])
    });
    // Add decimal to float values
    let text = bare_integer_rule().replace_all(&text, "${1}.0${2}");
    // Change apostrophes to codes
    let text = apostrophe_rule().replace_all(&text, |caps: &regex::Captures<'_>| {
        caps[0].replacen('\'', "\\u0027", 1)
    });
    text.into_owned()
}

/// Serialize the quest book to its on-disk text form.
pub fn serialize_quests(doc: &QuestDocument) -> Result<String> {
    let text = serde_json::to_string_pretty(&doc.root)?;
    Ok(apply_literal_fidelity(&text))
}

/// Write the quest book back to disk.
pub fn write_quests<P: AsRef<Path>>(doc: &QuestDocument, path: P) -> Result<()> {
    fs::write(path, serialize_quests(doc)?)?;
    Ok(())
}
