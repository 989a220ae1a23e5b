//! `.lang` file reading

use std::fs;
use std::path::Path;

use super::LangTable;
use crate::error::Result;

/// Read a locale table from disk.
///
/// A missing file yields an empty table: locale discovery decides which
/// locales exist, and an absent table simply has no translations yet.
pub fn read_lang<P: AsRef<Path>>(path: P) -> Result<LangTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(LangTable::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_lang(&content))
}

/// Parse table text. Lines without a `=` separator are skipped.
#[must_use]
pub fn parse_lang(content: &str) -> LangTable {
    let mut table = LangTable::new();
    for line in content.lines() {
        if let Some((key, value)) = line.split_once('=') {
            table.insert(key, value);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lang() {
        let table = parse_lang("bq.quest1.name=First\nbq.quest1.desc=Do it%n now\n\nnot a pair\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("bq.quest1.name"), Some("First"));
        assert_eq!(table.get("bq.quest1.desc"), Some("Do it%n now"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let table = parse_lang("bq.quest1.desc=1+1=2");
        assert_eq!(table.get("bq.quest1.desc"), Some("1+1=2"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        assert!(read_lang("no/such/en_us.lang").unwrap().is_empty());
    }
}
