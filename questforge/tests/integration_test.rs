use questforge::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_sample_book(path: &Path) {
    // Keys deliberately out of order; numbers in spellings the rewrite
    // must normalize.
    fs::write(
        path,
        r#"{
            "questSettings:10": { "betterquesting:10": { "editmode:1": 1 } },
            "questLines:9": {
                "0:10": {
                    "lineID:3": 0,
                    "quests:9": {
                        "0:10": { "id:3": 1, "x:3": 0, "y:3": 0 },
                        "1:10": { "id:3": 2, "x:3": 24, "y:3": 0 },
                        "2:10": { "id:3": 9, "x:3": 48, "y:3": 0 }
                    },
                    "properties:10": { "betterquesting:10": {
                        "name:8": "Getting Started",
                        "desc:8": "The first chapter."
                    } }
                }
            },
            "format:8": "2.0.0",
            "questDatabase:9": {
                "0:10": {
                    "questID:3": 1,
                    "preRequisites:11": [],
                    "properties:10": { "betterquesting:10": {
                        "name:8": "Break a Tree",
                        "desc:8": "Punch it.",
                        "taskValue:6": 10000000
                    } }
                },
                "1:10": {
                    "questID:3": 2,
                    "preRequisites:11": [1],
                    "properties:10": { "betterquesting:10": {
                        "name:8": "Craft a Table",
                        "desc:8": "It's easy."
                    } }
                },
                "2:10": {
                    "questID:3": 9,
                    "preRequisites:11": [],
                    "properties:10": { "betterquesting:10": {
                        "name:8": "[Complete This Chapter]",
                        "desc:8": "Finish everything."
                    } }
                }
            }
        }"#,
    )
    .unwrap();
}

fn options(root: &Path) -> RunOptions {
    RunOptions {
        quests: root.join("DefaultQuests.json"),
        complete: "[Complete This Chapter]".to_string(),
        output: root.join("betterquesting"),
        change: true,
        lang: LangOptions {
            lang_path: root.join("lang"),
            lang_prefix: "bq".to_string(),
        },
    }
}

#[test]
fn test_full_run() {
    let tmp = tempdir().unwrap();
    let opts = options(tmp.path());
    write_sample_book(&opts.quests);

    let summary = run(&opts).unwrap();
    // 3 quests x 2 fields + 1 chapter x 2 fields.
    assert_eq!(summary.lang_changes, 8);
    assert_eq!(summary.relinked, 1);
    // 1 global props + 1 chapter index + 3 quest files.
    assert_eq!(summary.files_written, 5);

    let book = fs::read_to_string(&opts.quests).unwrap();

    // Canonical top-level key order.
    let positions: Vec<usize> = [
        "\"format:8\"",
        "\"questDatabase:9\"",
        "\"questLines:9\"",
        "\"questSettings:10\"",
    ]
    .iter()
    .map(|key| book.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Edit mode reset and display text externalized.
    assert!(book.contains("\"editmode:1\": 0"));
    assert!(book.contains("\"name:8\": \"bq.quest1.name\""));
    assert!(!book.contains("Break a Tree"));

    // Numeric and apostrophe spellings normalized.
    assert!(book.contains("\"taskValue:6\": 1.0E7"));

    // Lang table holds the moved text, apostrophe intact.
    let lang = fs::read_to_string(opts.lang.lang_path.join("en_us.lang")).unwrap();
    assert!(lang.contains("bq.quest1.name=Break a Tree"));
    assert!(lang.contains("bq.quest2.desc=It's easy."));

    // The sentinel now depends on the chapter's single leaf quest.
    let doc = read_quests(&opts.quests).unwrap();
    let db = doc.quest_database().unwrap();
    let sentinel = db
        .values()
        .find(|q| q["questID:3"] == serde_json::json!(9))
        .unwrap();
    assert_eq!(sentinel["preRequisites:11"], serde_json::json!([2]));

    // Split tree layout, named from the lang tables.
    let chapter = opts.output.join("Chapters/Getting Started");
    assert!(opts.output.join("_props.json").exists());
    assert!(chapter.join("_props.json").exists());
    assert!(chapter.join("Break a Tree.json").exists());
    assert!(chapter.join("Craft a Table.json").exists());
    assert!(chapter.join("[Complete This Chapter].json").exists());
}

#[test]
fn test_second_run_is_stable() {
    let tmp = tempdir().unwrap();
    let opts = options(tmp.path());
    write_sample_book(&opts.quests);

    run(&opts).unwrap();
    let first = fs::read_to_string(&opts.quests).unwrap();

    let summary = run(&opts).unwrap();
    assert_eq!(summary.lang_changes, 0);
    assert_eq!(fs::read_to_string(&opts.quests).unwrap(), first);
}

#[test]
fn test_no_change_mode_leaves_content_alone() {
    let tmp = tempdir().unwrap();
    let mut opts = options(tmp.path());
    opts.change = false;
    write_sample_book(&opts.quests);

    let summary = run(&opts).unwrap();
    assert_eq!(summary.lang_changes, 0);
    assert_eq!(summary.relinked, 0);

    let book = fs::read_to_string(&opts.quests).unwrap();
    // Still canonicalized and split, but text and edit mode untouched.
    assert!(book.contains("\"editmode:1\": 1"));
    assert!(book.contains("Break a Tree"));
    assert!(opts.output.join("_props.json").exists());
}

#[test]
fn test_missing_book_reports_path() {
    let tmp = tempdir().unwrap();
    let opts = options(tmp.path());

    let err = run(&opts).unwrap_err();
    assert!(matches!(err, Error::DocumentNotFound { .. }));
    assert!(err.to_string().contains("--quests"));
}
