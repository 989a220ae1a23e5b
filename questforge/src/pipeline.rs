//! End-to-end quest book processing
//!
//! One run loads the book, canonicalizes it, optionally applies the
//! mutating passes, writes it back with literal fidelity, and splits it
//! into the output tree. Every invocation is a fresh pass over freshly
//! loaded input; nothing is cached across runs.

use std::mem;
use std::path::PathBuf;

use crate::error::Result;
use crate::formats::quests::{read_quests, write_quests};
use crate::transform::{LangHelper, LangOptions, canonicalize, connect_tails, split_quests};

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the monolithic quest book.
    pub quests: PathBuf,
    /// Display text marking a chapter's completion sentinel quest.
    pub complete: String,
    /// Root of the split output tree.
    pub output: PathBuf,
    /// Whether the mutating passes (edit-mode reset, lang extraction,
    /// tail linking) run at all.
    pub change: bool,
    /// Locale table location and key prefix.
    pub lang: LangOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            quests: PathBuf::from("config/betterquesting/DefaultQuests.json"),
            complete: "[Complete This Chapter]".to_string(),
            output: PathBuf::from("betterquesting"),
            change: true,
            lang: LangOptions::default(),
        }
    }
}

/// What one run did.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Text fields newly externalized into lang tables.
    pub lang_changes: usize,
    /// Sentinel quests whose prerequisites were rewired.
    pub relinked: usize,
    /// Files emitted by the splitter.
    pub files_written: usize,
}

/// Run the full pipeline.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    tracing::info!("loading {:?}", options.quests);
    let mut doc = read_quests(&options.quests)?;

    tracing::info!("sorting quest book keys");
    doc.root = canonicalize(mem::take(&mut doc.root));

    let mut lang = LangHelper::load(options.lang.clone())?;

    let mut lang_changes = 0;
    let mut relinked = 0;
    if options.change {
        tracing::info!("resetting edit mode to 0");
        doc.set_edit_mode(0)?;

        tracing::info!("applying lang codes");
        lang_changes = lang.apply_lang_codes(&mut doc)?;
        tracing::info!(changes = lang_changes, "lang codes applied");

        tracing::info!("connecting tail quests to {:?}", options.complete);
        relinked = connect_tails(&mut doc, &lang, &options.complete)?;
        tracing::info!(quests = relinked, "tail quests connected");
    }

    tracing::info!("saving {:?}", options.quests);
    write_quests(&doc, &options.quests)?;

    tracing::info!("splitting quests into {:?}", options.output);
    let files_written = split_quests(&doc, &lang, &options.output)?;
    tracing::info!(files = files_written, "split complete");

    Ok(RunSummary {
        lang_changes,
        relinked,
        files_written,
    })
}
