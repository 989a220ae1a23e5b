use std::path::PathBuf;

use clap::Parser;

use questforge::pipeline::{RunOptions, run};
use questforge::transform::LangOptions;

#[derive(Parser)]
#[command(name = "questforge")]
#[command(version, about = "BetterQuesting quest book maintenance", long_about = None)]
struct Cli {
    /// Path to the quest book
    #[arg(long, default_value = "config/betterquesting/DefaultQuests.json")]
    quests: PathBuf,

    /// Display name of the chapter completion quest
    #[arg(long, default_value = "[Complete This Chapter]")]
    complete: String,

    /// Output directory for the split quest tree
    #[arg(short, long, default_value = "betterquesting")]
    output: PathBuf,

    /// Only canonicalize and split; skip the mutating passes
    #[arg(long)]
    no_change: bool,

    /// Directory holding the .lang locale tables
    #[arg(long, default_value = "resources/betterquesting/lang/")]
    lang_path: PathBuf,

    /// Prefix for generated lang keys
    #[arg(long, default_value = "bq")]
    lang_prefix: String,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let options = RunOptions {
        quests: cli.quests,
        complete: cli.complete,
        output: cli.output,
        change: !cli.no_change,
        lang: LangOptions {
            lang_path: cli.lang_path,
            lang_prefix: cli.lang_prefix,
        },
    };

    let summary = run(&options)?;
    println!(
        "✓ Done: {} lang changes, {} quests relinked, {} files written",
        summary.lang_changes, summary.relinked, summary.files_written
    );

    Ok(())
}
