//! Sentences command: numbered sentences or paragraphs.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::text;

use super::{display_name, load_text};

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// List paragraphs instead of sentences.
    #[arg(long)]
    pub paragraphs: bool,
}

/// Print the sentences (or paragraphs) of a file, one per line.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, paragraphs = args.paragraphs, "executing sentences command");

    let content = load_text(&args.file, args.raw, max_input_bytes)?;
    let items: Vec<String> = if args.paragraphs {
        text::paragraphs(&content)
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        text::segment(&content)
    };

    if global_json {
        let key = if args.paragraphs { "paragraphs" } else { "sentences" };
        let output = serde_json::json!({
            "file": display_name(&args.file),
            "count": items.len(),
            key: items,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let unit = if args.paragraphs { "paragraphs" } else { "sentences" };
    println!("{}: {} {unit}", display_name(&args.file).bold(), items.len());
    for (idx, item) in items.iter().enumerate() {
        println!("{:>4}  {item}", (idx + 1).dimmed());
    }

    Ok(())
}
