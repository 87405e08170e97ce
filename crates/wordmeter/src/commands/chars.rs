//! Chars command: character classification counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::CharacterCounts;

use super::{display_name, read_input_file};

/// Arguments for the `chars` subcommand.
#[derive(Args, Debug)]
pub struct CharsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Count characters by class. Markdown is counted as written.
#[instrument(name = "cmd_chars", skip_all, fields(file = %args.file))]
pub fn cmd_chars(
    args: CharsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing chars command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let counts = CharacterCounts::from_text(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{}", display_name(&args.file).bold());
    let rows = [
        ("Characters", counts.total),
        ("Without whitespace", counts.no_whitespace),
        ("Letters", counts.letters),
        ("Uppercase", counts.uppercase),
        ("Lowercase", counts.lowercase),
        ("Digits", counts.digits),
        ("Whitespace", counts.whitespace),
        ("Spaces", counts.spaces),
        ("Tabs", counts.tabs),
        ("Newlines", counts.newlines),
        ("Punctuation", counts.punctuation),
        ("Special", counts.special),
        ("Emoji", counts.emoji),
        ("ASCII", counts.ascii),
        ("Non-ASCII", counts.non_ascii),
        ("Vowels", counts.vowels),
        ("Consonants", counts.consonants),
    ];
    for (label, value) in rows {
        println!("  {:<20} {value}", format!("{label}:").dimmed());
    }

    Ok(())
}
