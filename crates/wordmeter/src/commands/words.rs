//! Words command: frequency table and ranked search.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordmeter_core::frequency::{self, FrequencyEntry};
use wordmeter_core::search;

use super::{display_name, load_text};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// Rank words against this query (`*` and `?` are wildcards).
    #[arg(short = 'Q', long)]
    pub query: Option<String>,

    /// Maximum number of rows to print.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Leave common stop words out of the table.
    #[arg(long)]
    pub no_stop_words: bool,
}

/// Settings the `words` command takes from configuration.
#[derive(Debug, Clone, Copy)]
pub struct WordsDefaults {
    /// Result limit when searching.
    pub search_limit: usize,
    /// Row limit when listing without a query.
    pub top_words: usize,
    /// Drop stop words unless the flag says otherwise.
    pub exclude_stop_words: bool,
}

#[derive(Serialize)]
struct WordsOutput<'a> {
    file: &'a str,
    total_words: usize,
    unique_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    words: Vec<FrequencyEntry>,
}

/// Print word frequencies for a file.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.file))]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    defaults: WordsDefaults,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, query = ?args.query, "executing words command");

    let content = load_text(&args.file, args.raw, max_input_bytes)?;
    let table = frequency::frequency(&content);
    let total_words = frequency::total_count(&table);
    let unique_words = frequency::unique_word_count(&table);

    let table = if args.no_stop_words || defaults.exclude_stop_words {
        frequency::filter_stop_words(&table)
    } else {
        table
    };

    let words = match args.query.as_deref() {
        Some(query) => search::search(
            query,
            &table,
            args.limit.unwrap_or(defaults.search_limit),
        ),
        None => table
            .into_iter()
            .take(args.limit.unwrap_or(defaults.top_words))
            .collect(),
    };

    let output = WordsOutput {
        file: display_name(&args.file),
        total_words,
        unique_words,
        query: args.query.as_deref(),
        words,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}: {} words, {} unique",
        output.file.bold(),
        output.total_words,
        output.unique_words
    );
    if output.words.is_empty() {
        if let Some(query) = output.query {
            println!("  no words match \"{query}\"");
        }
        return Ok(());
    }

    let width = output
        .words
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, entry) in output.words.iter().enumerate() {
        println!(
            "  {:>3}. {:<width$}  {}",
            (rank + 1).dimmed(),
            entry.word,
            entry.count.cyan(),
        );
    }

    Ok(())
}
