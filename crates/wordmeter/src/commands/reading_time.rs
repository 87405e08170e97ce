//! Reading-time command.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordmeter_core::metrics::{self, ReadingTime};
use wordmeter_core::text;

use super::{display_name, load_text};

/// Arguments for the `reading-time` subcommand.
#[derive(Args, Debug)]
pub struct ReadingTimeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// Reading speed in words per minute.
    #[arg(long)]
    pub wpm: Option<f64>,
}

#[derive(Serialize)]
struct ReadingTimeOutput<'a> {
    file: &'a str,
    words: usize,
    words_per_minute: f64,
    minutes: f64,
    breakdown: ReadingTime,
    readable: String,
}

/// Estimate how long a file takes to read.
#[instrument(name = "cmd_reading_time", skip_all, fields(file = %args.file))]
pub fn cmd_reading_time(
    args: ReadingTimeArgs,
    global_json: bool,
    config_wpm: f64,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, wpm = ?args.wpm, "executing reading-time command");

    let wpm = args.wpm.unwrap_or(config_wpm);
    if !(wpm > 0.0 && wpm.is_finite()) {
        bail!("--wpm must be a positive number, got {wpm}");
    }

    let content = load_text(&args.file, args.raw, max_input_bytes)?;
    let minutes = metrics::reading_time_minutes(&content, wpm);
    let output = ReadingTimeOutput {
        file: display_name(&args.file),
        words: text::word_count(&content),
        words_per_minute: wpm,
        minutes,
        breakdown: ReadingTime::from_minutes(minutes),
        readable: metrics::reading_time_readable(&content, wpm),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}: {} ({} words at {wpm} wpm)",
            output.file.bold(),
            output.readable.green(),
            output.words,
        );
    }

    Ok(())
}
