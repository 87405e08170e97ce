//! Stats command: the full text report for one or more files.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordmeter_core::{ReportOptions, TextReport};

use super::{display_name, load_text};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Files to analyze (`-` for stdin).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// Reading speed in words per minute.
    #[arg(long)]
    pub wpm: Option<f64>,

    /// Number of top words to show.
    #[arg(long)]
    pub top: Option<usize>,

    /// Leave common stop words out of the top words.
    #[arg(long)]
    pub no_stop_words: bool,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: TextReport,
}

/// Print every metric for each file.
#[instrument(name = "cmd_stats", skip_all, fields(files = args.files.len()))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    defaults: ReportOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing stats command");

    let options = ReportOptions {
        words_per_minute: args.wpm.unwrap_or(defaults.words_per_minute),
        top_words: args.top.unwrap_or(defaults.top_words),
        exclude_stop_words: args.no_stop_words || defaults.exclude_stop_words,
    };
    if !(options.words_per_minute > 0.0 && options.words_per_minute.is_finite()) {
        anyhow::bail!("--wpm must be a positive number, got {}", options.words_per_minute);
    }

    let progress = if args.files.len() > 1 && !global_json {
        Some(progress_bar(args.files.len())?)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref pb) = progress {
            pb.set_message(display_name(file).to_string());
        }
        let content = load_text(file, args.raw, max_input_bytes)?;
        reports.push(FileReport {
            file: display_name(file),
            report: TextReport::analyze(&content, &options),
        });
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if global_json {
        let json = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{json}");
        return Ok(());
    }

    for (idx, entry) in reports.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_report(entry);
    }

    Ok(())
}

fn progress_bar(len: usize) -> Result<ProgressBar, indicatif::style::TemplateError> {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
        .progress_chars("#>-");
    pb.set_style(style);
    Ok(pb)
}

fn print_report(entry: &FileReport<'_>) {
    let r = &entry.report;
    println!("{}", entry.file.bold().underline());

    row("Words", r.words);
    row("Unique words", r.unique_words);
    row("Sentences", r.sentences);
    row("Paragraphs", r.paragraphs);
    row("Characters", r.characters.total);
    row("Without whitespace", r.characters.no_whitespace);
    row("Reading time", &r.reading_time.readable);
    row(
        "Words/sentence",
        format!("{:.1}", r.average_words_per_sentence),
    );
    row("Chars/word", format!("{:.1}", r.average_chars_per_word));
    row(
        "Passive voice",
        format!("{:.2}% ({})", r.passive_voice.percentage, r.passive_voice.label),
    );
    match &r.readability {
        Some(score) => {
            row(
                "Reading ease",
                format!("{:.1} ({})", score.reading_ease, score.ease_description),
            );
            row(
                "Grade level",
                format!("{:.1} ({})", score.grade, score.grade_label),
            );
        }
        None => row("Readability", "(no scorable text)".dimmed()),
    }

    if !r.top_words.is_empty() {
        let top = r
            .top_words
            .iter()
            .map(|e| format!("{} ({})", e.word, e.count))
            .collect::<Vec<_>>()
            .join(", ");
        row("Top words", top);
    }
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<20} {value}", format!("{label}:").dimmed());
}
