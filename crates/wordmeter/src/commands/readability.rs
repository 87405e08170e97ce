//! Readability command: Flesch Reading Ease and Flesch-Kincaid Grade.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::readability;

use super::{display_name, load_text};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = load_text(&args.file, args.raw, max_input_bytes)?;
    let name = display_name(&args.file);

    let Some(report) = readability::score(&content) else {
        bail!("{name} has no scorable text");
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} words, {} sentences, {} syllables",
            name.bold(),
            report.words,
            report.sentences,
            report.syllables
        );
        println!(
            "  Reading ease: {:.1} ({})",
            report.reading_ease, report.ease_description
        );
        println!("  Grade level:  {:.1} ({})", report.grade, report.grade_label);
    }

    if let Some(max) = args.max_grade {
        if report.grade > max {
            bail!(
                "{name} scores grade {:.1} (max: {max:.0}). \
                 Shorten sentences or use simpler words.",
                report.grade,
            );
        }
        if !global_json {
            println!("{} grade {:.1} is within {max:.0}", "PASS:".green(), report.grade);
        }
    }

    Ok(())
}
