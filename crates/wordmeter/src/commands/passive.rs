//! Passive command: passive voice detection with an optional ceiling.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::passive::{self, PassiveVoiceBand};

use super::{display_name, load_text};

/// Arguments for the `passive` subcommand.
#[derive(Args, Debug)]
pub struct PassiveArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Do not convert markdown files to plain text.
    #[arg(long)]
    pub raw: bool,

    /// Maximum acceptable passive voice percentage (0-100).
    #[arg(long)]
    pub passive_max: Option<f64>,

    /// Also print the extended guidance for the band.
    #[arg(long)]
    pub explain: bool,
}

/// Detect passive voice in a file.
#[instrument(name = "cmd_passive", skip_all, fields(file = %args.file))]
pub fn cmd_passive(
    args: PassiveArgs,
    global_json: bool,
    config_passive_max: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, passive_max = ?args.passive_max, "executing passive command");

    let content = load_text(&args.file, args.raw, max_input_bytes)?;
    let name = display_name(&args.file);
    let passive_max = args.passive_max.or(config_passive_max);

    let report = passive::check_passive_voice(&content, passive_max);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let label = match report.band {
            PassiveVoiceBand::None | PassiveVoiceBand::Minimal | PassiveVoiceBand::Low => {
                report.label.green().to_string()
            }
            PassiveVoiceBand::Moderate | PassiveVoiceBand::Noticeable => {
                report.label.yellow().to_string()
            }
            PassiveVoiceBand::High | PassiveVoiceBand::Excessive => report.label.red().to_string(),
        };
        println!(
            "{}: {}/{} sentences passive ({:.2}%), {label}",
            name.bold(),
            report.passive_count,
            report.sentence_count,
            report.percentage,
        );
        if args.explain {
            println!("  {}", report.description);
        }
        for sentence in &report.sentences {
            println!(
                "  {} \"{}\" ({} {})",
                format!("Sentence {}:", sentence.sentence_num).dimmed(),
                sentence.text,
                sentence.construction.auxiliary,
                sentence.construction.participle.cyan(),
            );
        }
    }

    if report.over_max {
        bail!(
            "{name} has {:.1}% passive voice (max: {:.0}%). Rewrite passive constructions.",
            report.percentage,
            report.passive_max.unwrap_or(0.0),
        );
    }

    Ok(())
}
