//! Limits command: platform character limits.

use std::collections::HashMap;

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::limits::{self, Platform};

use super::{display_name, read_input_file};

/// Arguments for the `limits` subcommand.
#[derive(Args, Debug)]
pub struct LimitsArgs {
    /// File to check (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Only check these platforms (repeatable).
    #[arg(short, long, value_enum)]
    pub platform: Vec<Platform>,

    /// Fail if the text exceeds any checked limit.
    #[arg(long)]
    pub strict: bool,
}

/// Compare a file's length against platform limits.
///
/// The text is measured as written; markdown is not converted.
#[instrument(name = "cmd_limits", skip_all, fields(file = %args.file))]
pub fn cmd_limits(
    args: LimitsArgs,
    global_json: bool,
    platform_limits: &HashMap<String, usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, platforms = ?args.platform, "executing limits command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let mut usage = limits::check_limits(&content, Some(platform_limits));
    if !args.platform.is_empty() {
        usage.retain(|u| args.platform.iter().any(|p| p.key() == u.name));
    }

    let name = display_name(&args.file);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&usage)?);
    } else {
        let used = usage.first().map_or(0, |u| u.used);
        println!("{}: {used} characters", name.bold());
        let width = usage.iter().map(|u| u.name.len()).max().unwrap_or(0);
        for u in &usage {
            let status = if u.over {
                format!("over by {}", u.used - u.limit).red().to_string()
            } else {
                format!("{} left", u.remaining).green().to_string()
            };
            println!("  {:<width$}  {:>6}  {status}", u.name, u.limit);
        }
    }

    let over: Vec<&str> = usage.iter().filter(|u| u.over).map(|u| u.name.as_str()).collect();
    if args.strict && !over.is_empty() {
        bail!("{name} exceeds the limit for {}", over.join(", "));
    }

    Ok(())
}
