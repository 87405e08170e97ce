//! Development tasks: shell completions and man pages.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "wordmeter development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Completions { out } => completions(&out),
        Task::Man { out } => man_pages(&out),
    }
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = wordmeter::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = generate_to(shell, &mut cmd, "wordmeter", out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man_pages(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = wordmeter::command();

    write_man(&cmd, out, "wordmeter")?;
    for sub in cmd.get_subcommands() {
        write_man(sub, out, &format!("wordmeter-{}", sub.get_name()))?;
    }
    Ok(())
}

fn write_man(cmd: &clap::Command, out: &Path, name: &str) -> io::Result<()> {
    let mut buf = Vec::new();
    Man::new(cmd.clone()).render(&mut buf)?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buf)?;
    println!("wrote {}", path.display());
    Ok(())
}
