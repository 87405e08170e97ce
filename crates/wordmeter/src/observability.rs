//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for command output
//! and the MCP protocol. A daily-rotated log file is added when a log path or
//! directory is configured.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Explicit log file path.
const ENV_LOG_PATH: &str = "WORDMETER_LOG_PATH";
/// Directory for `wordmeter.log`.
const ENV_LOG_DIR: &str = "WORDMETER_LOG_DIR";
const LOG_FILE_NAME: &str = "wordmeter.log";

/// Where (if anywhere) file logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the rotated log files.
    pub log_dir: Option<PathBuf>,
    /// File name prefix for the rotated log files.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// `WORDMETER_LOG_PATH` wins, then `WORDMETER_LOG_DIR`, then the
    /// configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME)
                .to_string();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name,
            };
        }

        Self {
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_dir),
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` takes precedence. Otherwise `--quiet` limits output to errors,
/// each `-v` raises verbosity one step, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Keeps the background log writer alive; drop it at the end of `main`.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(ObservabilityGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_splits_into_dir_and_file() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/wm/run.log")),
            Some(PathBuf::from("/ignored")),
            None,
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/wm")));
        assert_eq!(cfg.file_name, "run.log");
    }

    #[test]
    fn bare_log_file_lands_in_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("run.log")), None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/env")));
        assert_eq!(cfg.file_name, LOG_FILE_NAME);
    }

    #[test]
    fn no_destination_means_stderr_only() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None).log_dir,
            None
        );
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_directive(true, 2, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 3, "warn"), "trace");
    }
}
