//! Configuration loading and discovery.
//!
//! Sources are layered with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `~/.config/wordmeter/config.<ext>`
//! 3. Project config: `.wordmeter.<ext>` then `wordmeter.<ext>` in the
//!    closest directory (walking up from the search root) that has one
//! 4. Explicit files, in the order given
//! 5. `WORDMETER_*` environment variables
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`. Files in the same
//! directory are all merged; later extensions override earlier ones.
//!
//! The merged configuration is validated before it is returned, so a loaded
//! [`Config`] always holds usable values.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wordmeter_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("{} wpm", config.words_per_minute);
//! ```

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::metrics::DEFAULT_WORDS_PER_MINUTE;
use crate::report::DEFAULT_TOP_WORDS;
use crate::search::DEFAULT_SEARCH_LIMIT;

/// The configuration for wordmeter.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Reading speed for reading-time estimates. Must be positive.
    pub words_per_minute: f64,
    /// Maximum number of word search results. Must be non-zero.
    pub search_limit: usize,
    /// Number of most frequent words shown in reports.
    pub top_words: usize,
    /// Leave stop words out of frequency tables by default.
    pub exclude_stop_words: bool,
    /// Default maximum passive voice percentage for the `passive` command.
    pub passive_max_percent: Option<f64>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Applies to both the CLI and the MCP server. Use
    /// `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Extra platform character limits (name → limit).
    ///
    /// A name matching a built-in platform (`x`, `sms`, ...) overrides its
    /// limit; any other name adds a platform.
    pub platform_limits: HashMap<String, usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            search_limit: DEFAULT_SEARCH_LIMIT,
            top_words: DEFAULT_TOP_WORDS,
            exclude_stop_words: false,
            passive_max_percent: None,
            max_input_bytes: None,
            disable_input_limit: false,
            platform_limits: HashMap::new(),
        }
    }
}

impl Config {
    /// Reject values the engine cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.words_per_minute > 0.0 && self.words_per_minute.is_finite()) {
            return Err(ConfigError::invalid(
                "words_per_minute",
                format!("must be a positive number, got {}", self.words_per_minute),
            ));
        }
        if self.search_limit == 0 {
            return Err(ConfigError::invalid("search_limit", "must be at least 1"));
        }
        if let Some(max) = self.passive_max_percent
            && !(0.0..=100.0).contains(&max)
        {
            return Err(ConfigError::invalid(
                "passive_max_percent",
                format!("must be between 0 and 100, got {max}"),
            ));
        }
        if let Some((name, _)) = self.platform_limits.iter().find(|(_, limit)| **limit == 0) {
            return Err(ConfigError::invalid(
                format!("platform_limits.{name}"),
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// The input size limit in effect, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions, lowest precedence first.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "wordmeter";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "WORDMETER_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads the user config and stops at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/wordmeter/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load, merge, and validate configuration from every source.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // WORDMETER_WORDS_PER_MINUTE=300, WORDMETER_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            words_per_minute = config.words_per_minute,
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fail when no config file exists.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files from the closest directory that has any, dotfiles first.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| format!("{stem}.{ext}"))
                })
                .map(|name| dir.join(name))
                .filter(|path| path.is_file())
                .collect();

            if !found.is_empty() {
                tracing::debug!(dir = %dir, count = found.len(), "found project config");
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/wordmeter/` on Linux, `~/Library/Application Support/wordmeter/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    fn load_file(path: &Utf8Path) -> ConfigResult<Config> {
        ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_file(path)
            .load()
            .map(|(config, _)| config)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.words_per_minute, 250.0);
        assert_eq!(config.search_limit, 50);
        assert_eq!(config.top_words, 10);
        assert!(config.platform_limits.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.words_per_minute, 250.0);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "config.toml",
            "log_level = \"debug\"\nwords_per_minute = 200.0\ntop_words = 5\n",
        );

        let config = load_file(&path).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.words_per_minute, 200.0);
        assert_eq!(config.top_words, 5);
        assert_eq!(config.search_limit, 50);
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = write_config(&tmp, "base.toml", "search_limit = 10\n");
        let over = write_config(&tmp, "override.toml", "search_limit = 20\n");

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.search_limit, 20);
        assert_eq!(sources.primary_file(), Some(over.as_path()));
    }

    #[test]
    fn test_yaml_and_json_formats() {
        let tmp = TempDir::new().unwrap();
        let yaml = write_config(&tmp, "c.yaml", "exclude_stop_words: true\n");
        assert!(load_file(&yaml).unwrap().exclude_stop_words);

        let json = write_config(&tmp, "c.json", r#"{"passive_max_percent": 12.5}"#);
        assert_eq!(load_file(&json).unwrap().passive_max_percent, Some(12.5));
    }

    #[test]
    fn test_platform_limits_from_toml() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "config.toml",
            "[platform_limits]\nx = 25000\nnewsletter-subject = 50\n",
        );

        let config = load_file(&path).unwrap();
        assert_eq!(config.platform_limits.get("x"), Some(&25000));
        assert_eq!(config.platform_limits.get("newsletter-subject"), Some(&50));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".wordmeter.toml"), "words_per_minute = 180.0\n").unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, 180.0);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".wordmeter.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_regular_file_overrides_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".wordmeter.toml"), "top_words = 3\nsearch_limit = 7\n")
            .unwrap();
        fs::write(tmp.path().join("wordmeter.yaml"), "top_words: 4\n").unwrap();

        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&root)
            .load()
            .unwrap();

        assert_eq!(config.top_words, 4);
        assert_eq!(config.search_limit, 7);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn test_only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join("wordmeter.toml"), "search_limit = 5\n").unwrap();
        fs::write(child.join(".wordmeter.toml"), "top_words = 2\n").unwrap();

        let child = Utf8PathBuf::try_from(child).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child)
            .load()
            .unwrap();

        assert_eq!(config.top_words, 2);
        assert_eq!(config.search_limit, 50);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, ".wordmeter.toml", "words_per_minute = 100.0\n");
        let over = write_config(&tmp, "override.toml", "words_per_minute = 400.0\n");

        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&root)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, 400.0);
        assert_eq!(sources.project_files.len(), 1);
        assert_eq!(sources.explicit_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let tmp = TempDir::new().unwrap();
        for (contents, field) in [
            ("words_per_minute = 0.0\n", "words_per_minute"),
            ("words_per_minute = -5.0\n", "words_per_minute"),
            ("search_limit = 0\n", "search_limit"),
            ("passive_max_percent = 150.0\n", "passive_max_percent"),
            ("[platform_limits]\nsms = 0\n", "platform_limits.sms"),
        ] {
            let path = write_config(&tmp, "bad.toml", contents);
            match load_file(&path) {
                Err(ConfigError::Invalid { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_type_errors_are_deserialize_errors() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "bad.toml", "search_limit = \"many\"\n");
        assert!(matches!(load_file(&path), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_input_limit() {
        let mut config = Config::default();
        assert_eq!(config.input_limit(), Some(crate::DEFAULT_MAX_INPUT_BYTES));

        config.max_input_bytes = Some(1024);
        assert_eq!(config.input_limit(), Some(1024));

        config.disable_input_limit = true;
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn test_deserialize_from_yaml_directly() {
        let yaml = "top_words: 3\nplatform_limits:\n  x: 100\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.top_words, 3);
        assert_eq!(config.platform_limits.get("x"), Some(&100));
        assert_eq!(config.words_per_minute, 250.0);
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("wordmeter"));
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "config.toml", "exclude_stop_words = false\n");

        // SAFETY: Test environment; mutex serializes env access across tests.
        unsafe {
            std::env::set_var("WORDMETER_EXCLUDE_STOP_WORDS", "true");
        }

        let result = load_file(&path);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("WORDMETER_EXCLUDE_STOP_WORDS");
        }

        assert!(result.unwrap().exclude_stop_words);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_can_disable_input_limit() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: Test environment; mutex serializes env access across tests.
        unsafe {
            std::env::set_var("WORDMETER_DISABLE_INPUT_LIMIT", "true");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("WORDMETER_DISABLE_INPUT_LIMIT");
        }

        assert_eq!(result.unwrap().0.input_limit(), None);
    }
}
