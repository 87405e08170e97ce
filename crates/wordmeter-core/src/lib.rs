//! Core library for wordmeter.
//!
//! Text metrics over plain `&str` input: character classification,
//! tokenization, sentence and paragraph segmentation, word frequency with
//! ranked search, reading time, passive voice, readability, and platform
//! character limits. Every metric is a pure function of its input and is
//! safe to call from any thread.
//!
//! # Modules
//!
//! - [`classify`] - Character classification counts
//! - [`text`] - Tokenizer, sentence segmenter, paragraph splitter
//! - [`frequency`] / [`search`] - Word frequency tables and ranked search
//! - [`metrics`] / [`passive`] / [`readability`] - Derived metrics
//! - [`limits`] - Per-platform character limits
//! - [`report`] - Everything at once
//! - [`config`] / [`error`] - Configuration loading and errors
//!
//! # Quick Start
//!
//! ```
//! use wordmeter_core::{ReportOptions, TextReport};
//!
//! let report = TextReport::analyze("The cat sat on the mat.", &ReportOptions::default());
//! assert_eq!(report.words, 6);
//! assert_eq!(report.sentences, 1);
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod frequency;
pub mod limits;
pub mod markdown;
pub mod metrics;
pub mod passive;
pub mod readability;
pub mod report;
pub mod search;
pub mod text;

pub use classify::CharacterCounts;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use frequency::FrequencyEntry;
pub use limits::{Platform, PlatformUsage};
pub use metrics::ReadingTime;
pub use passive::{PassiveVoiceBand, PassiveVoiceReport};
pub use readability::ReadabilityReport;
pub use report::{ReportOptions, TextReport};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
