//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::STDIN_MARKER;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to compute for each input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Full decomposition: normalized, subdomain, apex, domain, suffix
    Extract,
    /// Registrable domain only
    Apex,
    /// Public suffix only
    Suffix,
    /// Whether the input is itself a public suffix
    IsSuffix,
    /// host, subdomain, domain, suffix (suffix kept when nothing is registrable)
    Compat,
}

/// Output format for results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Tab-separated values with a header row
    Tsv,
    /// One JSON object per line
    Jsonl,
}

/// How input lines are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Each line is a hostname
    Hosts,
    /// Each line is a URL; its host is decomposed
    Urls,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_parts::{Config, OutputFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("hosts.txt"),
///     format: OutputFormat::Jsonl,
///     parallel: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// What to compute for each input
    pub operation: Operation,

    /// File to read inputs from (`-` for stdin)
    pub file: PathBuf,

    /// Output file (stdout if None)
    pub output: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// How input lines are interpreted
    pub input_kind: InputKind,

    /// Treat unlisted top-level labels as public suffixes
    pub allow_unknown_suffixes: bool,

    /// Spread the batch over all cores
    pub parallel: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Whether input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_MARKER
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::Extract,
            file: PathBuf::from(STDIN_MARKER),
            output: None,
            format: OutputFormat::Csv,
            input_kind: InputKind::Hosts,
            allow_unknown_suffixes: false,
            parallel: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
