//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_parts` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use domain_parts::initialization::init_logger_with;
use domain_parts::{run_extract, Config, InputKind, LogFormat, LogLevel, Operation, OutputFormat};

/// Split hostnames into subdomain, domain, apex and public suffix.
#[derive(Debug, Parser)]
#[command(name = "domain_parts", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full decomposition: normalized, subdomain, apex, domain, suffix
    Extract(CommonArgs),
    /// Registrable (apex) domain of each input
    Apex(CommonArgs),
    /// Public suffix of each input
    Suffix(CommonArgs),
    /// Whether each input is itself a public suffix
    IsSuffix(CommonArgs),
    /// host, subdomain, domain, suffix (urltools-style columns)
    Compat(CommonArgs),
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Input file with one hostname per line, or `-` for stdin
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// How input lines are interpreted
    #[arg(long, value_enum, default_value_t = InputKind::Hosts)]
    input_kind: InputKind,

    /// Treat unlisted top-level labels as public suffixes
    #[arg(long)]
    allow_unknown_suffixes: bool,

    /// Spread large batches over all cores
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl Command {
    fn into_config(self) -> Config {
        let (operation, args) = match self {
            Command::Extract(args) => (Operation::Extract, args),
            Command::Apex(args) => (Operation::Apex, args),
            Command::Suffix(args) => (Operation::Suffix, args),
            Command::IsSuffix(args) => (Operation::IsSuffix, args),
            Command::Compat(args) => (Operation::Compat, args),
        };
        Config {
            operation,
            file: args.file,
            output: args.output,
            format: args.format,
            input_kind: args.input_kind,
            allow_unknown_suffixes: args.allow_unknown_suffixes,
            parallel: args.parallel,
            log_level: args.log_level,
            log_format: args.log_format,
        }
    }
}

fn main() -> Result<()> {
    // RUST_LOG may live in a .env file; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Cli::parse().command.into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_extract(config) {
        Ok(report) => {
            if let Some(path) = &report.output {
                eprintln!(
                    "Processed {} input{} ({} resolved) in {:.1}s - results saved in {}",
                    report.total_inputs,
                    if report.total_inputs == 1 { "" } else { "s" },
                    report.resolved,
                    report.elapsed_seconds,
                    path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_parts error: {:#}", e);
            process::exit(1);
        }
    }
}
