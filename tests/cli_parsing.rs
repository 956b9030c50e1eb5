//! Tests for CLI subcommand parsing.

use clap::Parser;
use domain_parts::{InputKind, LogFormat, LogLevel, OutputFormat};
use std::path::PathBuf;

// The CLI types live in main.rs and cannot be imported, so this mirrors
// their structure to check the parsing rules.

#[derive(Debug, clap::Parser)]
#[command(name = "domain_parts")]
enum TestCliCommand {
    Extract(TestCommonArgs),
    Apex(TestCommonArgs),
    Suffix(TestCommonArgs),
    IsSuffix(TestCommonArgs),
    Compat(TestCommonArgs),
}

#[derive(Debug, clap::Args)]
struct TestCommonArgs {
    #[arg(default_value = "-")]
    file: PathBuf,
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = InputKind::Hosts)]
    input_kind: InputKind,
    #[arg(long)]
    allow_unknown_suffixes: bool,
    #[arg(long)]
    parallel: bool,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[test]
fn test_cli_extract_defaults() {
    let cli = TestCliCommand::try_parse_from(["domain_parts", "extract"])
        .expect("Should parse extract command");

    match cli {
        TestCliCommand::Extract(args) => {
            assert_eq!(args.file, PathBuf::from("-"));
            assert!(args.output.is_none());
            assert_eq!(args.format, OutputFormat::Csv);
            assert_eq!(args.input_kind, InputKind::Hosts);
            assert!(!args.allow_unknown_suffixes);
            assert!(!args.parallel);
            assert_eq!(
                log::LevelFilter::from(args.log_level),
                log::LevelFilter::Info
            );
            assert!(matches!(args.log_format, LogFormat::Plain));
        }
        other => panic!("Expected Extract, got {:?}", other),
    }
}

#[test]
fn test_cli_all_options() {
    let cli = TestCliCommand::try_parse_from([
        "domain_parts",
        "compat",
        "hosts.txt",
        "-o",
        "out.jsonl",
        "--format",
        "jsonl",
        "--input-kind",
        "urls",
        "--allow-unknown-suffixes",
        "--parallel",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    match cli {
        TestCliCommand::Compat(args) => {
            assert_eq!(args.file, PathBuf::from("hosts.txt"));
            assert_eq!(args.output, Some(PathBuf::from("out.jsonl")));
            assert_eq!(args.format, OutputFormat::Jsonl);
            assert_eq!(args.input_kind, InputKind::Urls);
            assert!(args.allow_unknown_suffixes);
            assert!(args.parallel);
            assert_eq!(
                log::LevelFilter::from(args.log_level),
                log::LevelFilter::Debug
            );
            assert!(matches!(args.log_format, LogFormat::Json));
        }
        other => panic!("Expected Compat, got {:?}", other),
    }
}

#[test]
fn test_cli_kebab_case_subcommand() {
    let cli = TestCliCommand::try_parse_from(["domain_parts", "is-suffix", "-"])
        .expect("Should parse is-suffix");
    assert!(matches!(cli, TestCliCommand::IsSuffix(_)));
}

#[test]
fn test_cli_each_subcommand() {
    for name in ["extract", "apex", "suffix", "is-suffix", "compat"] {
        assert!(
            TestCliCommand::try_parse_from(["domain_parts", name]).is_ok(),
            "{name} should parse"
        );
    }
}

#[test]
fn test_cli_rejects_unknown_format() {
    let result =
        TestCliCommand::try_parse_from(["domain_parts", "extract", "--format", "parquet"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    assert!(TestCliCommand::try_parse_from(["domain_parts", "scan", "urls.txt"]).is_err());
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(TestCliCommand::try_parse_from(["domain_parts"]).is_err());
}
