// Shared test helpers for input files and run configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use domain_parts::{Config, LogFormat, LogLevel, Operation, OutputFormat};
use tempfile::TempDir;

/// Writes `content` to an input file inside `dir` and returns its path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &TempDir, content: &[u8]) -> PathBuf {
    let path = dir.path().join("hosts.txt");
    std::fs::write(&path, content).expect("Failed to write input file");
    path
}

/// Builds a quiet config reading `input` and writing to `output`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(
    operation: Operation,
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Config {
    Config {
        operation,
        file: input.to_path_buf(),
        output: Some(output.to_path_buf()),
        format,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Reads an output file as lines.
#[allow(dead_code)] // Used by other test files
pub fn read_output_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
