//! Reading batch inputs from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use log::info;

use crate::app::host_from_url;
use crate::config::{Config, InputKind, COMMENT_PREFIX};

/// Reads the configured input source into one byte string per input.
///
/// Lines are split on `\n` (a trailing `\r` is dropped). Blank lines and
/// lines starting with `#` are skipped; everything else is kept in order,
/// including lines that are not valid UTF-8.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or read.
pub fn read_inputs(config: &Config) -> Result<Vec<Vec<u8>>> {
    let inputs = if config.reads_stdin() {
        info!("Reading inputs from stdin");
        read_lines(io::stdin().lock())?
    } else {
        let file = File::open(&config.file).with_context(|| {
            format!("Failed to open input file: {}", config.file.display())
        })?;
        read_lines(BufReader::new(file))?
    };

    let inputs = match config.input_kind {
        InputKind::Hosts => inputs,
        InputKind::Urls => inputs.into_iter().map(url_line_to_host).collect(),
    };

    info!("Total inputs: {}", inputs.len());
    Ok(inputs)
}

/// Splits `reader` into input lines, skipping blanks and comments.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut inputs = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line.context("Failed to read input line")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if is_skipped(&line) {
            continue;
        }
        inputs.push(line);
    }
    Ok(inputs)
}

fn is_skipped(line: &[u8]) -> bool {
    let trimmed = line.trim_ascii();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX.as_bytes())
}

fn url_line_to_host(line: Vec<u8>) -> Vec<u8> {
    match String::from_utf8(line) {
        Ok(text) => host_from_url(text.trim()).into_bytes(),
        // Leave invalid UTF-8 for the normalizer to reject
        Err(e) => e.into_bytes(),
    }
}
