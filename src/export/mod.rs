//! Export functionality for batch results.
//!
//! This module writes results in delimited (CSV, TSV) or JSONL form, to a
//! file or stdout.

mod csv;
mod jsonl;
mod row;

pub use self::csv::export_delimited;
pub use jsonl::export_jsonl;
pub use row::{Cell, ResultTable, HOST_PART_COLUMNS, RECORD_COLUMNS};

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::OutputFormat;

/// Writes `table` in `format` to `output`, or stdout if `None`.
///
/// # Returns
///
/// Returns the number of rows written, or an error if export fails.
pub fn export(table: &ResultTable, format: OutputFormat, output: Option<&Path>) -> Result<usize> {
    // Trait object handles both File and Stdout
    let writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    };

    match format {
        OutputFormat::Csv => export_delimited(table, writer, b','),
        OutputFormat::Tsv => export_delimited(table, writer, b'\t'),
        OutputFormat::Jsonl => export_jsonl(table, writer),
    }
}
