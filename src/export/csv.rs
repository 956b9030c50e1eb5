//! CSV and TSV export.
//!
//! Missing values are written as `NA`.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::io::Write;

use super::row::{Cell, ResultTable};
use crate::config::MISSING_MARKER;

/// Writes `table` as delimited text with a header row.
///
/// # Arguments
///
/// * `table` - Rows to write
/// * `writer` - Destination
/// * `delimiter` - `b','` for CSV, `b'\t'` for TSV
///
/// # Returns
///
/// Returns the number of rows written, or an error if writing fails.
pub fn export_delimited<W: Write>(table: &ResultTable, writer: W, delimiter: u8) -> Result<usize> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);

    writer
        .write_record(table.columns())
        .context("Failed to write header row")?;

    for row in table.rows() {
        writer
            .write_record(row.iter().map(cell_text))
            .context("Failed to write row")?;
    }

    writer.flush().context("Failed to flush output")?;
    Ok(table.len())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Flag(flag) => flag.to_string(),
        Cell::Missing => MISSING_MARKER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::process;
    use crate::resolver::PslResolver;

    fn render(table: &ResultTable, delimiter: u8) -> String {
        let mut out = Vec::new();
        export_delimited(table, &mut out, delimiter).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_export_csv_records() {
        let records = process(&PslResolver::new(), ["WWW.Example.COM.", "example.com", "localhost"]);
        let out = render(&ResultTable::from_records(&records), b',');
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "original,normalized,subdomain,apex,domain,suffix");
        assert_eq!(lines[1], "WWW.Example.COM.,www.example.com,www,example.com,example,com");
        // Empty subdomain is an empty cell, not NA
        assert_eq!(lines[2], "example.com,example.com,,example.com,example,com");
        assert_eq!(lines[3], "localhost,localhost,NA,NA,NA,NA");
    }

    #[test]
    fn test_export_tsv() {
        let records = process(&PslResolver::new(), ["a.b.example.co.uk"]);
        let out = render(&ResultTable::from_records(&records), b'\t');
        assert_eq!(
            out.lines().nth(1),
            Some("a.b.example.co.uk\ta.b.example.co.uk\ta.b\texample.co.uk\texample\tco.uk")
        );
    }

    #[test]
    fn test_export_csv_quotes_commas() {
        let records = process(&PslResolver::new(), ["a,b.example.com"]);
        let out = render(&ResultTable::from_records(&records), b',');
        assert!(out.lines().nth(1).unwrap().starts_with("\"a,b.example.com\""));
    }

    #[test]
    fn test_export_csv_flags() {
        let originals = vec![b"com".to_vec(), b"example.com".to_vec()];
        let table = ResultTable::from_values("is_suffix", &originals, vec![Some(true), Some(false)]);
        assert_eq!(render(&table, b','), "original,is_suffix\ncom,true\nexample.com,false\n");
    }
}
