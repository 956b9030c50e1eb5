//! JSONL export.
//!
//! One JSON object per input, keyed by column name. Missing values are `null`.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Write;

use super::row::ResultTable;

/// Writes `table` as JSON lines.
///
/// # Returns
///
/// Returns the number of rows written, or an error if writing fails.
pub fn export_jsonl<W: Write>(table: &ResultTable, mut writer: W) -> Result<usize> {
    for row in table.rows() {
        let mut object = Map::with_capacity(row.len());
        for (column, cell) in table.columns().iter().zip(row) {
            let value = serde_json::to_value(cell).context("Failed to serialize cell")?;
            object.insert((*column).to_string(), value);
        }
        serde_json::to_writer(&mut writer, &Value::Object(object))
            .context("Failed to write JSON line")?;
        writer.write_all(b"\n").context("Failed to write JSON line")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{host_parts, process};
    use crate::resolver::PslResolver;

    fn render(table: &ResultTable) -> Vec<Value> {
        let mut out = Vec::new();
        export_jsonl(table, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_export_jsonl_records() {
        let records = process(&PslResolver::new(), ["www.example.com", "localhost"]);
        let values = render(&ResultTable::from_records(&records));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["subdomain"], "www");
        assert_eq!(values[0]["apex"], "example.com");
        assert_eq!(values[1]["normalized"], "localhost");
        assert!(values[1]["apex"].is_null());
        assert!(values[1]["subdomain"].is_null());
    }

    #[test]
    fn test_export_jsonl_host_parts() {
        let parts = host_parts(&PslResolver::new(), ["co.uk"]);
        let values = render(&ResultTable::from_host_parts(parts));
        assert_eq!(values[0]["host"], "co.uk");
        assert_eq!(values[0]["suffix"], "co.uk");
        assert!(values[0]["domain"].is_null());
    }

    #[test]
    fn test_export_jsonl_empty_table() {
        let table = ResultTable::from_records(&[]);
        assert!(render(&table).is_empty());
    }
}
