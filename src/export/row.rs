//! Tabular view of batch results.
//!
//! Every operation's output is flattened into named columns of [`Cell`]s so
//! the CSV and JSONL writers share one shape.

use serde::Serialize;

use crate::pipeline::{DomainRecord, HostParts};

/// Header of the full decomposition.
pub const RECORD_COLUMNS: &[&str] = &[
    "original",
    "normalized",
    "subdomain",
    "apex",
    "domain",
    "suffix",
];

/// Header of the compatibility lookup.
pub const HOST_PART_COLUMNS: &[&str] = &["host", "subdomain", "domain", "suffix"];

/// One output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// A present string value
    Text(String),
    /// A present yes/no value
    Flag(bool),
    /// Serialized as JSON `null`
    Missing,
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Cell::Missing, |v| Cell::Text(v.to_string()))
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Missing, Cell::Text)
    }
}

impl From<Option<bool>> for Cell {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Cell::Missing, Cell::Flag)
    }
}

/// Named columns plus rows of cells, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Full decomposition records.
    pub fn from_records(records: &[DomainRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.original().to_string()),
                    r.normalized().into(),
                    r.subdomain().into(),
                    r.apex().into(),
                    r.domain().into(),
                    r.suffix().into(),
                ]
            })
            .collect();
        Self {
            columns: RECORD_COLUMNS.to_vec(),
            rows,
        }
    }

    /// Compatibility `(host, subdomain, domain, suffix)` rows.
    pub fn from_host_parts(parts: Vec<HostParts>) -> Self {
        let rows = parts
            .into_iter()
            .map(|p| {
                vec![
                    Cell::Text(p.host),
                    p.subdomain.into(),
                    p.domain.into(),
                    p.suffix.into(),
                ]
            })
            .collect();
        Self {
            columns: HOST_PART_COLUMNS.to_vec(),
            rows,
        }
    }

    /// One value column next to the original input.
    ///
    /// `originals` and `values` must be in the same order.
    pub fn from_values<V>(column: &'static str, originals: &[Vec<u8>], values: Vec<V>) -> Self
    where
        V: Into<Cell>,
    {
        let rows = originals
            .iter()
            .zip(values)
            .map(|(original, value)| {
                vec![
                    Cell::Text(String::from_utf8_lossy(original).into_owned()),
                    value.into(),
                ]
            })
            .collect();
        Self {
            columns: vec!["original", column],
            rows,
        }
    }

    /// Column names, in output order.
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Rows, one per input.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
