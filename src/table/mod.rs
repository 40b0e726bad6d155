//! Materialized query results.
//!
//! A [`ResultTable`] is the tabular output of one fetch: column names in
//! store order plus rows of scalar cells. Tables are built fresh per fetch
//! and discarded after rendering; nothing here is cached.
//!
//! The chart pipeline relies on a positional contract: column 0 is the
//! categorical field, column 1 the measured field, whatever their names.

use serde::Serialize;
use std::fmt;

/// One scalar value in a result row.
///
/// MySQL reports aggregates like `SUM()` as DECIMAL, which the text protocol
/// delivers as strings; [`Cell::as_f64`] parses those so the chart layer can
/// treat the measure column uniformly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(String),
}

impl Cell {
    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Null | Cell::Date(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str(""),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) | Cell::Date(s) => f.write_str(s),
        }
    }
}

/// Ordered rows of one query execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column 0 of every row, rendered for display. The categorical axis.
    pub fn label_column(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.first().map(|c| c.to_string()).unwrap_or_default())
            .collect()
    }

    /// A column as f64 values. `None` for any row whose cell has no numeric
    /// reading (the caller decides whether that is an error).
    pub fn numeric_column(&self, idx: usize) -> Option<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(idx).and_then(Cell::as_f64))
            .collect()
    }

    /// Rows as display strings, row-major. Serves the JSON API and the CLI
    /// table printer.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect())
            .collect()
    }
}
