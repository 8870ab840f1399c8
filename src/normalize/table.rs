//! Tabular data model produced by normalization

use std::fmt;

use serde_json::Value;

/// Classification of a JSON value, used in shape diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a parsed JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scalar cell of the output table
///
/// Numbers keep the `serde_json::Number` payload, so integers round-trip
/// exactly and floats render in their shortest round-trip form.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Render the cell for delimited output.
    ///
    /// Null becomes an empty field; booleans use the lowercase `true`/`false`
    /// literals. Field quoting is the writer's concern, not the cell's.
    pub fn render(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Bool(true) => "true".to_string(),
            Cell::Bool(false) => "false".to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::String(s) => s.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Flat table: ordered unique column names plus ordered rows
///
/// Invariant: every row holds exactly one cell per declared column, in
/// column order. Rows for records that lacked a leaf path carry
/// [`Cell::Null`] in that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Column names in first-appearance order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in record order; each row is aligned to [`Table::columns`]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)
    }
}
