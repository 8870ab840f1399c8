//! Core flattening engine turning JSON documents into tables

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::ShapeError;
use crate::normalize::config::NormalizeConfig;
use crate::normalize::table::{Cell, Table, ValueKind};
use crate::normalize::NormalizeResult;

/// Flattens parsed JSON documents into tables
///
/// A top-level object is a single record; a top-level array contributes one
/// record per element, in order. Each record becomes exactly one row. Nested
/// objects extend the column path with their keys, nested arrays with their
/// decimal indices; arrays never expand into additional rows.
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a new normalizer
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Flatten a parsed JSON document into a table.
    ///
    /// Column order is the first-appearance order of leaf paths across the
    /// whole record sequence; rows preceding a column's first appearance are
    /// backfilled with null cells. Row order equals record order.
    pub fn normalize(&self, value: &Value) -> NormalizeResult<Table> {
        let records = collect_records(value)?;

        let mut builder = TableBuilder::new();
        for record in records {
            builder.start_row();
            for (key, child) in record {
                self.flatten_value(key.clone(), child, 1, &mut builder)?;
            }
            builder.finish_row();
        }
        Ok(builder.finish())
    }

    fn flatten_value(
        &self,
        path: String,
        value: &Value,
        depth: usize,
        builder: &mut TableBuilder,
    ) -> NormalizeResult<()> {
        if depth > self.config.max_depth {
            return Err(ShapeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.flatten_value(self.join(&path, key), child, depth + 1, builder)?;
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    let segment = index.to_string();
                    self.flatten_value(self.join(&path, &segment), child, depth + 1, builder)?;
                }
            }
            Value::Null => builder.set(path, Cell::Null),
            Value::Bool(b) => builder.set(path, Cell::Bool(*b)),
            Value::Number(n) => builder.set(path, Cell::Number(n.clone())),
            Value::String(s) => builder.set(path, Cell::String(s.clone())),
        }

        Ok(())
    }

    fn join(&self, prefix: &str, segment: &str) -> String {
        let mut path = String::with_capacity(prefix.len() + segment.len() + 1);
        path.push_str(prefix);
        path.push(self.config.separator);
        path.push_str(segment);
        path
    }
}

/// Resolve the top-level value into its record sequence
fn collect_records(value: &Value) -> NormalizeResult<Vec<&Map<String, Value>>> {
    match value {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Object(map) => records.push(map),
                    other => {
                        return Err(ShapeError::InvalidRecord {
                            index,
                            found: ValueKind::of(other),
                        })
                    }
                }
            }
            Ok(records)
        }
        other => Err(ShapeError::UnsupportedTopLevel {
            found: ValueKind::of(other),
        }),
    }
}

/// Accumulates columns in first-appearance order while rows stream in
struct TableBuilder {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
    current: Vec<Cell>,
}

impl TableBuilder {
    fn new() -> Self {
        Self {
            columns: Vec::new(),
            index: HashMap::new(),
            rows: Vec::new(),
            current: Vec::new(),
        }
    }

    fn start_row(&mut self) {
        self.current.clear();
    }

    /// Place a cell at `path` in the current row, declaring the column on
    /// first sight. A path hit twice within one record keeps the last write.
    fn set(&mut self, path: String, cell: Cell) {
        let idx = match self.index.get(&path) {
            Some(&idx) => idx,
            None => {
                let idx = self.columns.len();
                self.index.insert(path.clone(), idx);
                self.columns.push(path);
                idx
            }
        };

        if self.current.len() <= idx {
            self.current.resize(idx + 1, Cell::Null);
        }
        self.current[idx] = cell;
    }

    fn finish_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.current));
    }

    /// Pad every row to the final column count and seal the table
    fn finish(mut self) -> Table {
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, Cell::Null);
        }
        Table::new(self.columns, self.rows)
    }
}

/// Flatten a parsed JSON document with an explicit configuration
pub fn normalize_value(value: &Value, config: &NormalizeConfig) -> NormalizeResult<Table> {
    Normalizer::new(config.clone()).normalize(value)
}
