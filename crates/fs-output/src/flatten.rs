//! Flattening of nested records into rectangular tables.
//!
//! Each record is serialised to a JSON object.  Top-level scalars become one
//! column each; a nested object becomes one column per entry, named
//! `{field}_{subkey}`, in the object's own key order.  The header comes from
//! the first record and every later record must produce exactly the same
//! column names.
//!
//! | Value         | Cell                          |
//! |---------------|-------------------------------|
//! | `null`        | empty                         |
//! | number / bool | its JSON text (`3.0`, `true`) |
//! | string        | the string, unquoted          |
//! | array / deeper object | compact JSON          |

use serde::Serialize;
use serde_json::Value;

use fs_sim::RunStats;

use crate::{OutputError, OutputResult};

/// A header plus rows of string cells, ready for a CSV writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsTable {
    pub header: Vec<String>,
    pub rows:   Vec<Vec<String>>,
}

impl StatsTable {
    /// Index of a column by name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// Flatten per-run statistics.  Fails on an empty batch.
pub fn flatten_stats(stats: &[RunStats]) -> OutputResult<StatsTable> {
    flatten_records(stats)
}

/// Flatten any batch of records that serialise to JSON objects.
pub fn flatten_records<T: Serialize>(records: &[T]) -> OutputResult<StatsTable> {
    let mut table = StatsTable::default();

    for (i, record) in records.iter().enumerate() {
        let cells = flatten_one(&serde_json::to_value(record)?);
        if i == 0 {
            table.header = cells.iter().map(|(name, _)| name.clone()).collect();
        } else {
            check_columns(i, &table.header, &cells)?;
        }
        table.rows.push(cells.into_iter().map(|(_, cell)| cell).collect());
    }

    if table.rows.is_empty() {
        return Err(OutputError::EmptyBatch);
    }
    Ok(table)
}

fn flatten_one(value: &Value) -> Vec<(String, String)> {
    let Value::Object(fields) = value else {
        return vec![("value".to_owned(), cell(value))];
    };
    let mut out = Vec::with_capacity(fields.len());
    for (field, v) in fields {
        match v {
            Value::Object(entries) => {
                for (key, sub) in entries {
                    out.push((format!("{field}_{key}"), cell(sub)));
                }
            }
            _ => out.push((field.clone(), cell(v))),
        }
    }
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null      => String::new(),
        Value::String(s) => s.clone(),
        other            => other.to_string(),
    }
}

fn check_columns(record: usize, header: &[String], cells: &[(String, String)]) -> OutputResult<()> {
    let longest = header.len().max(cells.len());
    for i in 0..longest {
        let expected = header.get(i);
        let found = cells.get(i).map(|(name, _)| name);
        if expected != found {
            return Err(OutputError::ColumnMismatch {
                record,
                expected: expected.cloned(),
                found:    found.cloned(),
            });
        }
    }
    Ok(())
}
