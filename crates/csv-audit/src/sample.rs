//! Row sampling for the report.

use serde_json::{Map, Value};

use crate::types::Table;

/// The first `limit` rows as ordered JSON objects mapping column name to the
/// cell string, with missing cells rendered as `null`.
///
/// Column order is preserved in each object. When duplicate header names
/// exist, the later column wins the key; the audit statistics are unaffected
/// because they are computed positionally.
pub fn sample_rows(table: &Table, limit: usize) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .take(limit)
        .map(|row| {
            let mut record = Map::with_capacity(table.headers.len());
            for (header, cell) in table.headers.iter().zip(row) {
                let value = match cell {
                    Some(text) => Value::String(text.clone()),
                    None => Value::Null,
                };
                record.insert(header.clone(), value);
            }
            record
        })
        .collect()
}
