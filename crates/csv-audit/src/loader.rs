//! Bounded CSV loading.
//!
//! The loader reads the header line plus at most [`ROW_CAP`](crate::config::ROW_CAP)
//! data rows, treating every cell (numeric-looking or not) as raw text.
//! Fields are decoded with `String::from_utf8_lossy`, so invalid bytes are
//! substituted instead of failing the whole read.
//!
//! Ragged input is accepted: rows shorter than the header are padded with
//! missing cells, and cells beyond the header width are dropped. A file with
//! no header line at all is rejected as unparsable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::ROW_CAP;
use crate::error::{AuditError, Result};
use crate::types::Table;

/// Read up to [`ROW_CAP`] data rows from `path` into a [`Table`].
///
/// The first line supplies the column headers; uniqueness is not enforced,
/// so duplicate names keep their positions. Cells are raw text and have not
/// been normalized yet; an absent cell in a short row loads as missing.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    if headers.is_empty() {
        return Err(AuditError::EmptyInput(path.display().to_string()));
    }

    let width = headers.len();
    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();

    while rows.len() < ROW_CAP && reader.read_byte_record(&mut record)? {
        let mut row = Vec::with_capacity(width);
        for i in 0..width {
            row.push(
                record
                    .get(i)
                    .map(|field| String::from_utf8_lossy(field).into_owned()),
            );
        }
        rows.push(row);
    }

    debug!(
        rows = rows.len(),
        columns = width,
        "loaded table from {}",
        path.display()
    );

    Ok(Table::new(headers, rows))
}
