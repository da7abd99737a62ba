//! Blank-cell normalization.
//!
//! A single global pass over the table that rewrites every empty or
//! whitespace-only cell to the missing marker. All downstream missingness
//! checks rely on this pass having run, so the definition of "missing" stays
//! consistent across the audit.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Table;

static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").expect("valid blank pattern"));

/// True when the value is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    BLANK_RE.is_match(value)
}

/// Replace every blank cell with the missing marker, in place.
///
/// Applies uniformly to all cells; header names are not touched.
pub fn normalize_blanks(table: &mut Table) {
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            if cell.as_deref().is_some_and(is_blank) {
                *cell = None;
            }
        }
    }
}
