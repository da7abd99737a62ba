//! Structural audit over a normalized table.
//!
//! All checks here assume [`normalize_blanks`](crate::normalize::normalize_blanks)
//! has already run, so a missing cell is exactly a `None`.

use std::collections::HashMap;

use crate::config::{BLANK_HEADER_MARKER, PLACEHOLDER_HEADER_PREFIX};
use crate::types::Table;

/// Missingness ratios over the full row-by-column grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Missingness {
    /// Fraction of rows where every cell is missing, in [0, 1].
    pub row_ratio: f64,
    /// Fraction of missing cells over the whole grid, in [0, 1].
    pub cell_ratio: f64,
}

/// Computes header anomalies and missingness statistics.
pub struct StructureAuditor;

impl StructureAuditor {
    /// Flag problematic column names, in original column order.
    ///
    /// A header that trims to nothing contributes `"(blank)"`; a header that
    /// starts with the auto-generated placeholder prefix contributes its
    /// literal text. The two checks are independent and the result is not
    /// deduplicated, so the list may contain repeats.
    pub fn header_issues(headers: &[String]) -> Vec<String> {
        let mut issues = Vec::new();
        for header in headers {
            if header.trim().is_empty() {
                issues.push(BLANK_HEADER_MARKER.to_string());
            }
            if header.starts_with(PLACEHOLDER_HEADER_PREFIX) {
                issues.push(header.clone());
            }
        }
        issues
    }

    /// Names that appear more than once across all columns, by exact string
    /// match, reported in first-seen order.
    pub fn duplicate_headers(headers: &[String]) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for header in headers {
            *counts.entry(header.as_str()).or_insert(0) += 1;
        }

        let mut duplicates = Vec::new();
        for header in headers {
            if counts[header.as_str()] > 1 && !duplicates.contains(header) {
                duplicates.push(header.clone());
            }
        }
        duplicates
    }

    /// Missing-row and missing-cell ratios for the table.
    ///
    /// An empty table is maximally missing by convention: both ratios are
    /// exactly 1.0 when there are no data rows, and the cell scan is skipped
    /// entirely.
    pub fn missingness(table: &Table) -> Missingness {
        let row_count = table.height();
        if row_count == 0 {
            return Missingness {
                row_ratio: 1.0,
                cell_ratio: 1.0,
            };
        }

        let mut empty_rows = 0usize;
        let mut missing_cells = 0usize;
        for row in &table.rows {
            let missing_in_row = row.iter().filter(|cell| cell.is_none()).count();
            missing_cells += missing_in_row;
            if missing_in_row == row.len() {
                empty_rows += 1;
            }
        }

        // The max(1, ..) guards keep the denominator non-zero for degenerate
        // shapes.
        let total_cells = row_count.max(1) * table.width().max(1);

        Missingness {
            row_ratio: empty_rows as f64 / row_count as f64,
            cell_ratio: missing_cells as f64 / total_cells as f64,
        }
    }
}
