//! Value types shared across the audit pipeline.

use serde::{Deserialize, Serialize};

/// A cell value. `None` is the missing marker: semantically "no value
/// present", distinct from an empty string before normalization.
pub type Cell = Option<String>;

/// An in-memory table of text cells.
///
/// Headers come from the first line of the source file and are NOT
/// deduplicated: duplicate names co-exist positionally. Every row is aligned
/// with the headers (same length).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header line is not a row).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, equal to the number of header fields.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Critical,
}

/// Traffic-light verdict derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictColor {
    Green,
    Yellow,
    Red,
}

/// A single audit finding with its score penalty and a rough remediation
/// effort in error units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub detail: String,
    pub penalty: u32,
    pub error_units: u32,
}

/// Deduplicated PII hits from a text scan, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiiScan {
    pub emails: Vec<String>,
    pub ssns: Vec<String>,
    /// Card numbers as bare digit strings, already Luhn-validated.
    pub credit_cards: Vec<String>,
}

impl PiiScan {
    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.ssns.is_empty() && self.credit_cards.is_empty()
    }
}

/// Formatting signals extracted from the sample text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureSignals {
    /// Both month-first and day-first date patterns were seen.
    pub mixed_date_formats: bool,
    /// Currency symbols and ISO codes present, in probe order.
    pub currency_symbols: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_dimensions() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Some("1".to_string()), None]],
        );
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&VerdictColor::Yellow).unwrap(),
            "\"yellow\""
        );
    }

    #[test]
    fn test_pii_scan_is_empty() {
        assert!(PiiScan::default().is_empty());

        let scan = PiiScan {
            emails: vec!["a@b.co".to_string()],
            ..Default::default()
        };
        assert!(!scan.is_empty());
    }
}
