//! Findings, penalties, and the overall verdict.
//!
//! Each threshold breach becomes a [`Finding`] carrying a score penalty and
//! a rough remediation effort in error units. The overall score starts at
//! 100 and loses the summed penalties; the verdict color follows the score,
//! except that any critical finding forces red.

use crate::audit::Missingness;
use crate::config::{
    ERROR_UNITS_DUPLICATE_HEADERS_BASE, ERROR_UNITS_HEADER_ISSUES_BASE, ERROR_UNITS_MISSING_CELLS_MAX,
    ERROR_UNITS_MIXED_CURRENCY, ERROR_UNITS_MIXED_DATES, ERROR_UNITS_PII,
    ERROR_UNITS_SPARSE_ROWS_MAX, FINDING_DETAIL_EXAMPLES, MISSING_CELL_RATIO_THRESHOLD,
    PENALTY_DUPLICATE_HEADERS, PENALTY_HEADER_ISSUES, PENALTY_MISSING_CELLS, PENALTY_MIXED_CURRENCY,
    PENALTY_MIXED_DATES, PENALTY_PII_DETECTED, PENALTY_SPARSE_ROWS, SCORE_GREEN_THRESHOLD,
    SCORE_YELLOW_THRESHOLD, SPARSE_ROW_RATIO_THRESHOLD,
};
use crate::pii::masked_examples;
use crate::types::{Finding, PiiScan, Severity, StructureSignals, VerdictColor};

/// Evaluate the audit statistics into findings, in a fixed order so output
/// is stable across runs.
pub fn evaluate(
    missingness: &Missingness,
    header_issues: &[String],
    duplicate_headers: &[String],
    pii: &PiiScan,
    signals: &StructureSignals,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if missingness.row_ratio > SPARSE_ROW_RATIO_THRESHOLD {
        findings.push(Finding {
            id: "csv.sparse_rows".to_string(),
            severity: Severity::Warn,
            title: "Low Quality: Sparse Rows".to_string(),
            detail: format!(
                "~{}% of sampled rows are empty.",
                (missingness.row_ratio * 100.0).round() as u32
            ),
            penalty: PENALTY_SPARSE_ROWS,
            error_units: ratio_units(missingness.row_ratio, ERROR_UNITS_SPARSE_ROWS_MAX),
        });
    }

    if !header_issues.is_empty() {
        findings.push(Finding {
            id: "csv.header_issues".to_string(),
            severity: Severity::Warn,
            title: "Headers: Inconsistent".to_string(),
            detail: format!(
                "Found suspicious headers: {}.",
                preview(header_issues)
            ),
            penalty: PENALTY_HEADER_ISSUES,
            error_units: ERROR_UNITS_HEADER_ISSUES_BASE + header_issues.len() as u32,
        });
    }

    if !duplicate_headers.is_empty() {
        findings.push(Finding {
            id: "csv.duplicate_headers".to_string(),
            severity: Severity::Warn,
            title: "Headers: Duplicate Columns".to_string(),
            detail: format!(
                "Duplicate headers detected: {}.",
                preview(duplicate_headers)
            ),
            penalty: PENALTY_DUPLICATE_HEADERS,
            error_units: ERROR_UNITS_DUPLICATE_HEADERS_BASE + duplicate_headers.len() as u32,
        });
    }

    if missingness.cell_ratio > MISSING_CELL_RATIO_THRESHOLD {
        findings.push(Finding {
            id: "csv.missing_cells".to_string(),
            severity: Severity::Warn,
            title: "Missing Values: High".to_string(),
            detail: format!(
                "~{}% of sampled cells are empty.",
                (missingness.cell_ratio * 100.0).round() as u32
            ),
            penalty: PENALTY_MISSING_CELLS,
            error_units: ratio_units(missingness.cell_ratio, ERROR_UNITS_MISSING_CELLS_MAX),
        });
    }

    if !pii.is_empty() {
        let examples = masked_examples(pii);
        findings.push(Finding {
            id: "pii.detected".to_string(),
            severity: Severity::Critical,
            title: "CRITICAL ALERT: PII Detected".to_string(),
            detail: format!(
                "Requires scrubbing. Emails: {}, SSNs: {}, Credit cards: {}. Examples: {}",
                pii.emails.len(),
                pii.ssns.len(),
                pii.credit_cards.len(),
                examples
                    .iter()
                    .take(3)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            penalty: PENALTY_PII_DETECTED,
            error_units: ERROR_UNITS_PII,
        });
    }

    if signals.mixed_date_formats {
        findings.push(Finding {
            id: "structure.mixed_dates".to_string(),
            severity: Severity::Warn,
            title: "Formatting: Mixed Date Formats".to_string(),
            detail: "Detected multiple date patterns (DD/MM vs MM/DD) in the sample.".to_string(),
            penalty: PENALTY_MIXED_DATES,
            error_units: ERROR_UNITS_MIXED_DATES,
        });
    }

    if signals.currency_symbols.len() > 1 {
        findings.push(Finding {
            id: "structure.mixed_currency".to_string(),
            severity: Severity::Warn,
            title: "Formatting: Inconsistent Currency".to_string(),
            detail: format!(
                "Detected multiple currency markers: {}.",
                signals.currency_symbols.join(", ")
            ),
            penalty: PENALTY_MIXED_CURRENCY,
            error_units: ERROR_UNITS_MIXED_CURRENCY,
        });
    }

    findings
}

/// Scale a ratio to error units as whole percentage points, capped.
fn ratio_units(ratio: f64, max: u32) -> u32 {
    max.min((ratio * 100.0).ceil() as u32)
}

fn preview(values: &[String]) -> String {
    values
        .iter()
        .take(FINDING_DETAIL_EXAMPLES)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Overall score: 100 minus summed penalties, clamped to [0, 100].
pub fn score_from_findings(findings: &[Finding]) -> u32 {
    let penalty: i64 = findings.iter().map(|f| i64::from(f.penalty)).sum();
    (100 - penalty).clamp(0, 100) as u32
}

/// Verdict color for a score; any critical finding forces red.
pub fn color_from(score: u32, has_critical: bool) -> VerdictColor {
    let score = i64::from(score);
    if has_critical || score < SCORE_YELLOW_THRESHOLD {
        VerdictColor::Red
    } else if score < SCORE_GREEN_THRESHOLD {
        VerdictColor::Yellow
    } else {
        VerdictColor::Green
    }
}

/// Total error units across all findings.
pub fn estimate_error_units(findings: &[Finding]) -> u32 {
    findings.iter().map(|f| f.error_units).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clean() -> (Missingness, Vec<String>, Vec<String>, PiiScan, StructureSignals) {
        (
            Missingness {
                row_ratio: 0.0,
                cell_ratio: 0.0,
            },
            Vec::new(),
            Vec::new(),
            PiiScan::default(),
            StructureSignals::default(),
        )
    }

    #[test]
    fn test_clean_table_has_no_findings_and_green_verdict() {
        let (missingness, issues, dups, pii, signals) = clean();
        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);

        assert!(findings.is_empty());
        let score = score_from_findings(&findings);
        assert_eq!(score, 100);
        assert_eq!(color_from(score, false), VerdictColor::Green);
    }

    #[test]
    fn test_sparse_rows_finding_scales_error_units() {
        let (mut missingness, issues, dups, pii, signals) = clean();
        missingness.row_ratio = 0.5;

        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "csv.sparse_rows");
        assert_eq!(findings[0].penalty, 18);
        // 50 percentage points capped at the maximum.
        assert_eq!(findings[0].error_units, 16);
        assert!(findings[0].detail.contains("~50%"));
    }

    #[test]
    fn test_header_findings_list_examples() {
        let (missingness, _, _, pii, signals) = clean();
        let issues: Vec<String> = ["(blank)", "Unnamed: 3", "Unnamed: 4", "(blank)", "(blank)"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let dups = vec!["a".to_string()];

        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        assert_eq!(findings.len(), 2);

        assert_eq!(findings[0].id, "csv.header_issues");
        assert_eq!(findings[0].error_units, 4 + 5);
        // Detail previews only the first four.
        assert_eq!(findings[0].detail.matches("(blank)").count(), 2);

        assert_eq!(findings[1].id, "csv.duplicate_headers");
        assert_eq!(findings[1].error_units, 3 + 1);
    }

    #[test]
    fn test_missing_cells_threshold_is_exclusive() {
        let (mut missingness, issues, dups, pii, signals) = clean();
        missingness.cell_ratio = 0.3;
        assert!(evaluate(&missingness, &issues, &dups, &pii, &signals).is_empty());

        missingness.cell_ratio = 0.31;
        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        assert_eq!(findings[0].id, "csv.missing_cells");
    }

    #[test]
    fn test_pii_finding_is_critical_and_masks_examples() {
        let (missingness, issues, dups, _, signals) = clean();
        let pii = PiiScan {
            emails: vec!["jane@example.com".to_string()],
            ssns: vec!["123-45-6789".to_string()],
            credit_cards: Vec::new(),
        };

        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert!(findings[0].detail.contains("j***@example.com"));
        assert!(findings[0].detail.contains("***-**-6789"));
        assert!(!findings[0].detail.contains("jane@example.com"));

        let score = score_from_findings(&findings);
        assert_eq!(score, 55);
        assert_eq!(color_from(score, true), VerdictColor::Red);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let (mut missingness, _, _, _, mut signals) = clean();
        missingness.row_ratio = 1.0;
        missingness.cell_ratio = 1.0;
        signals.mixed_date_formats = true;
        signals.currency_symbols = vec!["$".to_string(), "EUR".to_string()];
        let issues = vec!["(blank)".to_string()];
        let dups = vec!["a".to_string()];
        let pii = PiiScan {
            emails: vec!["a@b.co".to_string()],
            ..Default::default()
        };

        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        assert_eq!(findings.len(), 7);
        // 18 + 10 + 6 + 12 + 45 + 8 + 6 = 105 points of penalty.
        assert_eq!(score_from_findings(&findings), 0);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(color_from(80, false), VerdictColor::Green);
        assert_eq!(color_from(79, false), VerdictColor::Yellow);
        assert_eq!(color_from(50, false), VerdictColor::Yellow);
        assert_eq!(color_from(49, false), VerdictColor::Red);
        assert_eq!(color_from(100, true), VerdictColor::Red);
    }

    #[test]
    fn test_estimate_error_units_sums() {
        let (mut missingness, issues, dups, pii, signals) = clean();
        missingness.row_ratio = 0.25;
        missingness.cell_ratio = 0.4;

        let findings = evaluate(&missingness, &issues, &dups, &pii, &signals);
        // 25 row points capped at 16, plus 40 cell points capped at 12.
        assert_eq!(estimate_error_units(&findings), 16 + 12);
    }
}
