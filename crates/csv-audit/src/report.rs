//! Report assembly and serialization.
//!
//! The report is the single JSON object the tool prints. Field order is
//! fixed by the struct declaration; the supplemental fields only appear
//! when findings were requested, so the default output shape never changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::audit::StructureAuditor;
use crate::config::SAMPLE_ROWS;
use crate::error::Result;
use crate::findings;
use crate::heuristics::analyze_text_structure;
use crate::pii::{mask_rows, scan_pii};
use crate::sample::sample_rows;
use crate::types::{Finding, Severity, Table, VerdictColor};

/// What to include beyond the core audit statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Append findings, score, and verdict to the report.
    pub findings: bool,
    /// Mask detected PII inside the emitted sample rows.
    pub mask_pii: bool,
}

/// The audit report, serialized as one line of JSON on stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub row_count: usize,
    pub column_count: usize,
    pub header_issues: Vec<String>,
    pub duplicate_headers: Vec<String>,
    pub missing_row_ratio: f64,
    pub missing_cell_ratio: f64,
    pub sample_rows: Vec<Map<String, Value>>,

    /// Present only when findings were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<Finding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictColor>,
}

/// Build the report for a normalized table.
///
/// The PII scan runs over the serialized sample text whenever either option
/// needs it, so masking and the PII finding always agree on what was seen.
pub fn build_report(table: &Table, options: ReportOptions) -> Result<AuditReport> {
    let header_issues = StructureAuditor::header_issues(&table.headers);
    let duplicate_headers = StructureAuditor::duplicate_headers(&table.headers);
    let missingness = StructureAuditor::missingness(table);
    let mut sample = sample_rows(table, SAMPLE_ROWS);

    let mut report_findings = None;
    let mut score = None;
    let mut verdict = None;

    if options.findings || options.mask_pii {
        let sample_text = serde_json::to_string(&sample)?;
        let pii = scan_pii(&sample_text);

        if options.findings {
            let signals = analyze_text_structure(&sample_text);
            let evaluated = findings::evaluate(
                &missingness,
                &header_issues,
                &duplicate_headers,
                &pii,
                &signals,
            );
            let total = findings::score_from_findings(&evaluated);
            let has_critical = evaluated.iter().any(|f| f.severity == Severity::Critical);
            verdict = Some(findings::color_from(total, has_critical));
            score = Some(total);
            report_findings = Some(evaluated);
        }

        if options.mask_pii {
            mask_rows(&mut sample, &pii);
        }
    }

    Ok(AuditReport {
        row_count: table.height(),
        column_count: table.width(),
        header_issues,
        duplicate_headers,
        missing_row_ratio: missingness.row_ratio,
        missing_cell_ratio: missingness.cell_ratio,
        sample_rows: sample,
        findings: report_findings,
        score,
        verdict,
    })
}

impl AuditReport {
    /// Serialize to a single line of JSON. Non-ASCII characters are
    /// preserved as-is, not escaped.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
