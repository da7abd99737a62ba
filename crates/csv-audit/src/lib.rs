//! CSV Structure Audit Library
//!
//! Inspects a CSV file and reports structural quality signals: row and
//! column counts, header anomalies, duplicate headers, missingness ratios,
//! and a bounded sample of parsed rows, assembled into a single JSON report.
//! Intended as a quick diagnostic step before a CSV is ingested into a
//! larger pipeline.
//!
//! # Overview
//!
//! The audit is a linear pipeline over one in-memory table:
//!
//! - **Loading**: up to 5000 rows, every cell as text, lossy UTF-8 decoding
//! - **Normalization**: whitespace-only cells become the missing marker
//! - **Auditing**: header issues, duplicate headers, missingness ratios
//! - **Sampling**: the first 50 rows as ordered records
//! - **Findings** (optional): severity-ranked issues, a 0-100 score, and a
//!   traffic-light verdict, with PII detection and masking over the sample
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use csv_audit::{build_report, normalize_blanks, read_table, ReportOptions};
//! use std::path::Path;
//!
//! let mut table = read_table(Path::new("data.csv"))?;
//! normalize_blanks(&mut table);
//!
//! let report = build_report(&table, ReportOptions::default())?;
//! println!("{}", report.to_json_line()?);
//! ```
//!
//! Repeated runs over an unmodified file produce byte-identical output:
//! nothing in the report depends on time, randomness, or unordered
//! collections.

pub mod audit;
pub mod config;
pub mod error;
pub mod findings;
pub mod heuristics;
pub mod loader;
pub mod normalize;
pub mod pii;
pub mod report;
pub mod sample;
pub mod types;

// Re-exports for convenient access
pub use audit::{Missingness, StructureAuditor};
pub use error::{AuditError, Result};
pub use findings::{color_from, estimate_error_units, score_from_findings};
pub use heuristics::analyze_text_structure;
pub use loader::read_table;
pub use normalize::{is_blank, normalize_blanks};
pub use pii::{luhn_check, mask_email, mask_rows, mask_ssn, mask_text, scan_pii};
pub use report::{AuditReport, ReportOptions, build_report};
pub use sample::sample_rows;
pub use types::{Cell, Finding, PiiScan, Severity, StructureSignals, Table, VerdictColor};
