//! Centralized audit parameters.
//!
//! All magic numbers and thresholds live here for easy adjustment. The tool
//! takes no configuration files or environment variables, so these are
//! compile-time constants rather than a runtime config struct.

// =============================================================================
// Sampling
// =============================================================================

/// Maximum number of data rows loaded from the input file.
pub const ROW_CAP: usize = 5000;

/// Maximum rows included in the report's row sample.
pub const SAMPLE_ROWS: usize = 50;

// =============================================================================
// Header anomalies
// =============================================================================

/// Marker emitted for an empty or whitespace-only header.
pub const BLANK_HEADER_MARKER: &str = "(blank)";

/// Prefix conventional loaders assign to columns with a missing header cell.
pub const PLACEHOLDER_HEADER_PREFIX: &str = "Unnamed:";

// =============================================================================
// Finding thresholds
// =============================================================================

/// Ratio of fully-missing rows that triggers a warning.
pub const SPARSE_ROW_RATIO_THRESHOLD: f64 = 0.2;

/// Ratio of missing cells that triggers a warning.
pub const MISSING_CELL_RATIO_THRESHOLD: f64 = 0.3;

// =============================================================================
// Finding penalties (subtracted from the 100-point score)
// =============================================================================

/// PII detected in the sample.
pub const PENALTY_PII_DETECTED: u32 = 45;

/// High ratio of fully-missing rows.
pub const PENALTY_SPARSE_ROWS: u32 = 18;

/// Missing cells above threshold.
pub const PENALTY_MISSING_CELLS: u32 = 12;

/// Blank or placeholder headers.
pub const PENALTY_HEADER_ISSUES: u32 = 10;

/// Mixed date formats in the sample.
pub const PENALTY_MIXED_DATES: u32 = 8;

/// Duplicate header names.
pub const PENALTY_DUPLICATE_HEADERS: u32 = 6;

/// More than one currency marker in the sample.
pub const PENALTY_MIXED_CURRENCY: u32 = 6;

// =============================================================================
// Finding error units (rough remediation effort, quarter hours)
// =============================================================================

/// PII scrub script plus validation.
pub const ERROR_UNITS_PII: u32 = 6;

/// Sparse rows, scaled from the ratio, capped here.
pub const ERROR_UNITS_SPARSE_ROWS_MAX: u32 = 16;

/// Missing cells, scaled from the ratio, capped here.
pub const ERROR_UNITS_MISSING_CELLS_MAX: u32 = 12;

/// Header issues, base cost before the per-issue increment.
pub const ERROR_UNITS_HEADER_ISSUES_BASE: u32 = 4;

/// Duplicate headers, base cost before the per-name increment.
pub const ERROR_UNITS_DUPLICATE_HEADERS_BASE: u32 = 3;

/// One date-format transformation.
pub const ERROR_UNITS_MIXED_DATES: u32 = 3;

/// One currency normalization.
pub const ERROR_UNITS_MIXED_CURRENCY: u32 = 2;

// =============================================================================
// Verdict scoring
// =============================================================================

/// Score at or above this is a green verdict.
pub const SCORE_GREEN_THRESHOLD: i64 = 80;

/// Score at or above this (but below green) is yellow; below is red.
pub const SCORE_YELLOW_THRESHOLD: i64 = 50;

/// Maximum number of examples quoted inside a finding detail.
pub const FINDING_DETAIL_EXAMPLES: usize = 4;
